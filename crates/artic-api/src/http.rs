//! HTTP backend abstraction for the collection API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and makes exactly one attempt per call.

use crate::error::{ArticError, ArticResult};
use crate::models::ArticConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `ArticClientPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    ///
    /// Non-success statuses fail with `ArticError::ApiRequestFailed`; a body
    /// that does not match `T` fails with `ArticError::JsonParse`.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ArticResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ArticConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ArticResult<T> {
        debug!(%url, "GET");
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArticError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let data: T = serde_json::from_str(&body)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub enum CannedResponse {
        /// 200 with this body
        Json(serde_json::Value),
        /// Failure with this status
        Status(u16),
    }

    /// A fake HTTP backend that returns canned responses and records
    /// every requested URL.
    pub struct FakeBackend {
        responses: Vec<(String, CannedResponse)>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub const fn new() -> Self {
            Self {
                responses: Vec::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Add a canned response for URLs containing `url_contains`.
        /// Earlier patterns win.
        pub fn with_response(mut self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses.push((url_contains.to_string(), response));
            self
        }

        /// URLs requested so far.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn find_response(&self, url: &str) -> Option<CannedResponse> {
            self.responses
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, response)| response.clone())
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ArticResult<T> {
            self.requests.lock().unwrap().push(url.to_string());

            match self.find_response(url.as_str()) {
                Some(CannedResponse::Json(json)) => serde_json::from_value(json).map_err(Into::into),
                Some(CannedResponse::Status(status)) => Err(ArticError::ApiRequestFailed {
                    status,
                    url: url.to_string(),
                }),
                None => Err(ArticError::ApiRequestFailed {
                    status: 404,
                    url: url.to_string(),
                }),
            }
        }
    }
}
