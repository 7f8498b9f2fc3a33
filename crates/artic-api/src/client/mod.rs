//! Collection API client.
//!
//! This module provides the main client type. Callers reach it through
//! the `ArticClientPort` implementation in `port.rs`.

mod artwork;
mod search;

use crate::config::ArticClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ArticConfig;
use tracing::warn;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default collection client using the reqwest HTTP backend.
pub type DefaultArticClient = ArticClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the artworks collection API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultArticClient` for production code.
pub struct ArticClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ArticConfig,
}

impl DefaultArticClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ArticClientConfig) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        Self {
            backend,
            config: internal_config,
        }
    }

    fn to_internal_config(config: &ArticClientConfig) -> ArticConfig {
        let defaults = ArticConfig::default();
        let base_url = Url::parse(&config.base_url).unwrap_or_else(|err| {
            warn!(base_url = %config.base_url, error = %err, "invalid base URL, using default");
            defaults.base_url.clone()
        });

        ArticConfig {
            base_url,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl<B: HttpBackend> ArticClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ArticConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
