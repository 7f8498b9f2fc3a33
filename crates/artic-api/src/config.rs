//! Public configuration for the collection API client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

/// Default endpoint of the artworks collection.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Configuration for the collection API client.
///
/// # Example
///
/// ```
/// use artic_api::ArticClientConfig;
///
/// let config = ArticClientConfig::new()
///     .with_base_url("http://localhost:8080/api/v1/artworks")
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ArticClientConfig {
    /// Base URL of the artworks endpoint
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for ArticClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("artic-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ArticClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the artworks endpoint.
    ///
    /// Defaults to `https://api.artic.edu/api/v1/artworks`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
