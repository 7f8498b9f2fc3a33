//! Internal error types for collection API operations.
//!
//! These errors are internal to `artic-api` and are mapped to core port errors
//! at the boundary.

use thiserror::Error;

/// Result type alias for collection API operations.
pub type ArticResult<T> = Result<T, ArticError>;

/// Errors related to collection API operations.
#[derive(Debug, Error)]
pub enum ArticError {
    /// API request failed with an HTTP error status.
    #[error("Collection API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
