//! Error types for collection API port operations.

use thiserror::Error;

use crate::domain::ArtworkId;

/// Errors from collection API port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
/// The `Display` output is what the search controller shows to users.
#[derive(Debug, Error)]
pub enum ArticPortError {
    /// The search endpoint answered with a non-success status.
    #[error("Search failed")]
    SearchFailed {
        /// HTTP status code
        status: u16,
    },

    /// The artwork endpoint answered with a non-success status.
    #[error("Art details failed")]
    ArtworkFailed {
        /// HTTP status code
        status: u16,
    },

    /// The requested artwork does not exist.
    #[error("Art not found: {id}")]
    NotFound {
        /// The artwork id that wasn't found
        id: ArtworkId,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

/// Result type alias for collection API port operations.
pub type ArticPortResult<T> = Result<T, ArticPortError>;
