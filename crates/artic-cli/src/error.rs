//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and their
//! mapping to process exit codes.

use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A search or lookup failed.
    #[error("{0}")]
    Core(String),

    /// The requested artwork could not be shown.
    #[error("Art not found: {0}")]
    NotFound(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Terminal IO error.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions (see sysexits.h).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) | Self::NotFound(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
