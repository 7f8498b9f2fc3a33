//! Collection API port definitions.
//!
//! This module defines the port trait and DTOs for talking to the artwork
//! collection API. The actual implementation lives in `artic-api`.

mod client;
mod error;
mod types;

#[cfg(test)]
pub use client::MockArticClientPort;
pub use client::ArticClientPort;
pub use error::{ArticPortError, ArticPortResult};
pub use types::{ArtworkPage, SearchPage};
