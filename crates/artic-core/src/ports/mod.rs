//! Port definitions (traits) for external adapters.
//!
//! Ports define the interfaces that the core services depend on.
//! Adapters (like `artic-api`) implement these traits.

pub mod artic;

#[cfg(test)]
pub use artic::MockArticClientPort;
pub use artic::{ArticClientPort, ArticPortError, ArticPortResult, ArtworkPage, SearchPage};
