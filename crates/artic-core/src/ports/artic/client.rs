//! Collection API client port trait.

use super::error::ArticPortResult;
use super::types::{ArtworkPage, SearchPage};
use crate::domain::ArtworkId;
use async_trait::async_trait;

/// Port trait for the artwork collection API.
///
/// This trait defines the interface that the core services use to reach
/// the collection. The implementation lives in `artic-api`.
///
/// # Design
///
/// - Uses core-owned DTOs, not wire types
/// - Returns `ArticPortError` for all failures
/// - Read-only: no retries, no authentication
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticClientPort: Send + Sync {
    /// Fetch one page of search results for `query`.
    ///
    /// # Arguments
    ///
    /// * `query` - Free text, may be empty
    /// * `page` - 1-indexed page number
    async fn search(&self, query: &str, page: u64) -> ArticPortResult<SearchPage>;

    /// Fetch a single artwork by id.
    async fn get_artwork(&self, id: ArtworkId) -> ArticPortResult<ArtworkPage>;
}
