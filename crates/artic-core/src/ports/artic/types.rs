//! Core-owned DTOs for collection API operations.
//!
//! These types cross the boundary between `artic-api` and the services.
//! Wire-level quirks (null fields, extra keys) are resolved by the adapter.

use serde::{Deserialize, Serialize};

use crate::domain::{Artwork, ImageConfig, Pagination};

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    /// Image service configuration valid for these results
    pub config: ImageConfig,
    /// Artworks on this page, in API order
    pub data: Vec<Artwork>,
    /// Cursor describing this page
    pub pagination: Pagination,
}

/// Response for a single artwork lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkPage {
    /// Image service configuration valid for this artwork
    pub config: ImageConfig,
    /// The artwork, absent when the API returned no payload
    pub data: Option<Artwork>,
}
