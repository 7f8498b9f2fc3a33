//! Internal API response types for the collection API.
//!
//! These types are internal to `artic-api` and are not exposed to consumers.
//! External consumers should use the port DTOs defined in `artic-core`.
//! Every field the API may send as `null` is optional here.

use artic_core::Pagination;
use serde::Deserialize;
use url::Url;

use crate::config::DEFAULT_BASE_URL;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the collection client.
#[derive(Debug, Clone)]
pub struct ArticConfig {
    /// Base URL of the artworks endpoint
    pub base_url: Url,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ArticConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default collection API URL is valid"),
            user_agent: concat!("artic-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// `config` block present in every response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub iiif_url: String,
    #[serde(default)]
    pub website_url: Option<String>,
}

/// `thumbnail` block of an artwork.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiThumbnail {
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub lqip: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Artwork restricted to the requested field projection.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiArtwork {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<ApiThumbnail>,
    #[serde(default)]
    pub date_display: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub medium_display: Option<String>,
    #[serde(default)]
    pub artist_title: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub department_title: Option<String>,
}

/// Body of `GET /artworks/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSearchResponse {
    pub config: ApiConfig,
    #[serde(default)]
    pub data: Vec<ApiArtwork>,
    pub pagination: Pagination,
}

/// Body of `GET /artworks/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiArtworkResponse {
    pub config: ApiConfig,
    #[serde(default)]
    pub data: Option<ApiArtwork>,
}
