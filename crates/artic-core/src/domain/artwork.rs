//! Artwork records and image URL derivation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Identifier of an artwork. Unique within the collection API and stable
/// across requests.
pub type ArtworkId = u64;

/// Image service configuration returned alongside every API response.
///
/// No image URL can be built until one of these has been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Base endpoint of the IIIF image service
    pub iiif_url: String,
    /// Public website of the collection
    #[serde(default)]
    pub website_url: Option<String>,
}

impl ImageConfig {
    /// Create a config with only the image service URL set.
    pub fn new(iiif_url: impl Into<String>) -> Self {
        Self {
            iiif_url: iiif_url.into(),
            website_url: None,
        }
    }
}

/// Rendered width of an artwork image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// Grid tile (400px wide)
    Grid,
    /// Detail view (843px wide)
    Detail,
}

impl ImageSize {
    /// Width in pixels requested from the image service.
    pub const fn width(self) -> u32 {
        match self {
            Self::Grid => 400,
            Self::Detail => 843,
        }
    }
}

/// Thumbnail descriptor attached to an artwork.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Accessible description of the image
    pub alt_text: Option<String>,
    /// Low quality image placeholder (data URI)
    pub lqip: Option<String>,
    /// Original width in pixels
    pub width: Option<u32>,
    /// Original height in pixels
    pub height: Option<u32>,
}

/// An artwork as returned by the collection API.
///
/// The same record backs both the grid tiles and the detail view: the API
/// returns the same field projection for search results and single lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    /// Short artist name, e.g. "Claude Monet"
    pub artist_title: Option<String>,
    /// Full artist line including nationality and dates
    pub artist_display: Option<String>,
    pub date_display: Option<String>,
    pub medium_display: Option<String>,
    pub department_title: Option<String>,
    /// HTML fragment
    pub description: Option<String>,
    /// Identifier in the image service
    pub image_id: Option<String>,
    pub thumbnail: Option<Thumbnail>,
}

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex is valid"));

impl Artwork {
    /// Create an artwork with only an id and a title.
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist_title: None,
            artist_display: None,
            date_display: None,
            medium_display: None,
            department_title: None,
            description: None,
            image_id: None,
            thumbnail: None,
        }
    }

    /// Build the IIIF image URL for this artwork at the given size.
    ///
    /// Returns `None` when the artwork has no image.
    pub fn image_url(&self, config: &ImageConfig, size: ImageSize) -> Option<String> {
        let image_id = self.image_id.as_deref().filter(|id| !id.is_empty())?;
        Some(format!(
            "{}/{image_id}/full/{},/0/default.jpg",
            config.iiif_url.trim_end_matches('/'),
            size.width()
        ))
    }

    /// Alt text for the image: the thumbnail's own description when present,
    /// otherwise "{title} by {artist}".
    pub fn alt_text(&self) -> String {
        self.thumbnail
            .as_ref()
            .and_then(|t| t.alt_text.as_deref())
            .filter(|alt| !alt.trim().is_empty())
            .map_or_else(
                || {
                    format!(
                        "{} by {}",
                        self.title,
                        self.artist_title.as_deref().unwrap_or("Unknown artist")
                    )
                },
                ToString::to_string,
            )
    }

    /// The description with HTML markup removed and whitespace collapsed.
    pub fn plain_description(&self) -> Option<String> {
        let html = self.description.as_deref()?;
        let text = HTML_TAG.replace_all(html, " ");
        let text = text
            .replace("&amp;", "&")
            .replace("&nbsp;", " ")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">");
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            None
        } else {
            Some(collapsed)
        }
    }
}
