//! Conversion of wire responses into core DTOs.
//!
//! Blank strings are treated like `null`, and a missing title becomes
//! "Untitled" so every artwork can be labelled.

use artic_core::{Artwork, ArtworkPage, ImageConfig, SearchPage, Thumbnail};

use crate::models::{
    ApiArtwork, ApiArtworkResponse, ApiConfig, ApiSearchResponse, ApiThumbnail,
};

const UNTITLED: &str = "Untitled";

/// `None` for absent or whitespace-only strings.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn to_image_config(config: ApiConfig) -> ImageConfig {
    ImageConfig {
        iiif_url: config.iiif_url,
        website_url: non_blank(config.website_url),
    }
}

fn to_thumbnail(thumbnail: ApiThumbnail) -> Thumbnail {
    Thumbnail {
        alt_text: non_blank(thumbnail.alt_text),
        lqip: non_blank(thumbnail.lqip),
        width: thumbnail.width,
        height: thumbnail.height,
    }
}

/// Convert a wire artwork into the core record.
pub fn parse_artwork(art: ApiArtwork) -> Artwork {
    Artwork {
        id: art.id,
        title: non_blank(art.title).unwrap_or_else(|| UNTITLED.to_string()),
        artist_title: non_blank(art.artist_title),
        artist_display: non_blank(art.artist_display),
        date_display: non_blank(art.date_display),
        medium_display: non_blank(art.medium_display),
        department_title: non_blank(art.department_title),
        description: non_blank(art.description),
        image_id: non_blank(art.image_id),
        thumbnail: art.thumbnail.map(to_thumbnail),
    }
}

/// Convert a search response, keeping API order.
pub fn parse_search_response(response: ApiSearchResponse) -> SearchPage {
    SearchPage {
        config: to_image_config(response.config),
        data: response.data.into_iter().map(parse_artwork).collect(),
        pagination: response.pagination,
    }
}

/// Convert a single-artwork response.
pub fn parse_artwork_response(response: ApiArtworkResponse) -> ArtworkPage {
    ArtworkPage {
        config: to_image_config(response.config),
        data: response.data.map(parse_artwork),
    }
}
