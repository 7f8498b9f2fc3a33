//! URL construction helpers for the collection API.
//!
//! This module provides pure functions for building API URLs,
//! ensuring consistent URL construction across all API calls.

use artic_core::ArtworkId;
use url::Url;

use crate::models::ArticConfig;

/// Field projection requested for every artwork.
pub const FIELDS: &[&str] = &[
    "id",
    "title",
    "thumbnail",
    "date_display",
    "artist_display",
    "description",
    "medium_display",
    "artist_title",
    "image_id",
    "department_title",
];

/// Results per search page.
pub const PAGE_SIZE: u32 = 50;

/// Build the comma-separated `fields` parameter.
fn build_fields_param() -> String {
    FIELDS.join(",")
}

/// Append `segment` to the base path.
fn join_path(config: &ArticConfig, segment: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{segment}"));
    url
}

/// Build a search URL for one page.
pub fn build_search_url(config: &ArticConfig, query: &str, page: u64) -> Url {
    let mut url = join_path(config, "search");

    let query_string = format!(
        "q={}&fields={}&limit={PAGE_SIZE}&page={page}",
        urlencoding::encode(query),
        build_fields_param(),
    );
    url.set_query(Some(&query_string));

    url
}

/// Build a URL for a single artwork.
pub fn build_artwork_url(config: &ArticConfig, id: ArtworkId) -> Url {
    let mut url = join_path(config, &id.to_string());
    url.set_query(Some(&format!("fields={}", build_fields_param())));
    url
}
