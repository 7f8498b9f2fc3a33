//! Result grid rendering.
//!
//! The terminal stand-in for the image grid: one numbered entry per
//! artwork with its thumbnail URL, followed by the pagination footer.

use std::fmt::Write as _;

use artic_core::{Artwork, ImageConfig, ImageSize, SearchState};

use super::tables::{separator, truncate_string};

const TITLE_WIDTH: usize = 60;

/// Render one grid entry. `position` is 1-based.
pub fn format_entry(position: usize, artwork: &Artwork, config: Option<&ImageConfig>) -> String {
    let mut out = format!(
        "{position:>4}. {} [{}]",
        truncate_string(&artwork.title, TITLE_WIDTH),
        artwork.id
    );

    if let Some(artist) = artwork.artist_title.as_deref() {
        let _ = write!(out, "\n      {artist}");
    }

    // Without a config no image can be rendered
    if let Some(url) = config.and_then(|c| artwork.image_url(c, ImageSize::Grid)) {
        let _ = write!(out, "\n      {url}");
    }

    out
}

/// Render results starting at index `from` (0-based), e.g. only the page
/// that was just appended.
pub fn format_entries(state: &SearchState, from: usize) -> String {
    state
        .results
        .iter()
        .enumerate()
        .skip(from)
        .map(|(i, art)| format_entry(i + 1, art, state.config.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pagination footer, e.g. "Page 1 of 25 · 50 of 1203 artworks loaded".
pub fn format_footer(state: &SearchState) -> String {
    let Some(pagination) = state.pagination else {
        return String::new();
    };

    let mut footer = format!(
        "Page {} of {} · {} of {} artworks loaded",
        pagination.current_page,
        pagination.total_pages,
        state.results.len(),
        pagination.total
    );
    if !state.has_more() {
        footer.push_str(" · end of results");
    }
    footer
}

/// Render the whole grid view for a state.
pub fn format_grid(state: &SearchState) -> String {
    if state.is_empty_result() {
        return "No results found".to_string();
    }

    let mut sections = Vec::new();

    if let Some(error) = state.error.as_deref() {
        sections.push(format!("Error: {error}"));
    }

    if !state.results.is_empty() {
        sections.push(format_entries(state, 0));
    }

    let footer = format_footer(state);
    if !footer.is_empty() {
        sections.push(separator(80));
        sections.push(footer);
    }

    sections.join("\n")
}
