//! Detail view rendering.

use artic_core::{DetailView, ImageSize};

use super::tables::{format_optional, wrap};

const DESCRIPTION_WIDTH: usize = 78;

/// Message shown for every failed lookup.
pub const NOT_FOUND_MESSAGE: &str = "Art not found";

/// Render a detail view.
pub fn format_detail(view: &DetailView) -> String {
    let DetailView::Found {
        artwork, config, ..
    } = view
    else {
        return NOT_FOUND_MESSAGE.to_string();
    };

    let mut lines = Vec::new();

    if let Some(artist) = artwork.artist_display.as_deref() {
        lines.extend(artist.lines().map(str::to_string));
    }

    match artwork.date_display.as_deref() {
        Some(date) => lines.push(format!("{}, {date}", artwork.title)),
        None => lines.push(artwork.title.clone()),
    }

    if let Some(medium) = artwork.medium_display.as_deref() {
        lines.push(medium.to_string());
    }

    lines.push(String::new());
    lines.push("Department".to_string());
    lines.push(format!(
        "  {}",
        format_optional(artwork.department_title.as_ref(), "-")
    ));

    if let Some(url) = artwork.image_url(config, ImageSize::Detail) {
        lines.push(String::new());
        lines.push(format!("Image: {url}"));
        lines.push(format!("Alt:   {}", artwork.alt_text()));
    }

    if let Some(description) = artwork.plain_description() {
        lines.push(String::new());
        lines.extend(wrap(&description, DESCRIPTION_WIDTH));
    }

    lines.join("\n")
}
