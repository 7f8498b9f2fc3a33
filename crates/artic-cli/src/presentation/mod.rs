//! Shared CLI presentation utilities.
//!
//! Pure formatting of controller state into terminal text. Functions here
//! return strings; handlers decide where to print them.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no fetching, no state mutation
//! - Derived values (image URLs, alt text) come from `artic-core`

pub mod detail;
pub mod grid;
pub mod tables;

// Re-export commonly used items
pub use detail::{NOT_FOUND_MESSAGE, format_detail};
pub use grid::{format_entries, format_entry, format_footer, format_grid};
pub use tables::{format_optional, separator, truncate_string, wrap};
