//! Pagination cursor returned by the search endpoint.

use serde::{Deserialize, Serialize};

/// Page cursor for a search.
///
/// `current_page` is 1-indexed. The controller never requests a page past
/// `total_pages` once one of these is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of matching artworks
    pub total: u64,
    /// Page size
    pub limit: u64,
    /// Offset of the first item of this page
    pub offset: u64,
    /// Total number of pages
    pub total_pages: u64,
    /// Page these results belong to
    pub current_page: u64,
}

impl Pagination {
    /// Whether another page can be requested.
    pub const fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The page to request for an incremental fetch, or `None` at the end.
    pub const fn next_page(&self) -> Option<u64> {
        match self.current_page.checked_add(1) {
            Some(next) if next <= self.total_pages => Some(next),
            _ => None,
        }
    }
}
