//! Port trait implementation for `ArticClient`.
//!
//! This module implements the core-owned `ArticClientPort` trait for
//! `ArticClient`, handling the conversion between wire types and core DTOs.

use artic_core::{
    ArticClientPort, ArticPortError, ArticPortResult, ArtworkId, ArtworkPage, SearchPage,
};
use async_trait::async_trait;
use tracing::debug;

use crate::client::ArticClient;
use crate::error::ArticError;
use crate::http::HttpBackend;
use crate::parsing::{parse_artwork_response, parse_search_response};

// ============================================================================
// Error Mapping
// ============================================================================

/// Which endpoint an error came from.
#[derive(Debug, Clone, Copy)]
enum Endpoint {
    Search,
    Artwork(ArtworkId),
}

/// Convert internal `ArticError` to core `ArticPortError`.
fn map_error(err: ArticError, endpoint: Endpoint) -> ArticPortError {
    match err {
        ArticError::ApiRequestFailed { status, .. } => match endpoint {
            Endpoint::Search => ArticPortError::SearchFailed { status },
            Endpoint::Artwork(id) if status == 404 => ArticPortError::NotFound { id },
            Endpoint::Artwork(_) => ArticPortError::ArtworkFailed { status },
        },
        ArticError::Network(e) if e.is_decode() => ArticPortError::InvalidResponse {
            message: e.to_string(),
        },
        ArticError::Network(e) => ArticPortError::Network {
            message: e.to_string(),
        },
        ArticError::JsonParse(e) => ArticPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ArticClientPort for ArticClient<B> {
    async fn search(&self, query: &str, page: u64) -> ArticPortResult<SearchPage> {
        let response = self
            .search_page(query, page)
            .await
            .map_err(|e| map_error(e, Endpoint::Search))?;

        let page = parse_search_response(response);
        debug!(
            count = page.data.len(),
            current_page = page.pagination.current_page,
            total_pages = page.pagination.total_pages,
            "search page received"
        );
        Ok(page)
    }

    async fn get_artwork(&self, id: ArtworkId) -> ArticPortResult<ArtworkPage> {
        let response = self
            .artwork(id)
            .await
            .map_err(|e| map_error(e, Endpoint::Artwork(id)))?;

        Ok(parse_artwork_response(response))
    }
}
