//! Detail view lookup.
//!
//! Resolves an artwork for the detail view, reusing the search results
//! already held by the controller before going to the network.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Artwork, ArtworkId, ImageConfig};
use crate::ports::ArticClientPort;
use crate::services::SearchState;

/// Where a resolved artwork came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSource {
    /// Found in the accumulated search results
    Local,
    /// Fetched from the API
    Remote,
}

/// Terminal display state of the detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Found {
        artwork: Artwork,
        config: ImageConfig,
        source: DetailSource,
    },
    /// Lookup failed for any reason. Not retried.
    NotFound,
}

/// Resolves artworks for the detail view.
///
/// The local scan is bounded only by the accumulated search results, which
/// grow for the whole session.
pub struct DetailLookup {
    client: Arc<dyn ArticClientPort>,
}

impl DetailLookup {
    pub fn new(client: Arc<dyn ArticClientPort>) -> Self {
        Self { client }
    }

    /// Resolve a route-style id. Anything that is not an integer is
    /// `NotFound` without a fetch.
    pub async fn lookup_str(&self, raw_id: &str, state: &SearchState) -> DetailView {
        match raw_id.trim().parse::<ArtworkId>() {
            Ok(id) => self.lookup(id, state).await,
            Err(_) => {
                debug!(raw_id, "not an artwork id");
                DetailView::NotFound
            }
        }
    }

    /// Resolve an artwork, scanning `state.results` first.
    ///
    /// A local hit reuses the controller's config; a fetched artwork comes
    /// with the config of its own response.
    pub async fn lookup(&self, id: ArtworkId, state: &SearchState) -> DetailView {
        if let (Some(artwork), Some(config)) = (state.find(id), state.config.as_ref()) {
            debug!(id, "detail served from search results");
            return DetailView::Found {
                artwork: artwork.clone(),
                config: config.clone(),
                source: DetailSource::Local,
            };
        }

        match self.client.get_artwork(id).await {
            Ok(page) => match page.data {
                Some(artwork) => DetailView::Found {
                    artwork,
                    config: page.config,
                    source: DetailSource::Remote,
                },
                None => {
                    debug!(id, "artwork response had no payload");
                    DetailView::NotFound
                }
            },
            Err(err) => {
                debug!(id, error = %err, "artwork lookup failed");
                DetailView::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pagination;
    use crate::ports::{ArticPortError, ArtworkPage, MockArticClientPort};

    fn search_state() -> SearchState {
        SearchState {
            results: vec![Artwork::new(1, "One"), Artwork::new(2, "Two")],
            config: Some(ImageConfig::new("https://local.example/iiif")),
            pagination: Some(Pagination {
                total: 2,
                limit: 50,
                offset: 0,
                total_pages: 1,
                current_page: 1,
            }),
            ..SearchState::default()
        }
    }

    #[tokio::test]
    async fn test_local_hit_skips_network() {
        let mut client = MockArticClientPort::new();
        client.expect_get_artwork().never();

        let lookup = DetailLookup::new(Arc::new(client));
        let view = lookup.lookup(2, &search_state()).await;

        assert_eq!(
            view,
            DetailView::Found {
                artwork: Artwork::new(2, "Two"),
                config: ImageConfig::new("https://local.example/iiif"),
                source: DetailSource::Local,
            }
        );
    }

    #[tokio::test]
    async fn test_local_miss_fetches_with_response_config() {
        let mut client = MockArticClientPort::new();
        client
            .expect_get_artwork()
            .withf(|id| *id == 99)
            .times(1)
            .returning(|id| {
                Ok(ArtworkPage {
                    config: ImageConfig::new("https://remote.example/iiif"),
                    data: Some(Artwork::new(id, "Remote")),
                })
            });

        let lookup = DetailLookup::new(Arc::new(client));
        let view = lookup.lookup(99, &search_state()).await;

        match view {
            DetailView::Found {
                artwork,
                config,
                source,
            } => {
                assert_eq!(artwork.title, "Remote");
                assert_eq!(config.iiif_url, "https://remote.example/iiif");
                assert_eq!(source, DetailSource::Remote);
            }
            DetailView::NotFound => panic!("expected a fetched artwork"),
        }
    }

    #[tokio::test]
    async fn test_local_hit_without_config_fetches() {
        let mut client = MockArticClientPort::new();
        client.expect_get_artwork().times(1).returning(|id| {
            Ok(ArtworkPage {
                config: ImageConfig::new("https://remote.example/iiif"),
                data: Some(Artwork::new(id, "Remote")),
            })
        });

        let mut state = search_state();
        state.config = None;

        let lookup = DetailLookup::new(Arc::new(client));
        let view = lookup.lookup(1, &state).await;
        assert!(matches!(
            view,
            DetailView::Found {
                source: DetailSource::Remote,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_payload_is_not_found() {
        let mut client = MockArticClientPort::new();
        client.expect_get_artwork().times(1).returning(|_| {
            Ok(ArtworkPage {
                config: ImageConfig::new("https://remote.example/iiif"),
                data: None,
            })
        });

        let lookup = DetailLookup::new(Arc::new(client));
        assert_eq!(
            lookup.lookup(5, &SearchState::default()).await,
            DetailView::NotFound
        );
    }

    #[tokio::test]
    async fn test_fetch_error_is_not_found() {
        let mut client = MockArticClientPort::new();
        client
            .expect_get_artwork()
            .times(1)
            .returning(|_| Err(ArticPortError::ArtworkFailed { status: 500 }));

        let lookup = DetailLookup::new(Arc::new(client));
        assert_eq!(
            lookup.lookup(5, &SearchState::default()).await,
            DetailView::NotFound
        );
    }

    #[tokio::test]
    async fn test_lookup_str_rejects_non_numeric() {
        let mut client = MockArticClientPort::new();
        client.expect_get_artwork().never();

        let lookup = DetailLookup::new(Arc::new(client));
        assert_eq!(
            lookup.lookup_str("abc", &search_state()).await,
            DetailView::NotFound
        );
        assert!(matches!(
            lookup.lookup_str(" 1 ", &search_state()).await,
            DetailView::Found {
                source: DetailSource::Local,
                ..
            }
        ));
    }
}
