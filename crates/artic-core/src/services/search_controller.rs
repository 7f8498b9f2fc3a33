//! Search/pagination controller shared by the grid and detail views.
//!
//! The controller owns the query text, the accumulated result list, the
//! image config, the pagination cursor, the loading flag and the last
//! error. Every mutation goes through [`SearchController::run_search`].

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::{Artwork, ArtworkId, ImageConfig, Pagination};
use crate::ports::{ArticClientPort, ArticPortError, SearchPage};

/// Message shown when a failure carries no usable description.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong while fetching art.";

// ============================================================================
// State
// ============================================================================

/// Point-in-time view of the controller state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Draft query text shared between views
    pub query: String,
    /// Query of the last successful first-page search
    pub active_query: String,
    /// Accumulated results, unique by id, in arrival order
    pub results: Vec<Artwork>,
    pub config: Option<ImageConfig>,
    pub pagination: Option<Pagination>,
    pub is_loading: bool,
    /// Message of the last failed fetch, cleared when a new one starts
    pub error: Option<String>,
}

impl SearchState {
    /// Whether the sentinel should request another page.
    pub fn has_more(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_more())
    }

    /// A search completed and matched nothing.
    pub fn is_empty_result(&self) -> bool {
        self.pagination.is_some_and(|p| p.total == 0)
    }

    /// Find an accumulated artwork by id.
    pub fn find(&self, id: ArtworkId) -> Option<&Artwork> {
        self.results.iter().find(|art| art.id == id)
    }
}

/// What a call to [`SearchController::run_search`] did.
///
/// Purely informational: the state transitions are the same whether or not
/// the caller looks at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// First page fetched; results replaced
    Replaced {
        /// Number of results now held
        count: usize,
    },
    /// Next page fetched; new ids appended
    Appended {
        /// Number of artworks that were not already present
        added: usize,
    },
    /// The cursor is on the last page; nothing was fetched
    EndOfResults,
    /// Another fetch is in flight; nothing was done
    Busy,
    /// The fetch failed; `error` now holds `message`
    Failed {
        /// User-facing failure message
        message: String,
    },
}

// ============================================================================
// Concurrency Control
// ============================================================================

/// Scope guard for the single-flight loading flag.
///
/// Acquisition is a compare-and-swap so two callers can never both observe
/// "not loading". The flag is cleared on drop, including on error paths.
struct LoadingGuard<'a> {
    loading: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    fn try_acquire(loading: &'a AtomicBool) -> Option<Self> {
        loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { loading })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.loading.store(false, Ordering::Release);
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Search and infinite-scroll pagination over the collection API.
///
/// Share one instance as `Arc<SearchController>` between every consumer.
pub struct SearchController {
    client: Arc<dyn ArticClientPort>,
    state: RwLock<SearchState>,
    loading: AtomicBool,
}

impl SearchController {
    /// Create a controller with empty state.
    pub fn new(client: Arc<dyn ArticClientPort>) -> Self {
        Self {
            client,
            state: RwLock::new(SearchState::default()),
            loading: AtomicBool::new(false),
        }
    }

    /// Whether a search fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Clone the current state.
    pub async fn snapshot(&self) -> SearchState {
        let mut state = self.state.read().await.clone();
        state.is_loading = self.is_loading();
        state
    }

    /// Current draft query.
    pub async fn query(&self) -> String {
        self.state.read().await.query.clone()
    }

    /// Replace the draft query. Does not fetch.
    pub async fn set_query(&self, query: impl Into<String>) {
        self.state.write().await.query = query.into();
    }

    /// Run a search.
    ///
    /// With `is_next_page == false` page 1 of `query` is fetched and replaces
    /// all results. Otherwise the page after the current cursor is fetched
    /// and only unseen ids are appended; past the last page nothing happens.
    /// A call made while another fetch is in flight does nothing.
    pub async fn run_search(&self, query: &str, is_next_page: bool) -> SearchOutcome {
        let Some(_guard) = LoadingGuard::try_acquire(&self.loading) else {
            debug!(query, is_next_page, "search already in flight, ignoring");
            return SearchOutcome::Busy;
        };

        let page = {
            let mut state = self.state.write().await;
            state.error = None;

            if is_next_page {
                match state.pagination {
                    Some(pagination) => match pagination.next_page() {
                        Some(next) => next,
                        None => {
                            debug!(
                                current_page = pagination.current_page,
                                total_pages = pagination.total_pages,
                                "end of results"
                            );
                            return SearchOutcome::EndOfResults;
                        }
                    },
                    None => 1,
                }
            } else {
                1
            }
        };

        debug!(query, page, "fetching search results");
        let result = self.client.search(query, page).await;

        let mut state = self.state.write().await;
        match result {
            Ok(response) if is_next_page => {
                let added = append_unique(&mut state, response);
                debug!(added, total = state.results.len(), "appended search page");
                SearchOutcome::Appended { added }
            }
            Ok(response) => {
                state.results = response.data;
                state.config = Some(response.config);
                state.pagination = Some(response.pagination);
                state.active_query = query.to_string();
                debug!(count = state.results.len(), "replaced search results");
                SearchOutcome::Replaced {
                    count: state.results.len(),
                }
            }
            Err(err) => {
                let message = failure_message(&err);
                warn!(query, page, error = %err, "search failed");
                state.error = Some(message.clone());
                SearchOutcome::Failed { message }
            }
        }
    }

    /// Fetch the next page of the last submitted search.
    ///
    /// This is what the infinite-scroll sentinel triggers.
    pub async fn load_next_page(&self) -> SearchOutcome {
        let query = self.state.read().await.active_query.clone();
        self.run_search(&query, true).await
    }
}

/// Append artworks whose id is not yet present, then adopt the new cursor.
fn append_unique(state: &mut SearchState, response: SearchPage) -> usize {
    let mut seen: HashSet<ArtworkId> = state.results.iter().map(|art| art.id).collect();
    let before = state.results.len();

    state.results.extend(
        response
            .data
            .into_iter()
            .filter(|art| seen.insert(art.id)),
    );

    state.config = Some(response.config);
    state.pagination = Some(response.pagination);
    state.results.len() - before
}

/// User-facing message for a failed fetch.
fn failure_message(err: &ArticPortError) -> String {
    let detail_missing = match err {
        ArticPortError::Network { message }
        | ArticPortError::InvalidResponse { message } => message.trim().is_empty(),
        _ => false,
    };

    if detail_missing {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ArtworkPage, ArticPortResult, MockArticClientPort};
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    fn config() -> ImageConfig {
        ImageConfig::new("https://www.artic.edu/iiif/2")
    }

    fn page_of(ids: &[ArtworkId], current_page: u64, total_pages: u64) -> SearchPage {
        SearchPage {
            config: config(),
            data: ids
                .iter()
                .map(|id| Artwork::new(*id, format!("Artwork {id}")))
                .collect(),
            pagination: Pagination {
                total: total_pages * 2,
                limit: 50,
                offset: (current_page - 1) * 50,
                total_pages,
                current_page,
            },
        }
    }

    fn ids(state: &SearchState) -> Vec<ArtworkId> {
        state.results.iter().map(|art| art.id).collect()
    }

    #[tokio::test]
    async fn test_first_page_replaces_results() {
        let mut client = MockArticClientPort::new();
        client
            .expect_search()
            .withf(|query, page| query == "monet" && *page == 1)
            .times(1)
            .returning(|_, _| Ok(page_of(&[1, 2], 1, 3)));
        client
            .expect_search()
            .withf(|query, page| query == "degas" && *page == 1)
            .times(1)
            .returning(|_, _| Ok(page_of(&[7], 1, 1)));

        let controller = SearchController::new(Arc::new(client));

        let outcome = controller.run_search("monet", false).await;
        assert_eq!(outcome, SearchOutcome::Replaced { count: 2 });
        assert_eq!(ids(&controller.snapshot().await), vec![1, 2]);

        let outcome = controller.run_search("degas", false).await;
        assert_eq!(outcome, SearchOutcome::Replaced { count: 1 });

        let state = controller.snapshot().await;
        assert_eq!(ids(&state), vec![7]);
        assert_eq!(state.pagination.unwrap().total_pages, 1);
        assert_eq!(state.active_query, "degas");
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_next_page_appends_deduplicated() {
        let mut client = MockArticClientPort::new();
        client
            .expect_search()
            .withf(|_, page| *page == 1)
            .times(1)
            .returning(|_, _| Ok(page_of(&[1, 2], 1, 2)));
        client
            .expect_search()
            .withf(|_, page| *page == 2)
            .times(1)
            .returning(|_, _| Ok(page_of(&[2, 3], 2, 2)));

        let controller = SearchController::new(Arc::new(client));
        controller.run_search("monet", false).await;

        let outcome = controller.run_search("monet", true).await;
        assert_eq!(outcome, SearchOutcome::Appended { added: 1 });

        let state = controller.snapshot().await;
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.pagination.unwrap().current_page, 2);
    }

    #[tokio::test]
    async fn test_next_page_without_pagination_fetches_page_one() {
        let mut client = MockArticClientPort::new();
        client
            .expect_search()
            .withf(|query, page| query.is_empty() && *page == 1)
            .times(1)
            .returning(|_, _| Ok(page_of(&[5, 5, 6], 1, 4)));

        let controller = SearchController::new(Arc::new(client));
        let outcome = controller.run_search("", true).await;

        // Duplicates inside a single appended page are dropped too
        assert_eq!(outcome, SearchOutcome::Appended { added: 2 });
        assert_eq!(ids(&controller.snapshot().await), vec![5, 6]);
    }

    #[tokio::test]
    async fn test_last_page_stops_without_fetch() {
        let mut client = MockArticClientPort::new();
        client
            .expect_search()
            .times(1)
            .returning(|_, _| Ok(page_of(&[1, 2], 1, 1)));

        let controller = SearchController::new(Arc::new(client));
        controller.run_search("monet", false).await;
        let before = controller.snapshot().await;

        // The mock panics on a second search call
        let outcome = controller.run_search("monet", true).await;
        assert_eq!(outcome, SearchOutcome::EndOfResults);

        let after = controller.snapshot().await;
        assert_eq!(before, after);
        assert!(!after.is_loading);
    }

    #[tokio::test]
    async fn test_failure_keeps_results_and_sets_error() {
        let mut client = MockArticClientPort::new();
        client
            .expect_search()
            .withf(|_, page| *page == 1)
            .times(1)
            .returning(|_, _| Ok(page_of(&[1, 2], 1, 3)));
        client
            .expect_search()
            .withf(|_, page| *page == 2)
            .times(1)
            .returning(|_, _| Err(ArticPortError::SearchFailed { status: 500 }));

        let controller = SearchController::new(Arc::new(client));
        controller.run_search("monet", false).await;

        let outcome = controller.run_search("monet", true).await;
        assert_eq!(
            outcome,
            SearchOutcome::Failed {
                message: "Search failed".to_string()
            }
        );

        let state = controller.snapshot().await;
        assert_eq!(ids(&state), vec![1, 2]);
        assert_eq!(state.error.as_deref(), Some("Search failed"));
        assert_eq!(state.pagination.unwrap().current_page, 1);
        assert!(!state.is_loading);
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_new_search_clears_previous_error() {
        let mut client = MockArticClientPort::new();
        let mut seq = mockall::Sequence::new();
        client
            .expect_search()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Err(ArticPortError::Network {
                    message: String::new(),
                })
            });
        client
            .expect_search()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(page_of(&[3], 1, 1)));

        let controller = SearchController::new(Arc::new(client));

        controller.run_search("monet", false).await;
        let state = controller.snapshot().await;
        assert_eq!(state.error.as_deref(), Some(FALLBACK_ERROR_MESSAGE));
        assert!(state.results.is_empty());

        controller.run_search("monet", false).await;
        let state = controller.snapshot().await;
        assert!(state.error.is_none());
        assert_eq!(ids(&state), vec![3]);
    }

    #[tokio::test]
    async fn test_load_next_page_uses_active_query() {
        let mut client = MockArticClientPort::new();
        client
            .expect_search()
            .withf(|query, page| query == "monet" && *page == 1)
            .times(1)
            .returning(|_, _| Ok(page_of(&[1], 1, 2)));
        client
            .expect_search()
            .withf(|query, page| query == "monet" && *page == 2)
            .times(1)
            .returning(|_, _| Ok(page_of(&[2], 2, 2)));

        let controller = SearchController::new(Arc::new(client));
        controller.run_search("monet", false).await;

        // Typing a new draft does not change what the sentinel loads
        controller.set_query("mon").await;
        let outcome = controller.load_next_page().await;
        assert_eq!(outcome, SearchOutcome::Appended { added: 1 });
        assert_eq!(controller.query().await, "mon");
    }

    #[test]
    fn test_state_helpers() {
        let mut state = SearchState::default();
        assert!(!state.has_more());
        assert!(!state.is_empty_result());

        state.pagination = Some(Pagination {
            total: 0,
            limit: 50,
            offset: 0,
            total_pages: 0,
            current_page: 1,
        });
        assert!(state.is_empty_result());
        assert!(!state.has_more());

        state.results.push(Artwork::new(9, "Nine"));
        assert_eq!(state.find(9).map(|art| art.title.as_str()), Some("Nine"));
        assert!(state.find(10).is_none());
    }

    /// Client whose search blocks until released, for observing the gate.
    struct GatedClient {
        release: Arc<Notify>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ArticClientPort for GatedClient {
        async fn search(&self, _query: &str, _page: u64) -> ArticPortResult<SearchPage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(page_of(&[1, 2], 1, 2))
        }

        async fn get_artwork(&self, id: ArtworkId) -> ArticPortResult<ArtworkPage> {
            Err(ArticPortError::NotFound { id })
        }
    }

    #[tokio::test]
    async fn test_call_while_loading_is_noop() {
        let release = Arc::new(Notify::new());
        let client = Arc::new(GatedClient {
            release: release.clone(),
            calls: AtomicUsize::new(0),
        });
        let controller = Arc::new(SearchController::new(client.clone()));

        let in_flight = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.run_search("monet", false).await })
        };

        while !controller.is_loading() {
            tokio::task::yield_now().await;
        }

        let before = controller.snapshot().await;
        assert!(before.is_loading);

        assert_eq!(controller.run_search("degas", false).await, SearchOutcome::Busy);
        assert_eq!(controller.run_search("degas", true).await, SearchOutcome::Busy);
        assert_eq!(controller.snapshot().await, before);

        release.notify_one();
        let outcome = in_flight.await.unwrap();
        assert_eq!(outcome, SearchOutcome::Replaced { count: 2 });
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert!(!controller.is_loading());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_calls_dispatch_one_fetch() {
        let release = Arc::new(Notify::new());
        let client = Arc::new(GatedClient {
            release: release.clone(),
            calls: AtomicUsize::new(0),
        });
        let controller = Arc::new(SearchController::new(client.clone()));
        let finished = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let controller = controller.clone();
                let finished = finished.clone();
                tokio::spawn(async move {
                    let outcome = controller.run_search("monet", false).await;
                    finished.fetch_add(1, Ordering::SeqCst);
                    outcome
                })
            })
            .collect();

        // Every caller but the one holding the gate returns without fetching
        tokio::time::timeout(std::time::Duration::from_secs(5), async {
            while finished.load(Ordering::SeqCst) < 7 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("losing callers should return immediately");
        release.notify_one();

        let mut busy = 0;
        for handle in handles {
            if handle.await.unwrap() == SearchOutcome::Busy {
                busy += 1;
            }
        }

        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert_eq!(busy, 7);
    }
}
