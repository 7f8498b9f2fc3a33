//! Search command handler.
//!
//! Runs a first-page search and then follows the pagination cursor for as
//! many pages as were requested, the way scrolling the grid would.

use anyhow::Result;
use artic_core::{SearchOutcome, SearchState};
use tracing::debug;

use super::{emit, spinner};
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_grid;

/// Execute the search command.
///
/// # Arguments
///
/// * `ctx` - The CLI context
/// * `query` - Free-text query, may be empty
/// * `pages` - Number of pages to load, at least one
/// * `json` - Print the accumulated results as JSON instead of a grid
///
/// # Errors
///
/// Returns [`CliError::Arguments`] when `pages` is zero, and
/// [`CliError::Io`] when stdout is closed.
/// Returns [`CliError::Core`] carrying the controller's error message when
/// any page fails to load. Pages loaded before the failure are still
/// printed.
pub async fn execute(ctx: &CliContext, query: &str, pages: u32, json: bool) -> Result<()> {
    if pages == 0 {
        return Err(CliError::Arguments("--pages must be at least 1".to_string()).into());
    }

    ctx.controller.set_query(query).await;

    let pb = spinner(format!("Searching for \"{query}\"..."));
    let state = load_pages(ctx, query, pages).await;
    pb.finish_and_clear();

    let error = state.error.clone();

    if json {
        let payload = serde_json::json!({
            "query": state.active_query,
            "pagination": state.pagination,
            "results": state.results,
        });
        emit(&serde_json::to_string_pretty(&payload)?)?;
    } else if error.is_none() || !state.results.is_empty() {
        // The error goes to stderr through the returned value
        let shown = SearchState {
            error: None,
            ..state
        };
        emit(&format_grid(&shown))?;
    }

    match error {
        Some(message) => Err(CliError::Core(message).into()),
        None => Ok(()),
    }
}

/// Load page 1 and then up to `pages - 1` further pages.
async fn load_pages(ctx: &CliContext, query: &str, pages: u32) -> SearchState {
    let mut outcome = ctx.controller.run_search(query, false).await;
    let mut loaded = 1;

    while loaded < pages
        && matches!(
            outcome,
            SearchOutcome::Replaced { .. } | SearchOutcome::Appended { .. }
        )
    {
        outcome = ctx.controller.load_next_page().await;
        debug!(?outcome, page = loaded + 1, "loaded next page");
        loaded += 1;
    }

    ctx.controller.snapshot().await
}
