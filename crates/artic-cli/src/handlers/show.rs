//! Show command handler.

use anyhow::Result;
use artic_core::DetailView;

use super::{emit, spinner};
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_detail;

/// Execute the show command.
///
/// Resolves `id` against the accumulated results first, then the API.
///
/// # Errors
///
/// Returns [`CliError::NotFound`] for a non-numeric id, an unknown id, or
/// any fetch failure, and [`CliError::Io`] when stdout is closed.
pub async fn execute(ctx: &CliContext, id: &str, json: bool) -> Result<()> {
    let state = ctx.controller.snapshot().await;

    let pb = spinner(format!("Loading artwork {id}..."));
    let view = ctx.details.lookup_str(id, &state).await;
    pb.finish_and_clear();

    match &view {
        DetailView::NotFound => return Err(CliError::NotFound(id.to_string()).into()),
        DetailView::Found { artwork, .. } if json => {
            emit(&serde_json::to_string_pretty(artwork)?)?;
        }
        DetailView::Found { .. } => emit(&format_detail(&view))?,
    }

    Ok(())
}
