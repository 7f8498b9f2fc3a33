//! Interactive browse handler.
//!
//! A line-oriented stand-in for the scrolling grid. An empty line plays the
//! role of the scroll sentinel and loads the next page; a number opens the
//! detail view of that grid entry. Both go through the same shared
//! controller, so the detail view sees every page loaded so far.

use anyhow::Result;
use artic_core::{SearchOutcome, SearchState};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use super::spinner;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_detail, format_entries, format_footer, format_grid, separator};

const PROMPT: &str = "artic> ";

/// One line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    /// Empty line: load the next page
    NextPage,
    /// `/query`: start a new search
    Search(String),
    /// A 1-based grid position
    Open(usize),
    Help,
    Quit,
    Unknown(String),
}

impl BrowseInput {
    /// Parse a line typed at the prompt.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return Self::NextPage;
        }
        if let Some(query) = line.strip_prefix('/') {
            return Self::Search(query.trim().to_string());
        }

        match line {
            "q" | "quit" | "exit" => Self::Quit,
            "?" | "h" | "help" => Self::Help,
            _ => match line.parse::<usize>() {
                Ok(position) if position > 0 => Self::Open(position),
                _ => Self::Unknown(line.to_string()),
            },
        }
    }
}

/// Execute the browse command.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the terminal cannot be read.
pub async fn execute(ctx: &CliContext, query: &str) -> Result<()> {
    let mut editor = DefaultEditor::new().map_err(|e| CliError::Io(e.to_string()))?;

    print_help();
    new_search(ctx, query).await;

    loop {
        // Readline blocks; keep the runtime's other workers free
        let line = match tokio::task::block_in_place(|| editor.readline(PROMPT)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(CliError::Io(err.to_string()).into()),
        };

        record_history(&line, |entry| editor.add_history_entry(entry));

        match BrowseInput::parse(&line) {
            BrowseInput::NextPage => next_page(ctx).await,
            BrowseInput::Search(query) => new_search(ctx, &query).await,
            BrowseInput::Open(position) => open(ctx, position).await,
            BrowseInput::Help => print_help(),
            BrowseInput::Quit => break,
            BrowseInput::Unknown(input) => {
                println!("Unknown input: {input} (type ? for help)");
            }
        }
    }

    Ok(())
}

/// Add a non-blank line to the readline history. Failures are logged and
/// otherwise ignored. Returns whether the line was recorded.
fn record_history<F>(line: &str, add: F) -> bool
where
    F: FnOnce(&str) -> Result<bool, ReadlineError>,
{
    if line.trim().is_empty() {
        return false;
    }
    match add(line) {
        Ok(added) => added,
        Err(err) => {
            debug!(error = %err, "could not record history entry");
            false
        }
    }
}

async fn new_search(ctx: &CliContext, query: &str) {
    ctx.controller.set_query(query).await;

    let pb = spinner(format!("Searching for \"{query}\"..."));
    let outcome = ctx.controller.run_search(query, false).await;
    pb.finish_and_clear();

    if outcome == SearchOutcome::Busy {
        println!("A search is already loading");
        return;
    }
    println!("{}", format_grid(&ctx.controller.snapshot().await));
}

async fn next_page(ctx: &CliContext) {
    let before = ctx.controller.snapshot().await.results.len();

    let pb = spinner("Loading more...");
    let outcome = ctx.controller.load_next_page().await;
    pb.finish_and_clear();
    debug!(?outcome, "browse next page");

    let state = ctx.controller.snapshot().await;
    println!("{}", render_next_page(&outcome, &state, before));
}

/// Text shown after a sentinel fetch. `before` is the result count prior to
/// the fetch, so only the appended entries are printed.
fn render_next_page(outcome: &SearchOutcome, state: &SearchState, before: usize) -> String {
    match outcome {
        SearchOutcome::Appended { .. } => {
            let mut lines = Vec::new();
            if state.results.len() > before {
                lines.push(format_entries(state, before));
            }
            lines.push(separator(80));
            lines.push(format_footer(state));
            lines.join("\n")
        }
        // Not produced by load_next_page; render the whole grid
        SearchOutcome::Replaced { .. } => format_grid(state),
        SearchOutcome::EndOfResults => "No more results".to_string(),
        SearchOutcome::Busy => "Still loading".to_string(),
        SearchOutcome::Failed { message } => format!("Error: {message}"),
    }
}

async fn open(ctx: &CliContext, position: usize) {
    let state = ctx.controller.snapshot().await;
    let Some(id) = state.results.get(position - 1).map(|art| art.id) else {
        println!("No result #{position}");
        return;
    };

    let view = ctx.details.lookup(id, &state).await;
    println!("{}", separator(80));
    println!("{}", format_detail(&view));
    println!("{}", separator(80));
}

fn print_help() {
    println!("Enter: load more   /<query>: new search   <n>: open result n   q: quit");
}
