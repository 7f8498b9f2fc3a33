//! Command handlers that delegate to the core services.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call the controller or detail lookup
//!   3. Format output for the terminal
//!
//! Handlers should NOT talk to the HTTP client directly or hold their own
//! copy of the result list.

pub mod browse;
pub mod search;
pub mod show;

use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::CliError;

/// Print command output to stdout.
///
/// Unlike `println!` a closed pipe (`artic search monet | head`) surfaces as
/// [`CliError::Io`] instead of a panic.
fn emit(text: &str) -> Result<(), CliError> {
    write_output(&mut std::io::stdout().lock(), text)
}

fn write_output(out: &mut impl Write, text: &str) -> Result<(), CliError> {
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

/// Spinner shown on stderr while a fetch is in flight.
fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.into());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
