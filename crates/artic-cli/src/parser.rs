//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for searching the Art Institute of Chicago
/// collection.
#[derive(Parser)]
#[command(name = "artic")]
#[command(about = "Search and browse the Art Institute of Chicago collection")]
#[command(version)]
pub struct Cli {
    /// Base URL of the artworks API
    #[arg(long = "base-url", env = "ARTIC_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
