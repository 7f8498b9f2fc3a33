//! Subcommands of the `artic` binary.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the collection and list matching artworks
    Search {
        /// Free-text query; may be empty
        #[arg(default_value = "")]
        query: String,
        /// Number of result pages (50 artworks each) to load
        #[arg(short, long, default_value = "1")]
        pages: u32,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the detail view of one artwork
    Show {
        /// Artwork id
        id: String,
        /// Print the artwork as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse results interactively, loading pages on demand
    Browse {
        /// Initial query; may be empty
        #[arg(default_value = "")]
        query: String,
    },
}
