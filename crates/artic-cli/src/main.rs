//! CLI entry point.
//!
//! Loads the environment, configures logging, wires the context via
//! bootstrap and dispatches to the command handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use artic_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Filter used with `--verbose` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str = "warn,artic_core=debug,artic_api=debug,artic_cli=debug";

/// Log to stderr so stdout stays clean for grid and JSON output.
///
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::with_defaults().with_base_url(cli.base_url);
    tracing::debug!(base_url = %config.base_url, "bootstrapping");
    let ctx = bootstrap(&config);

    match cli.command {
        Some(Commands::Search { query, pages, json }) => {
            handlers::search::execute(&ctx, &query, pages, json).await
        }
        Some(Commands::Show { id, json }) => handlers::show::execute(&ctx, &id, json).await,
        Some(Commands::Browse { query }) => handlers::browse::execute(&ctx, &query).await,
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
