//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the collection client (via artic-api) and the
//! core services that share it (via artic-core).

use std::sync::Arc;

use artic_api::{ArticClientConfig, DEFAULT_BASE_URL, DefaultArticClient};
use artic_core::{ArticClientPort, DetailLookup, SearchController};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the artworks API.
    pub base_url: String,
}

impl CliConfig {
    /// Config pointing at the public collection API.
    pub fn with_defaults() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL when one was given.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        self
    }
}

/// Fully composed application context for CLI commands.
///
/// One controller instance is shared by every view in a session.
pub struct CliContext {
    /// Search and pagination state.
    pub controller: Arc<SearchController>,
    /// Detail view resolver.
    pub details: DetailLookup,
}

/// Bootstrap the CLI application.
pub fn bootstrap(config: &CliConfig) -> CliContext {
    let client_config = ArticClientConfig::new().with_base_url(config.base_url.clone());
    let client: Arc<dyn ArticClientPort> = Arc::new(DefaultArticClient::new(&client_config));
    bootstrap_with(client)
}

/// Bootstrap with a custom client (for testing).
///
/// The controller and the detail lookup share the one client.
pub fn bootstrap_with(client: Arc<dyn ArticClientPort>) -> CliContext {
    CliContext {
        controller: Arc::new(SearchController::new(client.clone())),
        details: DetailLookup::new(client),
    }
}
