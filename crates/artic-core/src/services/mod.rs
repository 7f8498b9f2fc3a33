//! Core services.
//!
//! Services orchestrate the ports and own the shared search state that the
//! presentation adapters read.

mod detail_lookup;
mod search_controller;

pub use detail_lookup::{DetailLookup, DetailSource, DetailView};
pub use search_controller::{
    FALLBACK_ERROR_MESSAGE, SearchController, SearchOutcome, SearchState,
};
