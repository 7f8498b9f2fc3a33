#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Artwork, ArtworkId, ImageConfig, ImageSize, Pagination, Thumbnail};
pub use ports::{ArticClientPort, ArticPortError, ArticPortResult, ArtworkPage, SearchPage};
pub use services::{
    DetailLookup, DetailSource, DetailView, FALLBACK_ERROR_MESSAGE, SearchController,
    SearchOutcome, SearchState,
};
