//! Domain types for the artwork collection.

mod artwork;
mod pagination;

pub use artwork::{Artwork, ArtworkId, ImageConfig, ImageSize, Thumbnail};
pub use pagination::Pagination;
