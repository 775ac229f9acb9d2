//! Content loaders for reading catalog data from files.
//!
//! The data-acquisition path cached here is the offline one: a set's
//! `data.json` produced by an earlier fetch. Network retrieval and image
//! downloads live outside this workspace.

pub mod data;

pub use data::{CatalogLoader, RawActivation, RawCatalog, RawChampion, RawTrait, RawTraitRef};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
