//! Catalog construction and data-file loaders.
//!
//! This crate is the data-acquisition collaborator's in-process half: it
//! turns a set's cached catalog data into the immutable [`Catalog`] the core
//! consumes through its oracle trait. Content never appears in team state —
//! teams hold `Arc` references into the catalog.

mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::Catalog;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, RawActivation, RawCatalog, RawChampion, RawTrait, RawTraitRef};
