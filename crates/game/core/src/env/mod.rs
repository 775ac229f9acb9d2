//! Traits describing read-only collaborator data.
//!
//! The core never owns a concrete catalog or entropy source; it reaches both
//! through oracle traits so hosts, tests, and offline tools can swap
//! implementations without touching the engine.

mod catalog;
mod rng;

pub use catalog::CatalogOracle;
pub use rng::{PcgRng, RngOracle, compute_seed};
