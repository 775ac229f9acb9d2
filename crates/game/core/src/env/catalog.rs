//! Read-only catalog access trait.

use std::sync::Arc;

use crate::model::{Champion, TraitDef};

/// Immutable champion/trait catalog supplied once at startup.
///
/// The catalog is read-only and safely shareable across any number of teams
/// and searches without locking. Lookups are by display name: catalog names
/// are unique, and dual-identity variants of one unit carry distinct names.
pub trait CatalogOracle: Send + Sync {
    /// Set version tag this catalog was built for (e.g. "S10").
    fn version(&self) -> &str;

    /// Looks up a champion by display name.
    fn champion(&self, name: &str) -> Option<&Champion>;

    /// Looks up a trait by name.
    fn trait_def(&self, name: &str) -> Option<&Arc<TraitDef>>;

    /// All champions in catalog order.
    fn champions(&self) -> &[Champion];
}
