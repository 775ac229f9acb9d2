//! Catalog value types: champions, traits, and keyed collections.
//!
//! Everything here is immutable once constructed. Identity is always a
//! value-equality key — `(name, tier)` for champions, `(name, description)`
//! for traits — so collections and maps never depend on allocation identity.

mod champion;
mod error;
mod roster;
mod trait_def;

pub use champion::{Champion, ChampionKey};
pub use error::CatalogError;
pub use roster::Roster;
pub use trait_def::{Activation, ActivationTier, TraitDef, TraitHandle, TraitKey};
