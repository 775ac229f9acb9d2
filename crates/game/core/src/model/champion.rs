//! Champion value type and identity key.

use std::sync::Arc;

use super::trait_def::TraitDef;

/// A selectable unit with a cost tier and one or more traits.
///
/// Champions are immutable catalog values. Identity is the `(name, tier)`
/// pair: two skins of an identically named unit at different costs coexist
/// as distinct entities, which version-specific rules rely on.
#[derive(Clone, Debug)]
pub struct Champion {
    pub name: String,
    /// Shop cost, 1-5.
    pub tier: u8,
    /// Board slots this unit occupies. Almost always 1.
    pub unit: u8,
    pub image: String,
    pub traits: Vec<Arc<TraitDef>>,
}

impl Champion {
    pub fn new(
        name: impl Into<String>,
        tier: u8,
        unit: u8,
        image: impl Into<String>,
        traits: Vec<Arc<TraitDef>>,
    ) -> Self {
        Self {
            name: name.into(),
            tier,
            unit,
            image: image.into(),
            traits,
        }
    }

    /// Identity key used by all keyed collections.
    pub fn key(&self) -> ChampionKey<'_> {
        ChampionKey {
            name: &self.name,
            tier: self.tier,
        }
    }

    /// Whether this champion natively carries `trait_def` (by value identity).
    pub fn carries(&self, trait_def: &TraitDef) -> bool {
        self.traits.iter().any(|t| t.key() == trait_def.key())
    }
}

/// Borrowed identity key for a champion: `(name, tier)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChampionKey<'a> {
    pub name: &'a str,
    pub tier: u8,
}
