//! Shared fixtures for unit tests.

use std::sync::Arc;

use crate::env::CatalogOracle;
use crate::model::{Activation, ActivationTier, Champion, TraitDef};

/// Builds a shared trait definition from `(threshold, tier, effect)` rungs.
pub fn trait_def(name: &str, rungs: &[(u32, ActivationTier, &str)]) -> Arc<TraitDef> {
    let activations = rungs
        .iter()
        .map(|(member_count, tier, effect)| Activation::new(*member_count, *tier, *effect))
        .collect();
    Arc::new(
        TraitDef::new(name, format!("{name} synergy"), "", activations).expect("valid fixture trait"),
    )
}

/// Builds a unit-size-1 champion carrying the given traits.
pub fn champion(name: &str, tier: u8, traits: &[&Arc<TraitDef>]) -> Champion {
    Champion::new(
        name,
        tier,
        1,
        "",
        traits.iter().map(|t| Arc::clone(t)).collect(),
    )
}

/// In-memory catalog fixture.
pub struct StaticCatalog {
    version: String,
    champions: Vec<Champion>,
    traits: Vec<Arc<TraitDef>>,
}

impl StaticCatalog {
    pub fn new(
        version: &str,
        champions: Vec<Champion>,
        traits: Vec<Arc<TraitDef>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            version: version.to_string(),
            champions,
            traits,
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::new("S10", Vec::new(), Vec::new())
    }
}

impl CatalogOracle for StaticCatalog {
    fn version(&self) -> &str {
        &self.version
    }

    fn champion(&self, name: &str) -> Option<&Champion> {
        self.champions.iter().find(|c| c.name == name)
    }

    fn trait_def(&self, name: &str) -> Option<&Arc<TraitDef>> {
        self.traits.iter().find(|t| t.name == name)
    }

    fn champions(&self) -> &[Champion] {
        &self.champions
    }
}

/// A small cross-tier catalog with overlapping synergies, enough for the
/// suggestion search to have real choices.
pub fn sample_catalog() -> Arc<StaticCatalog> {
    let duelist = trait_def(
        "Duelist",
        &[
            (2, ActivationTier::Bronze, "e1"),
            (4, ActivationTier::Silver, "e2"),
            (6, ActivationTier::Gold, "e3"),
        ],
    );
    let sniper = trait_def(
        "Sniper",
        &[(2, ActivationTier::Bronze, "e1"), (4, ActivationTier::Gold, "e2")],
    );
    let sorcerer = trait_def(
        "Sorcerer",
        &[(2, ActivationTier::Bronze, "e1"), (4, ActivationTier::Silver, "e2")],
    );
    let soulbound = trait_def("Soulbound", &[(1, ActivationTier::Gold, "e1")]);

    let champions = vec![
        champion("Fiora", 1, &[&duelist]),
        champion("Yasuo", 2, &[&duelist]),
        champion("Caitlyn", 1, &[&sniper]),
        champion("Vayne", 2, &[&duelist, &sniper]),
        champion("Lux", 2, &[&sorcerer]),
        champion("Ahri", 3, &[&sorcerer]),
        champion("Jhin", 4, &[&sniper]),
        champion("Irelia", 4, &[&duelist, &sorcerer]),
        champion("Veigar", 3, &[&sorcerer]),
        champion("Bard", 5, &[&soulbound]),
    ];

    StaticCatalog::new(
        "S10",
        champions,
        vec![duelist, sniper, sorcerer, soulbound],
    )
}
