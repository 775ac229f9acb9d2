//! Immutable champion/trait catalog.

use std::collections::HashMap;
use std::sync::Arc;

use tft_core::{CatalogError, CatalogOracle, Champion, TraitDef};

/// The in-memory catalog handed to the core at startup.
///
/// Built once per set version, then shared read-only behind `Arc`. Champion
/// and trait names are unique within a set; lookups are by display name.
#[derive(Debug)]
pub struct Catalog {
    version: String,
    champions: Vec<Champion>,
    champion_index: HashMap<String, usize>,
    traits: HashMap<String, Arc<TraitDef>>,
}

impl Catalog {
    /// Assembles a catalog from finished parts.
    ///
    /// Later duplicates of a name shadow earlier ones, mirroring how the
    /// data source keys entries by name.
    pub fn from_parts(
        version: impl Into<String>,
        champions: Vec<Champion>,
        traits: Vec<Arc<TraitDef>>,
    ) -> Self {
        let champion_index = champions
            .iter()
            .enumerate()
            .map(|(index, champion)| (champion.name.clone(), index))
            .collect();
        let traits = traits
            .into_iter()
            .map(|trait_def| (trait_def.name.clone(), trait_def))
            .collect();
        Self {
            version: version.into(),
            champions,
            champion_index,
            traits,
        }
    }

    /// Resolves a champion's trait names against `traits`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTrait`] when a referenced trait is not
    /// in the map — the catalog source is corrupt.
    pub fn resolve_traits(
        champion_name: &str,
        trait_names: &[String],
        traits: &HashMap<String, Arc<TraitDef>>,
    ) -> Result<Vec<Arc<TraitDef>>, CatalogError> {
        trait_names
            .iter()
            .map(|name| {
                traits
                    .get(name)
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownTrait {
                        champion_name: champion_name.to_string(),
                        trait_name: name.clone(),
                    })
            })
            .collect()
    }

    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }

    /// Traits in arbitrary map order.
    pub fn traits(&self) -> impl Iterator<Item = &Arc<TraitDef>> {
        self.traits.values()
    }
}

impl CatalogOracle for Catalog {
    fn version(&self) -> &str {
        &self.version
    }

    fn champion(&self, name: &str) -> Option<&Champion> {
        self.champion_index
            .get(name)
            .map(|&index| &self.champions[index])
    }

    fn trait_def(&self, name: &str) -> Option<&Arc<TraitDef>> {
        self.traits.get(name)
    }

    fn champions(&self) -> &[Champion] {
        &self.champions
    }
}
