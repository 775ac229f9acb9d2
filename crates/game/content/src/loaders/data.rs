//! Catalog loader for cached `data.json` files.
//!
//! The cache layout mirrors what the fetcher writes: a version tag, a fetch
//! timestamp, and flat champion/trait arrays. Champions embed their trait
//! entries, but only the names are authoritative here — the loader resolves
//! them against the trait table so every champion shares the same `Arc`'d
//! definitions.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tft_core::{ActivationTier, Champion, TraitDef};

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};

/// Raw catalog file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCatalog {
    pub version: String,
    /// Fetch time in milliseconds since the epoch.
    pub timestamp: i64,
    #[serde(rename = "champion")]
    pub champions: Vec<RawChampion>,
    #[serde(rename = "trait")]
    pub traits: Vec<RawTrait>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawChampion {
    pub name: String,
    pub tier: u8,
    pub unit: u8,
    pub img: String,
    pub traits: Vec<RawTraitRef>,
}

/// Trait entry embedded in a champion record; only the name is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTraitRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrait {
    pub name: String,
    pub description: String,
    pub img: String,
    pub activations: Vec<RawActivation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawActivation {
    #[serde(rename = "memberCount")]
    pub member_count: u32,
    pub tier: ActivationTier,
    pub effect: String,
}

/// Loader for catalog data from cached JSON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a `data.json` file.
    ///
    /// # Errors
    ///
    /// Fails on unreadable files, malformed JSON, and corrupt catalog
    /// entities (invalid activation ladders, unknown trait references).
    /// Corruption aborts the load; nothing is silently truncated.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let raw: RawCatalog = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog JSON: {}", e))?;
        Self::build(raw)
    }

    /// Build a catalog from an already-parsed raw structure.
    pub fn build(raw: RawCatalog) -> LoadResult<Catalog> {
        let mut traits: HashMap<String, Arc<TraitDef>> = HashMap::with_capacity(raw.traits.len());
        for entry in raw.traits {
            let activations = entry
                .activations
                .into_iter()
                .map(|activation| {
                    tft_core::Activation::new(
                        activation.member_count,
                        activation.tier,
                        activation.effect,
                    )
                })
                .collect();
            let trait_def = TraitDef::new(entry.name, entry.description, entry.img, activations)?;
            traits.insert(trait_def.name.clone(), Arc::new(trait_def));
        }

        let mut champions = Vec::with_capacity(raw.champions.len());
        for entry in raw.champions {
            let trait_names: Vec<String> =
                entry.traits.into_iter().map(|t| t.name).collect();
            let resolved = Catalog::resolve_traits(&entry.name, &trait_names, &traits)?;
            champions.push(Champion::new(
                entry.name,
                entry.tier,
                entry.unit,
                entry.img,
                resolved,
            ));
        }

        Ok(Catalog::from_parts(
            raw.version,
            champions,
            traits.into_values().collect(),
        ))
    }
}
