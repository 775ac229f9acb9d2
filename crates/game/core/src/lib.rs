//! Deterministic team-composition domain engine.
//!
//! `tft-core` defines the canonical rules of comp planning — the champion and
//! trait model, trait activation, version-gated special rules, the team
//! aggregate, and the stochastic comp suggestion search — and exposes pure
//! APIs reused by the runtime and offline tools. All roster mutation flows
//! through [`team::Team`], and supporting crates depend on the types
//! re-exported here.

pub mod config;
pub mod env;
pub mod model;
pub mod rules;
pub mod suggest;
pub mod team;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::PlannerConfig;
pub use env::{CatalogOracle, PcgRng, RngOracle, compute_seed};
pub use model::{
    Activation, ActivationTier, CatalogError, Champion, ChampionKey, Roster, TraitDef, TraitHandle,
    TraitKey,
};
pub use rules::{
    AddRule, AkaliVariantAddRule, AkaliVariantRule, EmblemAssignmentRule, EmblemRule,
    NinjaExactCountRule, RosterRule, RuleSet, TraitRule,
};
pub use suggest::{CompSuggestion, SuggestionOutcome, compute_champion_weight, evaluate_comp};
pub use team::{
    ActivationStatus, AddOutcome, Emblem, RemoveOutcome, Team, TraitStatusOutcome,
    activation::compute_trait_status,
};
