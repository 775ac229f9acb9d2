//! Mutable team aggregate: roster, overlays, and derived activation state.
//!
//! A [`Team`] is exclusively owned by one controller at a time. Mutations
//! report soft failures through outcome structs instead of errors, and the
//! activation snapshot is derived state: stale after any mutation until
//! [`Team::calculate_trait_status`] runs again.

pub mod activation;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::env::CatalogOracle;
use crate::model::{Activation, Champion, Roster, TraitDef, TraitHandle, TraitKey};
use crate::rules::RuleSet;

/// Occurrence count and highest unlocked rung for one trait.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivationStatus {
    pub member_count: u32,
    /// Highest rung met by `member_count`, or `None` when unactivated.
    pub activation: Option<Activation>,
}

/// An emblem overlay: grants a trait occurrence to a champion that does not
/// already carry the trait. `active` records whether the current roster has
/// an eligible carrier; assignment happens in the emblem rule pass.
#[derive(Clone, Debug)]
pub struct Emblem {
    pub trait_def: Arc<TraitDef>,
    pub active: bool,
}

/// Result of an add attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddOutcome {
    pub added: bool,
    pub special_rule_applied: bool,
}

/// Result of a remove attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub removed: bool,
    pub special_rule_applied: bool,
}

/// Which rule passes fired during an activation recompute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraitStatusOutcome {
    pub emblem_rule_applied: bool,
    pub trait_rule_applied: bool,
}

/// The current working set of champions plus overlays and derived state.
///
/// # Invariants
///
/// After every successful mutation:
/// - roster entries are unique by champion identity key
/// - `team_size == Σ unit over champions` and `team_size <= max_team_size`
///   (a roster-rule substitution may transiently break the sum; callers
///   reconcile before re-checking)
#[derive(Clone)]
pub struct Team {
    version: String,
    catalog: Arc<dyn CatalogOracle>,
    rules: Arc<RuleSet>,
    champions: Roster,
    emblems: Vec<Emblem>,
    hextech_hearts: Vec<Arc<TraitDef>>,
    team_size: u32,
    max_team_size: u32,
    trait_status: IndexMap<TraitHandle, ActivationStatus>,
}

impl Team {
    /// Creates an empty team with the default rule set.
    pub fn new(
        version: impl Into<String>,
        catalog: Arc<dyn CatalogOracle>,
        max_team_size: u32,
    ) -> Self {
        Self::with_rules(version, catalog, max_team_size, RuleSet::default())
    }

    /// Creates an empty team with an explicit rule set.
    pub fn with_rules(
        version: impl Into<String>,
        catalog: Arc<dyn CatalogOracle>,
        max_team_size: u32,
        rules: RuleSet,
    ) -> Self {
        Self {
            version: version.into(),
            catalog,
            rules: Arc::new(rules),
            champions: Roster::new(),
            emblems: Vec::new(),
            hextech_hearts: Vec::new(),
            team_size: 0,
            max_team_size,
            trait_status: IndexMap::new(),
        }
    }

    /// Attempts to admit `champion`.
    ///
    /// Fails softly when the champion is already rostered by identity, when
    /// its unit size would exceed capacity, or when an add rule vetoes. On
    /// success the roster rules run and may substitute entries; the outcome
    /// reports whether any fired.
    pub fn add_champion(&mut self, champion: &Champion) -> AddOutcome {
        if self.champions.contains(champion.key())
            || self.team_size + u32::from(champion.unit) > self.max_team_size
            || self.rules.run_add_rules(self, champion)
        {
            return AddOutcome {
                added: false,
                special_rule_applied: false,
            };
        }

        self.champions.push(champion.clone());
        self.team_size += u32::from(champion.unit);

        let rules = Arc::clone(&self.rules);
        AddOutcome {
            added: true,
            special_rule_applied: rules.run_roster_rules(self),
        }
    }

    /// Removes `champion` by identity key, symmetric to [`Team::add_champion`].
    pub fn remove_champion(&mut self, champion: &Champion) -> RemoveOutcome {
        if !self.champions.remove(champion.key()) {
            return RemoveOutcome {
                removed: false,
                special_rule_applied: false,
            };
        }
        self.team_size -= u32::from(champion.unit);

        let rules = Arc::clone(&self.rules);
        RemoveOutcome {
            removed: true,
            special_rule_applied: rules.run_roster_rules(self),
        }
    }

    /// Appends an emblem. It starts active pending the next emblem rule pass.
    pub fn add_emblem(&mut self, trait_def: Arc<TraitDef>) {
        self.emblems.push(Emblem {
            trait_def,
            active: true,
        });
    }

    /// Appends a hextech heart: a free trait occurrence with no carrier.
    pub fn add_hextech_heart(&mut self, trait_def: Arc<TraitDef>) {
        self.hextech_hearts.push(trait_def);
    }

    pub fn reset_champions(&mut self, recalculate_traits: bool) {
        self.champions.clear();
        self.team_size = 0;
        if recalculate_traits {
            self.calculate_trait_status();
        }
    }

    pub fn reset_emblems(&mut self, recalculate_traits: bool) {
        self.emblems.clear();
        if recalculate_traits {
            self.calculate_trait_status();
        }
    }

    pub fn reset_hextech_hearts(&mut self, recalculate_traits: bool) {
        self.hextech_hearts.clear();
        if recalculate_traits {
            self.calculate_trait_status();
        }
    }

    /// Rebuilds the activation snapshot from scratch.
    ///
    /// Pipeline: emblem rules reassign carrier eligibility, the calculator
    /// recomputes every trait's count and rung, then trait rules may null
    /// individual activations. Callers must invoke this after any mutation
    /// before reading activation status; nothing recomputes implicitly.
    pub fn calculate_trait_status(&mut self) -> TraitStatusOutcome {
        let rules = Arc::clone(&self.rules);

        let emblem_rule_applied = rules.run_emblem_rules(self);

        self.trait_status =
            activation::compute_trait_status(&self.champions, &self.emblems, &self.hextech_hearts);

        let trait_rule_applied = rules.run_trait_rules(self);

        TraitStatusOutcome {
            emblem_rule_applied,
            trait_rule_applied,
        }
    }

    /// Updates the capacity cap. Does not evict champions already rostered
    /// beyond the new cap; callers reconcile.
    pub fn set_max_team_size(&mut self, max_team_size: u32) {
        self.max_team_size = max_team_size;
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn catalog(&self) -> &Arc<dyn CatalogOracle> {
        &self.catalog
    }

    pub fn champions(&self) -> &Roster {
        &self.champions
    }

    pub fn emblems(&self) -> &[Emblem] {
        &self.emblems
    }

    pub fn hextech_hearts(&self) -> &[Arc<TraitDef>] {
        &self.hextech_hearts
    }

    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    pub fn max_team_size(&self) -> u32 {
        self.max_team_size
    }

    /// Last computed activation snapshot. Stale until
    /// [`Team::calculate_trait_status`] runs after a mutation.
    pub fn trait_status(&self) -> &IndexMap<TraitHandle, ActivationStatus> {
        &self.trait_status
    }

    /// Mutable roster access for roster rules (substitutions).
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.champions
    }

    /// Simultaneous roster view and mutable emblem flags for the emblem rule.
    pub fn roster_and_emblems_mut(&mut self) -> (&Roster, &mut [Emblem]) {
        (&self.champions, &mut self.emblems)
    }

    /// Mutable status entry lookup for trait rules.
    pub fn status_entry_mut(&mut self, key: TraitKey<'_>) -> Option<&mut ActivationStatus> {
        self.trait_status.get_mut(&key)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Team size: \t{}/{}", self.team_size, self.max_team_size)?;
        let names: Vec<&str> = self.champions.iter().map(|c| c.name.as_str()).collect();
        writeln!(f, "Champions: \t{}", names.join(", "))?;

        let emblems: Vec<String> = self
            .emblems
            .iter()
            .map(|emblem| {
                if emblem.active {
                    emblem.trait_def.name.clone()
                } else {
                    format!("{} (inactive)", emblem.trait_def.name)
                }
            })
            .collect();
        writeln!(f, "Emblems: \t{}", emblems.join(", "))?;

        let hearts: Vec<&str> = self.hextech_hearts.iter().map(|t| t.name.as_str()).collect();
        writeln!(f, "Hearts: \t{}", hearts.join(", "))?;

        writeln!(f, "Activated traits:")?;
        for (handle, status) in &self.trait_status {
            if let Some(activation) = &status.activation {
                writeln!(
                    f,
                    "\t{} {} ({})",
                    activation.member_count,
                    handle.def().name,
                    activation.tier
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActivationTier;
    use crate::testutil;

    fn empty_team(max: u32) -> Team {
        Team::new("S10", testutil::StaticCatalog::empty(), max)
    }

    #[test]
    fn team_size_tracks_unit_sum_and_cap() {
        let mut team = empty_team(9);
        let sniper = testutil::trait_def("Sniper", &[(2, ActivationTier::Bronze, "e1")]);

        for index in 0..8 {
            let champion =
                testutil::champion(&format!("Unit {index}"), 1, &[&sniper]);
            let outcome = team.add_champion(&champion);
            assert!(outcome.added);
            let unit_sum: u32 = team.champions().iter().map(|c| u32::from(c.unit)).sum();
            assert_eq!(team.team_size(), unit_sum);
            assert!(team.team_size() <= team.max_team_size());
        }
    }

    #[test]
    fn oversized_unit_is_rejected_at_capacity_boundary() {
        let mut team = empty_team(9);
        for index in 0..8 {
            let champion = testutil::champion(&format!("Unit {index}"), 1, &[]);
            assert!(team.add_champion(&champion).added);
        }
        assert_eq!(team.team_size(), 8);

        // unit 2 with one slot free: would exceed the cap.
        let mut golem = testutil::champion("Golem", 3, &[]);
        golem.unit = 2;
        let outcome = team.add_champion(&golem);
        assert!(!outcome.added);
        assert_eq!(team.team_size(), 8);
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let mut team = empty_team(9);
        let champion = testutil::champion("Ahri", 4, &[]);
        assert!(team.add_champion(&champion).added);
        assert!(!team.add_champion(&champion).added);
        assert_eq!(team.team_size(), 1);

        // Same name at another cost is a distinct entity.
        let variant = testutil::champion("Ahri", 2, &[]);
        assert!(team.add_champion(&variant).added);
    }

    #[test]
    fn remove_is_symmetric() {
        let mut team = empty_team(9);
        let champion = testutil::champion("Ekko", 3, &[]);
        team.add_champion(&champion);

        let outcome = team.remove_champion(&champion);
        assert!(outcome.removed);
        assert_eq!(team.team_size(), 0);
        assert!(!team.remove_champion(&champion).removed);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut team = empty_team(9);
        let duelist = testutil::trait_def(
            "Duelist",
            &[(2, ActivationTier::Bronze, "e1"), (4, ActivationTier::Gold, "e2")],
        );
        for index in 0..3 {
            team.add_champion(&testutil::champion(
                &format!("Duelist {index}"),
                1,
                &[&duelist],
            ));
        }
        team.add_emblem(Arc::clone(&duelist));

        team.calculate_trait_status();
        let first = team.trait_status().clone();
        team.calculate_trait_status();
        assert_eq!(&first, team.trait_status());
    }

    #[test]
    fn resets_clear_and_optionally_recompute() {
        let mut team = empty_team(9);
        let duelist = testutil::trait_def("Duelist", &[(1, ActivationTier::Bronze, "e1")]);
        team.add_champion(&testutil::champion("Fiora", 1, &[&duelist]));
        team.calculate_trait_status();
        assert!(!team.trait_status().is_empty());

        // recalc=false leaves the stale snapshot in place.
        team.reset_champions(false);
        assert_eq!(team.team_size(), 0);
        assert!(!team.trait_status().is_empty());

        // recalc=true rebuilds it from the now-empty roster.
        team.reset_champions(true);
        assert!(team.trait_status().is_empty());
    }

    #[test]
    fn raising_the_cap_does_not_evict() {
        let mut team = empty_team(2);
        team.add_champion(&testutil::champion("A", 1, &[]));
        team.add_champion(&testutil::champion("B", 1, &[]));
        team.set_max_team_size(1);
        // No eviction: callers reconcile.
        assert_eq!(team.team_size(), 2);
        assert_eq!(team.champions().len(), 2);
    }
}
