//! Exact-count Ninja rule from the early sets.
//!
//! Historical Ninja only activates when the champion-borne member count hits
//! a defined threshold exactly: counts between thresholds or above the top
//! rung grant nothing. Emblem or heart occurrences never satisfy the exact
//! count.

use std::sync::Arc;

use super::TraitRule;
use crate::team::Team;

const SET_VERSIONS: &[&str] = &["S1", "S4", "S4.5"];
const TRAIT_NAME: &str = "Ninja";

/// Nulls the Ninja activation when the champion count is not an exact
/// threshold match.
pub struct NinjaExactCountRule;

impl TraitRule for NinjaExactCountRule {
    fn name(&self) -> &'static str {
        "ninja_exact_count"
    }

    fn apply(&self, team: &mut Team) -> bool {
        if !SET_VERSIONS.contains(&team.version()) {
            return false;
        }

        let catalog = Arc::clone(team.catalog());
        let Some(ninja) = catalog.trait_def(TRAIT_NAME) else {
            return false;
        };
        if team.trait_status().get(&ninja.key()).is_none() {
            return false;
        }

        let fielded = team
            .champions()
            .iter()
            .filter(|champion| champion.traits.iter().any(|t| t.name == TRAIT_NAME))
            .count() as u32;

        if ninja
            .activations()
            .iter()
            .any(|activation| activation.member_count == fielded)
        {
            return false;
        }

        if let Some(entry) = team.status_entry_mut(ninja.key()) {
            entry.activation = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActivationTier;
    use crate::testutil;

    fn ninja_team(version: &str, ninjas: usize) -> Team {
        let ninja = testutil::trait_def(
            "Ninja",
            &[(1, ActivationTier::Bronze, "e1"), (4, ActivationTier::Gold, "e2")],
        );
        let catalog = testutil::StaticCatalog::new(version, Vec::new(), vec![Arc::clone(&ninja)]);
        let mut team = Team::new(version, catalog, 9);
        for index in 0..ninjas {
            team.add_champion(&testutil::champion(
                &format!("Ninja {index}"),
                1,
                &[&ninja],
            ));
        }
        team
    }

    #[test]
    fn off_threshold_count_is_nulled() {
        let mut team = ninja_team("S4", 2);
        let outcome = team.calculate_trait_status();
        assert!(outcome.trait_rule_applied);
        let entry = team.trait_status().values().next().unwrap();
        assert_eq!(entry.member_count, 2);
        assert_eq!(entry.activation, None);
    }

    #[test]
    fn exact_threshold_count_stands() {
        let mut team = ninja_team("S4", 4);
        let outcome = team.calculate_trait_status();
        assert!(!outcome.trait_rule_applied);
        let entry = team.trait_status().values().next().unwrap();
        assert_eq!(
            entry.activation.as_ref().map(|a| a.tier),
            Some(ActivationTier::Gold)
        );
    }

    #[test]
    fn rule_is_inert_outside_its_sets() {
        let mut team = ninja_team("S10", 2);
        let outcome = team.calculate_trait_status();
        assert!(!outcome.trait_rule_applied);
        let entry = team.trait_status().values().next().unwrap();
        // Ordinary highest-met-threshold selection applies.
        assert_eq!(
            entry.activation.as_ref().map(|a| a.tier),
            Some(ActivationTier::Bronze)
        );
    }
}
