//! Set 10 dual-identity Akali rules.
//!
//! Remix Rumble ships Akali as two catalog entries, one per headline act:
//! "Akali K/DA" and "Akali True-DMG". Only one may be fielded, and the
//! fielded one must follow whichever trait the rest of the roster leans
//! toward.

use std::sync::Arc;

use super::{AddRule, RosterRule};
use crate::model::Champion;
use crate::team::Team;

const SET_VERSION: &str = "S10";
const KDA_VARIANT: &str = "Akali K/DA";
const TRUE_DMG_VARIANT: &str = "Akali True-DMG";
const KDA_TRAIT: &str = "K/DA";
const TRUE_DMG_TRAIT: &str = "True Damage";

/// Substitutes the fielded Akali for the majority-trait variant.
///
/// Counts K/DA and True Damage carriers among the other champions; on a
/// strict majority the minority variant is replaced in place. A tie leaves
/// the roster untouched.
pub struct AkaliVariantRule;

impl RosterRule for AkaliVariantRule {
    fn name(&self) -> &'static str {
        "akali_variant"
    }

    fn apply(&self, team: &mut Team) -> bool {
        if team.version() != SET_VERSION {
            return false;
        }

        let catalog = Arc::clone(team.catalog());
        let (Some(kda_akali), Some(true_dmg_akali)) = (
            catalog.champion(KDA_VARIANT),
            catalog.champion(TRUE_DMG_VARIANT),
        ) else {
            return false;
        };
        let (Some(kda), Some(true_dmg)) = (
            catalog.trait_def(KDA_TRAIT),
            catalog.trait_def(TRUE_DMG_TRAIT),
        ) else {
            return false;
        };

        if !team.champions().contains(kda_akali.key())
            && !team.champions().contains(true_dmg_akali.key())
        {
            return false;
        }

        let mut kda_count = 0usize;
        let mut true_dmg_count = 0usize;
        for champion in team.champions() {
            if champion.key() == kda_akali.key() || champion.key() == true_dmg_akali.key() {
                continue;
            }
            if champion.carries(kda) {
                kda_count += 1;
            }
            if champion.carries(true_dmg) {
                true_dmg_count += 1;
            }
        }

        if kda_count > true_dmg_count {
            return team
                .roster_mut()
                .replace(true_dmg_akali.key(), kda_akali, true);
        }
        if kda_count < true_dmg_count {
            return team
                .roster_mut()
                .replace(kda_akali.key(), true_dmg_akali, true);
        }
        false
    }
}

/// Vetoes a second Akali: the two variants may not coexist.
pub struct AkaliVariantAddRule;

impl AddRule for AkaliVariantAddRule {
    fn name(&self) -> &'static str {
        "akali_variant_duplicate"
    }

    fn veto(&self, team: &Team, candidate: &Champion) -> bool {
        if team.version() != SET_VERSION {
            return false;
        }
        if candidate.name != KDA_VARIANT && candidate.name != TRUE_DMG_VARIANT {
            return false;
        }
        team.champions()
            .iter()
            .any(|champion| champion.name == KDA_VARIANT || champion.name == TRUE_DMG_VARIANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogOracle;
    use crate::model::ActivationTier;
    use crate::testutil;

    fn akali_catalog() -> Arc<testutil::StaticCatalog> {
        let kda = testutil::trait_def("K/DA", &[(3, ActivationTier::Bronze, "e1")]);
        let true_dmg = testutil::trait_def("True Damage", &[(2, ActivationTier::Bronze, "e1")]);
        let pop = testutil::trait_def("Pop Star", &[(2, ActivationTier::Bronze, "e1")]);

        let champions = vec![
            testutil::champion("Akali K/DA", 4, &[&kda]),
            testutil::champion("Akali True-DMG", 4, &[&true_dmg]),
            testutil::champion("Ahri", 4, &[&kda]),
            testutil::champion("Evelynn", 4, &[&kda]),
            testutil::champion("Senna", 2, &[&true_dmg]),
            testutil::champion("Kennen", 1, &[&pop]),
        ];
        testutil::StaticCatalog::new("S10", champions, vec![kda, true_dmg, pop])
    }

    fn team_with(names: &[&str]) -> Team {
        let catalog: Arc<dyn CatalogOracle> = akali_catalog();
        let mut team = Team::new("S10", Arc::clone(&catalog), 9);
        for name in names {
            let champion = catalog.champion(name).expect("fixture champion").clone();
            team.add_champion(&champion);
        }
        team
    }

    #[test]
    fn fielded_akali_follows_the_majority_trait() {
        // Two K/DA carriers vs one True Damage carrier.
        let team = team_with(&["Akali True-DMG", "Ahri", "Evelynn", "Senna"]);
        let names: Vec<_> = team.champions().iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Akali K/DA"));
        assert!(!names.contains(&"Akali True-DMG"));
    }

    #[test]
    fn tie_leaves_the_roster_untouched() {
        let team = team_with(&["Akali K/DA", "Ahri", "Senna"]);
        let names: Vec<_> = team.champions().iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Akali K/DA"));
    }

    #[test]
    fn second_variant_is_vetoed() {
        let catalog: Arc<dyn CatalogOracle> = akali_catalog();
        let mut team = team_with(&["Akali K/DA"]);
        let other = catalog.champion("Akali True-DMG").unwrap().clone();

        let outcome = team.add_champion(&other);
        assert!(!outcome.added);
        assert_eq!(team.champions().len(), 1);
    }

    #[test]
    fn rules_are_inert_outside_their_set() {
        let catalog: Arc<dyn CatalogOracle> = akali_catalog();
        let mut team = Team::new("S9", Arc::clone(&catalog), 9);
        team.add_champion(&catalog.champion("Akali K/DA").unwrap().clone());
        let outcome = team.add_champion(&catalog.champion("Akali True-DMG").unwrap().clone());
        assert!(outcome.added);
    }
}
