//! Stochastic comp suggestion search.
//!
//! Proposes champions to fill remaining board capacity, maximizing synergy.
//! The search runs independent trials over a disposable copy of the target
//! team: each trial fills the board by weighted random draws, the filled
//! comp is scored, and the best trial's picks win. All randomness flows
//! through the injected [`RngOracle`], so a fixed session seed replays the
//! exact search.

use std::sync::Arc;

use crate::config::PlannerConfig;
use crate::env::{RngOracle, compute_seed};
use crate::model::Champion;
use crate::team::Team;

// Hand-tuned weighting heuristic, per candidate trait:
// - unique trait not yet fielded: modest credit, it can never grow
// - pick would newly activate the trait: the strongest credit
// - trait short of its first threshold: credit fades with distance
// - trait activated below top tier: credit fades with distance to next rung
// - trait at top tier: discourage over-investing
const UNIQUE_TRAIT_WEIGHT: f64 = 50.0;
const NEW_ACTIVATION_WEIGHT: f64 = 100.0;
const PRE_ACTIVATION_BASE: f64 = 75.0;
const PRE_ACTIVATION_STEP: f64 = 5.0;
const NEXT_TIER_BASE: f64 = 80.0;
const NEXT_TIER_STEP: f64 = 15.0;
const TOP_TIER_PENALTY: f64 = 1.0;

/// Best trial of a suggestion search.
#[derive(Clone, Debug)]
pub struct SuggestionOutcome {
    /// Champions to append, in draw order.
    pub champions: Vec<Champion>,
    /// Synergy score of the filled comp.
    pub score: f64,
}

/// Weighted-draw range for one candidate: `[low, high)` over the cumulative
/// weight axis, tagged with the candidate's pool index.
type WeightRange = (usize, f64, f64);

/// Comp suggestion search over a disposable working team.
pub struct CompSuggestion {
    team: Team,
    initial_champions: Vec<Champion>,
    lower_tier: u8,
    upper_tier: u8,
}

impl CompSuggestion {
    /// Builds a search over a copy of `team`.
    ///
    /// Emblems, hearts, and the capacity cap are copied directly; champions
    /// are replayed through the add pipeline so add-time rules re-run. The
    /// caller's team is never mutated.
    pub fn from_team(team: &Team) -> Self {
        let mut working = Team::new(
            team.version(),
            Arc::clone(team.catalog()),
            team.max_team_size(),
        );
        for emblem in team.emblems() {
            working.add_emblem(Arc::clone(&emblem.trait_def));
        }
        for heart in team.hextech_hearts() {
            working.add_hextech_heart(Arc::clone(heart));
        }

        let mut initial_champions = Vec::with_capacity(team.champions().len());
        for champion in team.champions() {
            initial_champions.push(champion.clone());
            working.add_champion(champion);
        }

        Self {
            team: working,
            initial_champions,
            lower_tier: PlannerConfig::MIN_CHAMPION_TIER,
            upper_tier: PlannerConfig::MAX_CHAMPION_TIER,
        }
    }

    pub fn set_lower_tier(&mut self, tier: u8) {
        self.lower_tier = tier;
    }

    pub fn set_upper_tier(&mut self, tier: u8) {
        self.upper_tier = tier;
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Runs the full search and returns the best trial.
    ///
    /// Ties keep the earliest maximal trial. Bounded by
    /// `SUGGESTION_TRIALS × max_team_size` fills.
    pub fn suggest(&mut self, rng: &dyn RngOracle, session_seed: u64) -> SuggestionOutcome {
        let mut best: Option<SuggestionOutcome> = None;
        for trial in 0..PlannerConfig::SUGGESTION_TRIALS {
            let outcome = self.run_trial(rng, session_seed, trial);
            if best.as_ref().is_none_or(|current| outcome.score > current.score) {
                best = Some(outcome);
            }
        }
        best.unwrap_or(SuggestionOutcome {
            champions: Vec::new(),
            score: 0.0,
        })
    }

    /// Applies a suggestion to the working team and returns it, for callers
    /// that want the hypothetical team's activation snapshot.
    pub fn apply_suggestion(&mut self, suggested: &[Champion]) -> &mut Team {
        for champion in suggested {
            self.team.add_champion(champion);
        }
        &mut self.team
    }

    fn run_trial(&mut self, rng: &dyn RngOracle, session_seed: u64, trial: u32) -> SuggestionOutcome {
        let catalog = Arc::clone(self.team.catalog());
        let mut pool: Vec<&Champion> = catalog
            .champions()
            .iter()
            .filter(|champion| (self.lower_tier..=self.upper_tier).contains(&champion.tier))
            .collect();

        let mut suggested = Vec::new();
        let mut draw = 0u32;
        while self.team.team_size() < self.team.max_team_size() {
            let mut ranges: Vec<WeightRange> = Vec::new();
            let mut total = 0.0f64;
            for (index, candidate) in pool.iter().enumerate() {
                if self.team.champions().contains(candidate.key())
                    || self.team.team_size() + u32::from(candidate.unit)
                        > self.team.max_team_size()
                {
                    continue;
                }
                let weight = compute_champion_weight(&mut self.team, candidate);
                if weight > 0.0 {
                    ranges.push((index, total, total + weight));
                    total += weight;
                }
            }

            // No viable candidate left: finalize the trial early.
            if total == 0.0 {
                break;
            }

            let value = rng.unit_f64(compute_seed(session_seed, trial, draw)) * total;
            draw += 1;
            let Some(index) = pick_weighted(&ranges, value) else {
                break;
            };

            let outcome = self.team.add_champion(pool[index]);
            if outcome.added {
                suggested.push(pool[index].clone());
            } else {
                // A veto rule rejected the draw; drop the candidate from
                // this trial's pool so the fill loop stays bounded.
                pool.remove(index);
            }
        }

        let score = evaluate_comp(&mut self.team);
        self.reset_working_team();

        SuggestionOutcome {
            champions: suggested,
            score,
        }
    }

    /// Restores the working team's roster to the pre-trial champion set.
    /// Emblems and hearts are untouched.
    fn reset_working_team(&mut self) {
        self.team.reset_champions(false);
        for champion in &self.initial_champions {
            self.team.add_champion(champion);
        }
    }
}

/// Resolves a cumulative-weight draw to a candidate pool index.
///
/// Ranges are half-open `[low, high)`, so boundary values resolve to the
/// higher range and `value == total` resolves to none.
pub fn pick_weighted(ranges: &[WeightRange], value: f64) -> Option<usize> {
    ranges
        .iter()
        .find(|(_, low, high)| value >= *low && value < *high)
        .map(|(index, _, _)| *index)
}

/// Scores `champion` against the team's current activation state.
///
/// Recomputes the activation snapshot first, then accumulates the heuristic
/// credits per trait and scales the result by `1 + tier/10` to favor
/// higher-cost units. Candidates scoring zero or below are excluded from
/// the draw entirely.
pub fn compute_champion_weight(team: &mut Team, champion: &Champion) -> f64 {
    team.calculate_trait_status();

    let mut weight = 1.0f64;
    for trait_def in &champion.traits {
        let (member_count, activation) = match team.trait_status().get(&trait_def.key()) {
            Some(status) => (status.member_count, status.activation.as_ref()),
            None => (0, None),
        };

        match activation {
            None => {
                if member_count == 0 && trait_def.is_unique() {
                    weight += UNIQUE_TRAIT_WEIGHT;
                    continue;
                }
                let Some(first) = trait_def.activations().first() else {
                    continue;
                };
                // Members still missing after this pick.
                let distance = i64::from(first.member_count) - i64::from(member_count) - 1;
                if distance == 0 {
                    weight += NEW_ACTIVATION_WEIGHT;
                } else {
                    weight += PRE_ACTIVATION_BASE - PRE_ACTIVATION_STEP * distance as f64;
                }
            }
            Some(current) => match trait_def.next_activation(current) {
                None => weight -= TOP_TIER_PENALTY,
                Some(next) => {
                    let distance = i64::from(next.member_count) - i64::from(member_count) - 1;
                    weight += NEXT_TIER_BASE - NEXT_TIER_STEP * distance as f64;
                }
            },
        }
    }

    weight * (1.0 + f64::from(champion.tier) / 10.0)
}

/// Synergy score of the team's current comp: for every activated trait,
/// `member_count × tier factor` (Bronze 1, Silver 1.25, Gold 1.5,
/// Prismatic 2).
pub fn evaluate_comp(team: &mut Team) -> f64 {
    team.calculate_trait_status();
    team.trait_status()
        .values()
        .filter_map(|status| {
            status
                .activation
                .as_ref()
                .map(|activation| f64::from(status.member_count) * activation.tier.power_factor())
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CatalogOracle, PcgRng};
    use crate::model::ActivationTier;
    use crate::testutil;

    #[test]
    fn pick_weighted_uses_half_open_ranges() {
        let ranges = vec![(0, 0.0, 10.0), (1, 10.0, 25.0), (2, 25.0, 30.0)];
        assert_eq!(pick_weighted(&ranges, 0.0), Some(0));
        assert_eq!(pick_weighted(&ranges, 9.999), Some(0));
        // Boundary values land in the higher range.
        assert_eq!(pick_weighted(&ranges, 10.0), Some(1));
        assert_eq!(pick_weighted(&ranges, 25.0), Some(2));
        // The total itself resolves to none.
        assert_eq!(pick_weighted(&ranges, 30.0), None);
    }

    #[test]
    fn weight_rewards_a_newly_activating_pick() {
        let duelist = testutil::trait_def("Duelist", &[(2, ActivationTier::Bronze, "e1")]);
        let catalog = testutil::StaticCatalog::empty();
        let mut team = Team::new("S10", catalog, 9);
        team.add_champion(&testutil::champion("Fiora", 1, &[&duelist]));

        let candidate = testutil::champion("Yasuo", 1, &[&duelist]);
        // 1 base + 100 newly-activating, scaled by 1.1 for a 1-cost.
        let weight = compute_champion_weight(&mut team, &candidate);
        assert!((weight - 101.0 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn weight_credits_unique_traits_and_scales_by_cost() {
        let soulbound = testutil::trait_def("Soulbound", &[(1, ActivationTier::Gold, "e1")]);
        let catalog = testutil::StaticCatalog::empty();
        let mut team = Team::new("S10", catalog, 9);

        let candidate = testutil::champion("Lone Hero", 5, &[&soulbound]);
        // 1 base + 50 unique, scaled by 1.5 for a 5-cost.
        let weight = compute_champion_weight(&mut team, &candidate);
        assert!((weight - 51.0 * 1.5).abs() < 1e-9);
    }

    #[test]
    fn weight_discourages_top_tier_overinvestment() {
        let duelist = testutil::trait_def("Duelist", &[(2, ActivationTier::Bronze, "e1")]);
        let catalog = testutil::StaticCatalog::empty();
        let mut team = Team::new("S10", catalog, 9);
        team.add_champion(&testutil::champion("Fiora", 1, &[&duelist]));
        team.add_champion(&testutil::champion("Yasuo", 1, &[&duelist]));

        let candidate = testutil::champion("Yone", 1, &[&duelist]);
        // 1 base - 1 top-tier penalty, scaled by 1.1.
        let weight = compute_champion_weight(&mut team, &candidate);
        assert!(weight.abs() < 1e-9);
    }

    #[test]
    fn weight_scales_distance_to_the_next_rung() {
        let duelist = testutil::trait_def(
            "Duelist",
            &[(2, ActivationTier::Bronze, "e1"), (6, ActivationTier::Gold, "e2")],
        );
        let catalog = testutil::StaticCatalog::empty();
        let mut team = Team::new("S10", catalog, 9);
        team.add_champion(&testutil::champion("Fiora", 1, &[&duelist]));
        team.add_champion(&testutil::champion("Yasuo", 1, &[&duelist]));

        let candidate = testutil::champion("Yone", 1, &[&duelist]);
        // Activated at 2/6: next rung needs 6, distance 3 → 80 - 45 = 35.
        let weight = compute_champion_weight(&mut team, &candidate);
        assert!((weight - 36.0 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn search_is_deterministic_for_a_fixed_seed() {
        let catalog = testutil::sample_catalog();
        let team = Team::new("S10", catalog, 6);

        let mut first = CompSuggestion::from_team(&team);
        let mut second = CompSuggestion::from_team(&team);
        let a = first.suggest(&PcgRng, 1234);
        let b = second.suggest(&PcgRng, 1234);

        let names =
            |outcome: &SuggestionOutcome| -> Vec<String> {
                outcome.champions.iter().map(|c| c.name.clone()).collect()
            };
        assert_eq!(names(&a), names(&b));
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn suggestion_never_exceeds_capacity() {
        let catalog: Arc<dyn CatalogOracle> = testutil::sample_catalog();
        for seed in 0..10 {
            let mut team = Team::new("S10", Arc::clone(&catalog), 7);
            team.add_champion(catalog.champions().first().unwrap());
            let base_size = team.team_size();

            let mut search = CompSuggestion::from_team(&team);
            let outcome = search.suggest(&PcgRng, seed);

            let added: u32 = outcome.champions.iter().map(|c| u32::from(c.unit)).sum();
            assert!(base_size + added <= team.max_team_size());
            // The caller's team is untouched.
            assert_eq!(team.team_size(), base_size);
        }
    }

    #[test]
    fn tier_filter_constrains_the_pool() {
        let catalog = testutil::sample_catalog();
        let team = Team::new("S10", catalog, 9);

        let mut search = CompSuggestion::from_team(&team);
        search.set_lower_tier(3);
        search.set_upper_tier(5);
        let outcome = search.suggest(&PcgRng, 99);

        assert!(!outcome.champions.is_empty());
        assert!(outcome.champions.iter().all(|c| c.tier >= 3));
    }
}
