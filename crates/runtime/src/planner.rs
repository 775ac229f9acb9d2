//! Synchronous planning session controller.
//!
//! [`Planner`] owns one live [`Team`] and drives it from name-based commands
//! the way a desktop shell issues them. Every command runs to completion
//! before the next; nothing here is thread-shared. Unknown names and invalid
//! configuration are no-ops by contract — the shell decides what feedback to
//! show.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use tft_core::{
    CatalogOracle, CompSuggestion, PcgRng, PlannerConfig, Team, compute_seed,
};

use crate::error::{Result, RuntimeError};
use crate::snapshot::{
    EmblemStatus, SuggestionSnapshot, TraitStatusEntry, emblem_statuses, trait_status_entries,
};

/// Marker used for an unoccupied or unresolvable roster slot.
const EMPTY_SLOT: &str = "";

/// One planning session: a live team plus suggestion settings.
pub struct Planner {
    catalog: Arc<dyn CatalogOracle>,
    team: Team,
    lower_tier: u8,
    upper_tier: u8,
    suggestion_enabled: bool,
    session_seed: u64,
    searches_run: u32,
    rng: PcgRng,
}

impl Planner {
    /// Creates a session over `catalog` with a fresh random session seed.
    pub fn new(catalog: Arc<dyn CatalogOracle>) -> Self {
        Self::with_seed(catalog, rand::random())
    }

    /// Creates a session with an explicit seed; the whole session's
    /// suggestion history replays identically for the same seed and
    /// command sequence.
    pub fn with_seed(catalog: Arc<dyn CatalogOracle>, session_seed: u64) -> Self {
        let team = Team::new(
            catalog.version(),
            Arc::clone(&catalog),
            PlannerConfig::DEFAULT_MAX_TEAM_SIZE,
        );
        Self {
            catalog,
            team,
            lower_tier: PlannerConfig::MIN_CHAMPION_TIER,
            upper_tier: PlannerConfig::MAX_CHAMPION_TIER,
            suggestion_enabled: true,
            session_seed,
            searches_run: 0,
            rng: PcgRng,
        }
    }

    /// Creates a session from a cached catalog data file.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::CatalogLoad`] when the file is unreadable or
    /// the catalog is corrupt.
    pub fn from_data_file(path: &Path) -> Result<Self> {
        let catalog = tft_content::CatalogLoader::load(path).map_err(RuntimeError::CatalogLoad)?;
        Ok(Self::new(Arc::new(catalog)))
    }

    /// Adds a champion by catalog name. Unknown names are no-ops.
    pub fn add_champion(&mut self, name: &str) -> bool {
        let Some(champion) = self.catalog.champion(name) else {
            debug!(target: "runtime::planner", champion = name, "unknown champion name ignored");
            return false;
        };
        self.team.add_champion(champion).added
    }

    /// Removes a champion by catalog name, symmetric to [`Planner::add_champion`].
    pub fn remove_champion(&mut self, name: &str) -> bool {
        let Some(champion) = self.catalog.champion(name) else {
            debug!(target: "runtime::planner", champion = name, "unknown champion name ignored");
            return false;
        };
        self.team.remove_champion(champion).removed
    }

    /// Adopts one champion out of the last suggestion into the live team.
    pub fn accept_suggested_champion(&mut self, name: &str) -> bool {
        self.add_champion(name)
    }

    /// Replaces the whole roster from positional slot names.
    ///
    /// Pre-validates the aggregate unit size of the resolvable names and
    /// rejects the sync outright (no mutation) when it exceeds capacity.
    /// Otherwise names are replayed through the add pipeline and the
    /// returned view preserves empty-slot markers positionally:
    /// - names a roster rule substituted are rewritten from roster order
    /// - an unresolvable name stays an empty marker occupying one unit
    /// - trailing markers are dropped when multi-unit champions overflow
    /// - the view is padded with markers up to capacity
    pub fn sync_roster(&mut self, slots: &[String]) -> Option<Vec<String>> {
        let max = self.team.max_team_size();
        let requested: u32 = slots
            .iter()
            .filter_map(|name| self.catalog.champion(name))
            .map(|champion| u32::from(champion.unit))
            .sum();
        if requested > max {
            debug!(target: "runtime::planner", requested, max, "roster sync exceeds capacity");
            return None;
        }

        self.team.reset_champions(false);

        let mut synced: Vec<String> = Vec::with_capacity(slots.len());
        let mut rule_applied = false;
        let mut occupied: u32 = 0;
        for name in slots {
            if let Some(champion) = self.catalog.champion(name) {
                let outcome = self.team.add_champion(champion);
                rule_applied |= outcome.special_rule_applied;
                if outcome.added {
                    occupied += u32::from(champion.unit);
                    synced.push(champion.name.clone());
                    continue;
                }
            }
            synced.push(EMPTY_SLOT.to_string());
            occupied += 1;
        }

        // A roster rule may have substituted entries: rewrite the occupied
        // slots from the authoritative roster order.
        if rule_applied {
            let names: Vec<String> = self
                .team
                .champions()
                .iter()
                .map(|champion| champion.name.clone())
                .collect();
            let mut roster_index = 0;
            for slot in synced.iter_mut() {
                if slot.is_empty() {
                    continue;
                }
                let Some(name) = names.get(roster_index) else {
                    break;
                };
                *slot = name.clone();
                roster_index += 1;
            }
        }

        if occupied > max {
            let mut overflow = occupied - max;
            for index in (0..synced.len()).rev() {
                if overflow == 0 {
                    break;
                }
                if synced[index].is_empty() {
                    synced.remove(index);
                    overflow -= 1;
                }
            }
        }
        if occupied < max {
            for _ in 0..(max - occupied) {
                synced.push(EMPTY_SLOT.to_string());
            }
        }

        Some(synced)
    }

    /// Full-replace of the emblem overlay; unknown trait names are skipped.
    pub fn set_emblems(&mut self, names: &[String]) {
        self.team.reset_emblems(false);
        for name in names {
            if let Some(trait_def) = self.catalog.trait_def(name) {
                self.team.add_emblem(Arc::clone(trait_def));
            } else {
                debug!(target: "runtime::planner", emblem = %name, "unknown trait name ignored");
            }
        }
    }

    /// Full-replace of the hextech heart overlay; unknown names are skipped.
    pub fn set_hextech_hearts(&mut self, names: &[String]) {
        self.team.reset_hextech_hearts(false);
        for name in names {
            if let Some(trait_def) = self.catalog.trait_def(name) {
                self.team.add_hextech_heart(Arc::clone(trait_def));
            } else {
                debug!(target: "runtime::planner", heart = %name, "unknown trait name ignored");
            }
        }
    }

    /// Updates the capacity cap without evicting champions.
    pub fn set_max_team_size(&mut self, max_team_size: u32) {
        self.team.set_max_team_size(max_team_size);
    }

    /// Constrains the suggestion pool to cost tiers `[lower, upper]`.
    /// Out-of-range or inverted bounds are rejected and the prior range
    /// stays in effect.
    pub fn set_tier_range(&mut self, lower: u8, upper: u8) -> bool {
        if lower < PlannerConfig::MIN_CHAMPION_TIER
            || upper > PlannerConfig::MAX_CHAMPION_TIER
            || lower > upper
        {
            debug!(target: "runtime::planner", lower, upper, "tier range rejected");
            return false;
        }
        self.lower_tier = lower;
        self.upper_tier = upper;
        true
    }

    pub fn set_suggestion_enabled(&mut self, enabled: bool) {
        self.suggestion_enabled = enabled;
    }

    /// The suggestion gate: a search is only meaningful once the roster has
    /// taken shape or the board is nearly full.
    pub fn suggestion_ready(&self) -> bool {
        self.team.champions().len() >= PlannerConfig::SUGGESTION_MIN_ROSTER
            || self.team.max_team_size().saturating_sub(self.team.team_size())
                <= PlannerConfig::SUGGESTION_MAX_REMAINING
    }

    /// Runs the suggestion search against the current team.
    ///
    /// Returns `None` while suggestions are toggled off or the gate is
    /// unmet. The snapshot describes the hypothetical team with the
    /// suggested champions appended; the live team is untouched.
    pub fn recompute_suggestion(&mut self) -> Option<SuggestionSnapshot> {
        if !self.suggestion_enabled || !self.suggestion_ready() {
            return None;
        }

        let mut search = CompSuggestion::from_team(&self.team);
        search.set_lower_tier(self.lower_tier);
        search.set_upper_tier(self.upper_tier);

        let seed = compute_seed(self.session_seed, self.searches_run, 0);
        self.searches_run += 1;
        let outcome = search.suggest(&self.rng, seed);
        debug!(
            target: "runtime::planner",
            suggested = outcome.champions.len(),
            score = outcome.score,
            "suggestion search finished"
        );

        let champions: Vec<String> = outcome
            .champions
            .iter()
            .map(|champion| champion.name.clone())
            .collect();
        let hypothetical = search.apply_suggestion(&outcome.champions);
        let trait_status = trait_status_entries(hypothetical);
        let emblems = emblem_statuses(hypothetical);

        Some(SuggestionSnapshot {
            champions,
            score: outcome.score,
            trait_status,
            emblems,
        })
    }

    /// Recomputes and returns the live team's presentation-ordered trait
    /// status.
    pub fn trait_status_snapshot(&mut self) -> Vec<TraitStatusEntry> {
        trait_status_entries(&mut self.team)
    }

    /// Emblem eligibility after the last recompute.
    pub fn emblem_snapshot(&self) -> Vec<EmblemStatus> {
        emblem_statuses(&self.team)
    }

    /// Heart names in overlay order.
    pub fn heart_snapshot(&self) -> Vec<String> {
        self.team
            .hextech_hearts()
            .iter()
            .map(|trait_def| trait_def.name.clone())
            .collect()
    }

    /// Current roster names in insertion order, no padding.
    pub fn roster_names(&self) -> Vec<String> {
        self.team
            .champions()
            .iter()
            .map(|champion| champion.name.clone())
            .collect()
    }

    pub fn team(&self) -> &Team {
        &self.team
    }
}
