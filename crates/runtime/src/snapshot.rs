//! Presentation-ordered snapshot types.
//!
//! Snapshots are what the (out-of-scope) shell renders: plain names and
//! flags, serializable, detached from catalog references.

use std::cmp::Ordering;

use serde::Serialize;
use tft_core::{Activation, Team};

/// One trait's status line: occurrence count plus the unlocked rung, if any.
#[derive(Clone, Debug, Serialize)]
pub struct TraitStatusEntry {
    pub name: String,
    pub member_count: u32,
    pub activation: Option<Activation>,
}

/// Emblem name with its current carrier eligibility.
#[derive(Clone, Debug, Serialize)]
pub struct EmblemStatus {
    pub trait_name: String,
    pub active: bool,
}

/// Result of a suggestion search, ready for display.
#[derive(Clone, Debug, Serialize)]
pub struct SuggestionSnapshot {
    /// Suggested champion names in draw order.
    pub champions: Vec<String>,
    /// Synergy score of the hypothetical comp.
    pub score: f64,
    /// Trait status of the hypothetical team, presentation-ordered.
    pub trait_status: Vec<TraitStatusEntry>,
    /// Emblem eligibility within the hypothetical team.
    pub emblems: Vec<EmblemStatus>,
}

/// Recomputes `team`'s activation snapshot and returns it presentation-
/// ordered: activated traits first, descending tier rank, then descending
/// member count; unactivated traits sort last.
pub fn trait_status_entries(team: &mut Team) -> Vec<TraitStatusEntry> {
    team.calculate_trait_status();

    let mut entries: Vec<TraitStatusEntry> = team
        .trait_status()
        .iter()
        .map(|(handle, status)| TraitStatusEntry {
            name: handle.def().name.clone(),
            member_count: status.member_count,
            activation: status.activation.clone(),
        })
        .collect();

    entries.sort_by(|a, b| match (&a.activation, &b.activation) {
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) if x.tier != y.tier => y.tier.cmp(&x.tier),
        _ => b.member_count.cmp(&a.member_count),
    });
    entries
}

/// Emblem eligibility pairs in overlay order.
pub fn emblem_statuses(team: &Team) -> Vec<EmblemStatus> {
    team.emblems()
        .iter()
        .map(|emblem| EmblemStatus {
            trait_name: emblem.trait_def.name.clone(),
            active: emblem.active,
        })
        .collect()
}
