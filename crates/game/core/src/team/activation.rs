//! Trait activation tier computation.
//!
//! This is a full recompute with no incremental path: callers re-invoke it
//! after every mutation that can affect trait counts. Cost is
//! O(roster size × average traits per champion).

use std::sync::Arc;

use indexmap::IndexMap;

use super::{ActivationStatus, Emblem};
use crate::model::{Roster, TraitDef, TraitHandle};

/// Computes, per trait, the occurrence count and the highest unlocked rung.
///
/// Occurrences: one per trait a rostered champion carries, one per emblem
/// currently marked active, one per hextech heart. Traits with zero
/// occurrences never appear in the result. Entry order is first-occurrence
/// order, which keeps downstream snapshots stable.
pub fn compute_trait_status(
    roster: &Roster,
    emblems: &[Emblem],
    hearts: &[Arc<TraitDef>],
) -> IndexMap<TraitHandle, ActivationStatus> {
    let mut status: IndexMap<TraitHandle, ActivationStatus> = IndexMap::new();

    for champion in roster {
        for trait_def in &champion.traits {
            bump(&mut status, trait_def);
        }
    }

    for emblem in emblems.iter().filter(|emblem| emblem.active) {
        bump(&mut status, &emblem.trait_def);
    }

    for heart in hearts {
        bump(&mut status, heart);
    }

    for (handle, entry) in status.iter_mut() {
        entry.activation = handle
            .def()
            .select_activation(entry.member_count)
            .cloned();
    }

    status
}

fn bump(status: &mut IndexMap<TraitHandle, ActivationStatus>, trait_def: &Arc<TraitDef>) {
    status
        .entry(TraitHandle(Arc::clone(trait_def)))
        .or_default()
        .member_count += 1;
}
