//! Emblem carrier assignment.

use std::sync::Arc;

use super::EmblemRule;
use crate::config::PlannerConfig;
use crate::model::{Champion, TraitHandle};
use crate::team::Team;

/// Assigns each emblem to an eligible champion and records eligibility in
/// the emblem's active flag.
///
/// One slot is kept per champion: its native traits plus the emblems already
/// assigned to it, capped at three. Emblems are processed in list order; each
/// goes to the first slot that is under the cap and does not already have the
/// trait, and after every assignment the slots re-sort ascending by carried
/// count so later emblems drift toward the least-loaded champions. Assignment
/// is therefore order-dependent on the emblem list, by design of the
/// original mechanic.
///
/// Returns true when any emblem's active flag changed.
pub struct EmblemAssignmentRule;

struct Slot<'a> {
    champion: &'a Champion,
    carried: Vec<TraitHandle>,
}

impl EmblemRule for EmblemAssignmentRule {
    fn name(&self) -> &'static str {
        "emblem_assignment"
    }

    fn apply(&self, team: &mut Team) -> bool {
        let (roster, emblems) = team.roster_and_emblems_mut();

        let mut slots: Vec<Slot<'_>> = roster
            .iter()
            .map(|champion| Slot {
                champion,
                carried: Vec::new(),
            })
            .collect();

        let mut applied = false;
        for emblem in emblems.iter_mut() {
            let handle = TraitHandle(Arc::clone(&emblem.trait_def));
            let mut assigned = false;
            for slot in slots.iter_mut() {
                if slot.carried.len() >= PlannerConfig::MAX_EMBLEMS_PER_CHAMPION
                    || slot.champion.carries(handle.def())
                    || slot.carried.contains(&handle)
                {
                    continue;
                }
                slot.carried.push(handle.clone());
                assigned = true;
                break;
            }
            // Stable sort keeps roster order among equally-loaded slots.
            slots.sort_by_key(|slot| slot.carried.len());

            if emblem.active != assigned {
                emblem.active = assigned;
                applied = true;
            }
        }
        applied
    }
}
