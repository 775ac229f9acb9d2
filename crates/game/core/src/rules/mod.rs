//! Version-gated special rules invoked at team lifecycle points.
//!
//! Game balance eras ship exceptions that do not fit the general activation
//! model. Each exception is an independent rule registered at one of four
//! extension points; the team orchestration never branches on versions
//! itself. New exceptions are added by appending a rule to the relevant
//! list, and every rule checks its own applicability window against the
//! team's set version.
//!
//! Extension points, in lifecycle order:
//! - [`AddRule`]: before a champion is admitted; any veto blocks the add
//! - [`RosterRule`]: after a structural roster change; may substitute entries
//! - [`EmblemRule`]: before an activation recompute; reassigns emblem carriers
//! - [`TraitRule`]: after an activation recompute; may null activations

mod akali;
mod emblem;
mod ninja;
mod registry;

pub use akali::{AkaliVariantAddRule, AkaliVariantRule};
pub use emblem::EmblemAssignmentRule;
pub use ninja::NinjaExactCountRule;
pub use registry::RuleSet;

use crate::model::Champion;
use crate::team::Team;

/// Veto hook run before a champion is admitted to the roster.
pub trait AddRule: Send + Sync {
    /// Rule name used in logging.
    fn name(&self) -> &'static str;

    /// Returns true to block the pending add.
    fn veto(&self, team: &Team, candidate: &Champion) -> bool;
}

/// Hook run after a structural roster change succeeds.
pub trait RosterRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns true when the rule changed the roster.
    fn apply(&self, team: &mut Team) -> bool;
}

/// Hook run after the activation snapshot is rebuilt.
pub trait TraitRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns true when the rule adjusted the snapshot.
    fn apply(&self, team: &mut Team) -> bool;
}

/// Hook run before the activation snapshot is rebuilt.
pub trait EmblemRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns true when any emblem's eligibility changed.
    fn apply(&self, team: &mut Team) -> bool;
}
