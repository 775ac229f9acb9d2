//! Runtime orchestration for planning sessions.
//!
//! This crate wires the core engine to its external collaborators: a
//! [`Planner`] owns one live team, accepts the name-based commands a shell
//! transport delivers, and produces the presentation-ordered snapshots the
//! shell renders. Everything is synchronous and single-owner by design —
//! hosts that want threads serialize access to one planner.
//!
//! Modules are organized by responsibility:
//! - [`planner`] hosts the session controller
//! - [`snapshot`] exposes the types downstream clients consume
//! - [`error`] carries the few hard failures (catalog acquisition)

pub mod error;
pub mod planner;
pub mod snapshot;

pub use error::{Result, RuntimeError};
pub use planner::Planner;
pub use snapshot::{EmblemStatus, SuggestionSnapshot, TraitStatusEntry};
