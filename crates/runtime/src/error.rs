//! Errors surfaced by the runtime API.
//!
//! Only catalog acquisition can fail hard; every planner operation reports
//! soft failures through its return value instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to load catalog data")]
    CatalogLoad(#[source] anyhow::Error),
}
