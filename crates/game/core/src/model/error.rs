//! Catalog construction errors.
//!
//! These are the only fatal errors in the core: they signal a corrupt
//! catalog source and abort loading the offending entity. Roster mutations
//! never produce them; those report soft failures through outcome structs.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error(
        "trait '{trait_name}' has mismatched activation columns: \
         {member_counts} thresholds, {tiers} tiers, {effects} effects"
    )]
    ActivationColumnsMismatch {
        trait_name: String,
        member_counts: usize,
        tiers: usize,
        effects: usize,
    },

    #[error("trait '{trait_name}' activations must be strictly ascending by member count")]
    UnsortedActivations { trait_name: String },

    #[error("champion '{champion_name}' references unknown trait '{trait_name}'")]
    UnknownTrait {
        champion_name: String,
        trait_name: String,
    },
}
