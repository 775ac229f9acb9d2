//! Trait definitions and their activation ladders.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::error::CatalogError;

/// Power tier unlocked by a trait activation.
///
/// Ordered by strength: Bronze < Silver < Gold < Prismatic. The derived
/// `Ord` is what presentation layers sort by.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivationTier {
    Bronze,
    Silver,
    Gold,
    Prismatic,
}

impl ActivationTier {
    /// Scoring multiplier applied per synergy member when a comp is evaluated.
    pub fn power_factor(self) -> f64 {
        match self {
            ActivationTier::Bronze => 1.0,
            ActivationTier::Silver => 1.25,
            ActivationTier::Gold => 1.5,
            ActivationTier::Prismatic => 2.0,
        }
    }
}

/// One rung of a trait's activation ladder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activation {
    /// Number of trait members required to unlock this rung.
    pub member_count: u32,
    pub tier: ActivationTier,
    /// In-game effect text shown to the player.
    pub effect: String,
}

impl Activation {
    pub fn new(member_count: u32, tier: ActivationTier, effect: impl Into<String>) -> Self {
        Self {
            member_count,
            tier,
            effect: effect.into(),
        }
    }
}

/// A synergy category that activates at member-count thresholds.
///
/// Trait definitions are immutable catalog values shared behind `Arc`;
/// identity is the `(name, description)` pair, never the allocation.
///
/// # Invariants
///
/// - `activations` is strictly ascending by `member_count`, which also rules
///   out two value-identical rungs. Violations are catalog corruption and
///   fail construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraitDef {
    pub name: String,
    pub description: String,
    pub image: String,
    activations: Vec<Activation>,
}

impl TraitDef {
    /// Creates a trait definition, validating the activation ladder.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnsortedActivations`] when the rungs are not
    /// strictly ascending by member count.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        activations: Vec<Activation>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if !activations
            .windows(2)
            .all(|pair| pair[0].member_count < pair[1].member_count)
        {
            return Err(CatalogError::UnsortedActivations { trait_name: name });
        }
        Ok(Self {
            name,
            description: description.into(),
            image: image.into(),
            activations,
        })
    }

    /// Creates a trait definition from parallel threshold/tier/effect columns.
    ///
    /// This is the shape columnar catalog sources produce. The three columns
    /// must be the same length; a mismatch means the catalog entry is corrupt
    /// and the whole entity is rejected rather than truncated.
    pub fn from_columns(
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        member_counts: Vec<u32>,
        tiers: Vec<ActivationTier>,
        effects: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if member_counts.len() != tiers.len() || member_counts.len() != effects.len() {
            return Err(CatalogError::ActivationColumnsMismatch {
                trait_name: name,
                member_counts: member_counts.len(),
                tiers: tiers.len(),
                effects: effects.len(),
            });
        }
        let activations = member_counts
            .into_iter()
            .zip(tiers)
            .zip(effects)
            .map(|((member_count, tier), effect)| Activation {
                member_count,
                tier,
                effect,
            })
            .collect();
        Self::new(name, description, image, activations)
    }

    /// Value-identity key: `(name, description)`.
    pub fn key(&self) -> TraitKey<'_> {
        TraitKey {
            name: &self.name,
            description: &self.description,
        }
    }

    /// Activation ladder, ascending by member count.
    pub fn activations(&self) -> &[Activation] {
        &self.activations
    }

    /// A trait carried by exactly one champion: a single rung at threshold 1.
    pub fn is_unique(&self) -> bool {
        self.activations.len() == 1 && self.activations[0].member_count == 1
    }

    /// Highest rung whose threshold is met by `member_count`, or `None` when
    /// not even the lowest threshold is reached.
    pub fn select_activation(&self, member_count: u32) -> Option<&Activation> {
        self.activations
            .iter()
            .take_while(|activation| activation.member_count <= member_count)
            .last()
    }

    /// Rung immediately above `current`, or `None` at the top of the ladder.
    ///
    /// `current` is located by full value match; load-time validation
    /// guarantees no two rungs compare equal, so the lookup is unambiguous.
    pub fn next_activation(&self, current: &Activation) -> Option<&Activation> {
        let index = self
            .activations
            .iter()
            .position(|activation| activation == current)?;
        self.activations.get(index + 1)
    }
}

/// Borrowed value-identity key for a trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TraitKey<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// Shared trait definition usable as a value-equality map key.
///
/// Wraps the `Arc` so hashing and comparison go through [`TraitDef::key`]
/// instead of pointer identity, letting status maps key on the trait itself
/// while still carrying the full definition.
#[derive(Clone, Debug)]
pub struct TraitHandle(pub Arc<TraitDef>);

impl TraitHandle {
    pub fn def(&self) -> &TraitDef {
        &self.0
    }
}

impl From<Arc<TraitDef>> for TraitHandle {
    fn from(def: Arc<TraitDef>) -> Self {
        Self(def)
    }
}

impl PartialEq for TraitHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.key() == other.0.key()
    }
}

impl Eq for TraitHandle {}

impl Hash for TraitHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with the derived Hash on TraitKey.
        self.0.name.as_str().hash(state);
        self.0.description.as_str().hash(state);
    }
}

impl indexmap::Equivalent<TraitHandle> for TraitKey<'_> {
    fn equivalent(&self, key: &TraitHandle) -> bool {
        *self == key.0.key()
    }
}
