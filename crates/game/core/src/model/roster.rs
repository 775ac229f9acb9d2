//! Insertion-ordered champion collection with identity-keyed operations.

use super::champion::{Champion, ChampionKey};

/// Ordered roster whose membership, lookup, and replacement operations key
/// on [`ChampionKey`] value equality.
///
/// Composition over a plain `Vec` replaces the reference-identity containers
/// a garbage-collected implementation would reach for: every operation that
/// asks "is this champion here?" compares `(name, tier)` keys, never
/// addresses.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    entries: Vec<Champion>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Champion> {
        self.entries.iter()
    }

    pub fn contains(&self, key: ChampionKey<'_>) -> bool {
        self.position(key).is_some()
    }

    /// Index of the first entry matching `key`.
    pub fn position(&self, key: ChampionKey<'_>) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == key)
    }

    /// Appends without a uniqueness check; callers enforce identity
    /// uniqueness before inserting.
    pub fn push(&mut self, champion: Champion) {
        self.entries.push(champion);
    }

    /// Removes the first entry matching `key`. Returns whether one existed.
    pub fn remove(&mut self, key: ChampionKey<'_>) -> bool {
        match self.position(key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces entries matching `key` with `replacement`, preserving their
    /// positions. Returns whether any entry was replaced.
    pub fn replace(&mut self, key: ChampionKey<'_>, replacement: &Champion, replace_all: bool) -> bool {
        let mut replaced = false;
        for entry in &mut self.entries {
            if entry.key() == key {
                *entry = replacement.clone();
                replaced = true;
                if !replace_all {
                    break;
                }
            }
        }
        replaced
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Champion;
    type IntoIter = std::slice::Iter<'a, Champion>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
