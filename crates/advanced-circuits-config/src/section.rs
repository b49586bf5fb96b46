// advanced-circuits-config/src/section.rs
// ============================================================================
// Module: Profile-Keyed Sections
// Description: Closed mappings from a key enum to one sub-config instance.
// Purpose: Duplicate-safe keyed collections for document sections.
// Dependencies: none
// ============================================================================

//! ## Overview
//! A [`ProfileSection`] maps a finite key enum to one sub-config instance.
//! Sections built "with defaults" start from an explicit entry; sections
//! built from a document start empty and are populated strictly from the
//! entries present. Insertion never silently overwrites: a duplicate key is
//! a format error naming the section tag and the offending key token.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::config::ConfigError;

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Key types usable in a profile-keyed section.
pub trait SectionKey: Copy + Ord {
    /// Returns the stable document token for the key.
    fn token(self) -> &'static str;
}

// ============================================================================
// SECTION: Section Type
// ============================================================================

/// Closed mapping from a section key to one sub-config instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSection<K: SectionKey, C> {
    /// Document tag of the section, used in duplicate-key errors.
    tag: &'static str,
    /// Keyed entries in deterministic order.
    entries: BTreeMap<K, C>,
}

impl<K: SectionKey, C> ProfileSection<K, C> {
    /// Creates an empty section for the given document tag.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            entries: BTreeMap::new(),
        }
    }

    /// Creates a section pre-populated with one entry.
    #[must_use]
    pub fn with_entry(tag: &'static str, key: K, config: C) -> Self {
        let mut section = Self::new(tag);
        section.entries.insert(key, config);
        section
    }

    /// Inserts an entry, rejecting duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Format`] when the key is already present.
    pub fn insert(&mut self, key: K, config: C) -> Result<(), ConfigError> {
        match self.entries.entry(key) {
            Entry::Occupied(_) => Err(ConfigError::Format(format!(
                "duplicate {} entry for key {}",
                self.tag,
                key.token()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(config);
                Ok(())
            }
        }
    }

    /// Returns the entry for a key, if present.
    #[must_use]
    pub fn get(&self, key: K) -> Option<&C> {
        self.entries.get(&key)
    }

    /// Returns true when the key has an entry.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.entries.contains_key(&key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the section has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &C)> {
        self.entries.iter().map(|(key, config)| (*key, config))
    }
}
