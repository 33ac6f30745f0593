//! PatternStore: the set of unique letters a network is trained on.

use crate::error::{HopnetError, Result};
use crate::pattern::Pattern;
use serde::{Deserialize, Serialize};
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;

/// Capacity used by the letter-recognition front end.
pub const DEFAULT_LIBRARY_CAPACITY: usize = 3;

// =============================================================================
// PatternStore
// =============================================================================

/// An unordered collection of unique patterns.
///
/// Uniqueness is by value: adding a pattern equal to one already stored has
/// no effect. The store imposes no size limit unless built with
/// [`PatternStore::bounded`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStore")]
pub struct PatternStore {
    patterns: HashSet<Pattern>,
    capacity: Option<usize>,
}

impl PatternStore {
    /// Create a new, empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty store that holds at most `capacity` patterns.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            patterns: HashSet::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Add a pattern.
    ///
    /// Returns `Ok(true)` if it was newly inserted and `Ok(false)` if an
    /// equal pattern was already present. A new pattern offered to a full
    /// bounded store fails with [`HopnetError::StoreFull`].
    pub fn add(&mut self, pattern: Pattern) -> Result<bool> {
        if self.patterns.contains(&pattern) {
            return Ok(false);
        }
        if let Some(capacity) = self.capacity {
            if self.patterns.len() >= capacity {
                log::warn!("pattern store full ({} patterns), rejecting add", capacity);
                return Err(HopnetError::StoreFull { capacity });
            }
        }
        Ok(self.patterns.insert(pattern))
    }

    /// Remove every pattern. The capacity bound, if any, is kept.
    pub fn clear(&mut self) {
        self.patterns.clear();
    }

    /// Replace the contents wholesale.
    ///
    /// Duplicates in `patterns` collapse. Fails without modifying the store
    /// if the result would exceed the capacity bound.
    pub fn replace_all<I>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator<Item = Pattern>,
    {
        let patterns: HashSet<Pattern> = patterns.into_iter().collect();
        if let Some(capacity) = self.capacity {
            if patterns.len() > capacity {
                return Err(HopnetError::StoreFull { capacity });
            }
        }
        self.patterns = patterns;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// `Some(n)` for a bounded store.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// True once a bounded store holds `capacity` patterns. Never true if unbounded.
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|c| self.patterns.len() >= c)
    }

    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.patterns.contains(pattern)
    }

    /// Iterate the stored patterns in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON string, re-validating every pattern.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a PatternStore {
    type Item = &'a Pattern;
    type IntoIter = hash_set::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

impl FromIterator<Pattern> for PatternStore {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
            capacity: None,
        }
    }
}

/// Each pattern's grid followed by a blank line.
impl fmt::Display for PatternStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pattern in &self.patterns {
            writeln!(f, "{}", pattern)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawStore {
    patterns: HashSet<Pattern>,
    capacity: Option<usize>,
}

impl TryFrom<RawStore> for PatternStore {
    type Error = HopnetError;

    fn try_from(raw: RawStore) -> Result<Self> {
        if let Some(capacity) = raw.capacity {
            if raw.patterns.len() > capacity {
                return Err(HopnetError::StoreFull { capacity });
            }
        }
        Ok(Self {
            patterns: raw.patterns,
            capacity: raw.capacity,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
