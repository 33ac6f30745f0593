//! Convenience wrapper that owns a letter library and a Hopfield network.
//!
//! For full control, import from [`memory`](crate::memory) directly.

use crate::error::{HopnetError, Result};
use crate::memory::{
    AssociativeMemory, PatternStore, Recall, RecallConfig, DEFAULT_LIBRARY_CAPACITY,
};
use crate::pattern::Pattern;

/// Letter recognizer over a small bounded library.
///
/// `Recognizer` keeps the letters a user has drawn and retrains the network
/// from them before every recognition, so the weights always reflect the
/// current library.
///
/// # Example
///
/// ```rust
/// use hopnet::highlevel::Recognizer;
/// use hopnet::Pattern;
///
/// let t: Pattern = "
///     ## # # # #
///     . . # . .
///     . . # . .
///     . . # . .
///     . . # . .
/// ".parse().unwrap();
///
/// let mut recognizer = Recognizer::new();
/// recognizer.add_letter(t.clone()).unwrap();
///
/// let recall = recognizer.recognize(&t.corrupted(2, 11)).unwrap();
/// assert_eq!(recall.pattern(), Some(&t));
/// ```
#[derive(Clone, Debug)]
pub struct Recognizer {
    library: PatternStore,
    memory: AssociativeMemory,
}

impl Recognizer {
    /// Create a recognizer holding up to [`DEFAULT_LIBRARY_CAPACITY`] letters.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LIBRARY_CAPACITY)
    }

    /// Create a recognizer holding up to `capacity` letters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            library: PatternStore::bounded(capacity),
            memory: AssociativeMemory::new(),
        }
    }

    /// Override the recall settings.
    pub fn with_config(mut self, config: RecallConfig) -> Self {
        self.memory = AssociativeMemory::with_config(config);
        self
    }

    /// Add a drawn letter to the library.
    ///
    /// The empty sentinel is rejected; a duplicate returns `Ok(false)`.
    pub fn add_letter(&mut self, letter: Pattern) -> Result<bool> {
        if letter.is_empty() {
            return Err(HopnetError::Validation(
                "cannot add an empty letter to the library".to_string(),
            ));
        }
        self.library.add(letter)
    }

    /// Retrain on the current library, then recall `query`.
    pub fn recognize(&mut self, query: &Pattern) -> Result<Recall> {
        self.memory.train(&self.library)?;
        self.memory.recall(query)
    }

    /// Slots left before the library is full.
    pub fn free_slots(&self) -> usize {
        self.library
            .capacity()
            .map_or(usize::MAX, |c| c.saturating_sub(self.library.len()))
    }

    /// Forget every letter.
    pub fn clear(&mut self) {
        self.library.clear();
    }

    pub fn library(&self) -> &PatternStore {
        &self.library
    }

    pub fn memory(&self) -> &AssociativeMemory {
        &self.memory
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}
