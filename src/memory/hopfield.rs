//! Discrete Hopfield associative memory.
//!
//! Training builds a weight matrix from the outer products of the stored
//! patterns (Hebbian rule), normalized by the neuron count and with
//! self-connections removed:
//!
//! ```text
//! W = (1/N) * Σ_p pᵀp,   W[i][i] = 0
//! ```
//!
//! Recall applies the synchronous update `s ← sign(W s)` to the whole state
//! at once and stops as soon as the state equals one of the trained patterns.
//! A state that settles on anything else keeps iterating until the cap, so a
//! spurious fixed point is reported as [`Recall::NotFound`].
//!
//! # Example
//!
//! ```rust
//! use hopnet::{AssociativeMemory, Pattern, PatternStore};
//!
//! let bar: Pattern = "
//!     . . # . .
//!     . . # . .
//!     . . # . .
//!     . . # . .
//!     . . # . .
//! ".parse().unwrap();
//!
//! let mut store = PatternStore::new();
//! store.add(bar.clone()).unwrap();
//!
//! let mut memory = AssociativeMemory::new();
//! memory.train(&store).unwrap();
//!
//! let noisy = bar.corrupted(2, 7);
//! let recalled = memory.recall(&noisy).unwrap();
//! assert_eq!(recalled.pattern(), Some(&bar));
//! ```

use super::store::PatternStore;
use crate::error::{HopnetError, Result};
use crate::matrix::Matrix;
use crate::pattern::{Pattern, PATTERN_SIZE};
use serde::{Deserialize, Serialize};

/// Default cap on synchronous update steps during recall.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

// =============================================================================
// Configuration and results
// =============================================================================

/// Recall settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallConfig {
    /// Maximum number of update steps before giving up
    pub max_iterations: usize,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Outcome of a recall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recall {
    /// The state matched a trained pattern after `iterations` update steps.
    Found { pattern: Pattern, iterations: usize },
    /// No trained pattern was reached within `iterations` steps.
    NotFound { iterations: usize },
}

impl Recall {
    pub fn is_found(&self) -> bool {
        matches!(self, Recall::Found { .. })
    }

    /// The recalled pattern, if any.
    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            Recall::Found { pattern, .. } => Some(pattern),
            Recall::NotFound { .. } => None,
        }
    }

    pub fn into_pattern(self) -> Option<Pattern> {
        match self {
            Recall::Found { pattern, .. } => Some(pattern),
            Recall::NotFound { .. } => None,
        }
    }

    /// Update steps performed.
    pub fn iterations(&self) -> usize {
        match self {
            Recall::Found { iterations, .. } | Recall::NotFound { iterations } => *iterations,
        }
    }
}

// =============================================================================
// AssociativeMemory
// =============================================================================

/// A Hopfield network over [`PATTERN_SIZE`] neurons.
///
/// The engine owns its weights and a snapshot of the library it was last
/// trained on; the [`PatternStore`] itself stays with the caller. Calls are
/// synchronous, so share an instance behind a lock if several threads need it.
#[derive(Clone, Debug)]
pub struct AssociativeMemory {
    weights: Matrix,
    /// Column-vector forms of the trained patterns
    library: Vec<(Pattern, Matrix)>,
    config: RecallConfig,
}

impl AssociativeMemory {
    /// Create an untrained network with all-zero weights.
    pub fn new() -> Self {
        Self::with_config(RecallConfig::default())
    }

    pub fn with_config(config: RecallConfig) -> Self {
        Self {
            weights: Matrix::zeros(PATTERN_SIZE, PATTERN_SIZE),
            library: Vec::new(),
            config,
        }
    }

    /// The `N x N` weight matrix.
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn config(&self) -> RecallConfig {
        self.config
    }

    /// Number of patterns in the last training set.
    pub fn trained_len(&self) -> usize {
        self.library.len()
    }

    /// Recompute the weights from scratch using every pattern in `store`.
    ///
    /// An empty store leaves the weights all-zero.
    pub fn train(&mut self, store: &PatternStore) -> Result<()> {
        let mut weights = Matrix::zeros(PATTERN_SIZE, PATTERN_SIZE);
        let mut library = Vec::with_capacity(store.len());

        for pattern in store {
            let row = Matrix::row_vector(&pattern.to_f64());
            let column = row.transpose();
            weights = weights.add(&column.multiply(&row)?)?;
            library.push((pattern.clone(), column));
        }

        if !library.is_empty() {
            weights = weights
                .scale(1.0 / PATTERN_SIZE as f64)
                .fill_diagonal(0.0);
        }

        log::debug!("trained on {} patterns", library.len());

        self.weights = weights;
        self.library = library;
        Ok(())
    }

    /// Recall using the configured iteration cap.
    pub fn recall(&self, query: &Pattern) -> Result<Recall> {
        self.recall_with(query, self.config.max_iterations)
    }

    /// Recall with an explicit iteration cap.
    ///
    /// `Err` is only possible on an internal shape error; failing to converge
    /// is the ordinary [`Recall::NotFound`] outcome.
    pub fn recall_with(&self, query: &Pattern, max_iterations: usize) -> Result<Recall> {
        if query.len() != PATTERN_SIZE {
            return Err(HopnetError::shape_mismatch(
                (PATTERN_SIZE, 1),
                (query.len(), 1),
            ));
        }

        let mut state = Matrix::row_vector(&query.to_f64()).transpose();

        for step in 1..=max_iterations {
            let candidate = self.weights.multiply(&state)?.sign();

            if let Some((pattern, _)) = self
                .library
                .iter()
                .find(|(_, column)| *column == candidate)
            {
                log::debug!("recall matched a trained pattern at iteration {}", step);
                return Ok(Recall::Found {
                    pattern: pattern.clone(),
                    iterations: step,
                });
            }

            state = candidate;
        }

        log::debug!(
            "recall found no trained pattern within {} iterations",
            max_iterations
        );
        Ok(Recall::NotFound {
            iterations: max_iterations,
        })
    }

    /// Hopfield energy `-1/2 Σ_ij w_ij s_i s_j` of a state under the current weights.
    ///
    /// Lower is more stable.
    pub fn energy(&self, state: &Pattern) -> f64 {
        let s = state.to_f64();
        let mut sum = 0.0;
        for (i, &si) in s.iter().enumerate() {
            for (j, &sj) in s.iter().enumerate() {
                sum += self.weights[(i, j)] * si * sj;
            }
        }
        -0.5 * sum
    }
}

impl Default for AssociativeMemory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn all_on() -> Pattern {
        Pattern::new(&[1.0; PATTERN_SIZE]).unwrap()
    }

    fn checkerboard() -> Pattern {
        let values: Vec<f64> = (0..PATTERN_SIZE)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        Pattern::new(&values).unwrap()
    }

    fn letter_t() -> Pattern {
        "
        # # # # #
        . . # . .
        . . # . .
        . . # . .
        . . # . .
        "
        .parse()
        .unwrap()
    }

    fn store_of(patterns: &[Pattern]) -> PatternStore {
        patterns.iter().cloned().collect()
    }

    #[test]
    fn test_new_is_zero() {
        let memory = AssociativeMemory::new();
        assert_eq!(memory.weights().shape(), (PATTERN_SIZE, PATTERN_SIZE));
        assert!(memory.weights().as_slice().iter().all(|&w| w == 0.0));
        assert_eq!(memory.config().max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_train_empty_store_is_noop() {
        let mut memory = AssociativeMemory::new();
        memory.train(&PatternStore::new()).unwrap();
        assert!(memory.weights().as_slice().iter().all(|&w| w == 0.0));
        assert_eq!(memory.trained_len(), 0);

        let result = memory.recall(&letter_t()).unwrap();
        assert_eq!(result, Recall::NotFound { iterations: 100 });
    }

    #[test]
    fn test_weights_symmetric_with_zero_diagonal() {
        let mut memory = AssociativeMemory::new();
        memory
            .train(&store_of(&[letter_t(), checkerboard()]))
            .unwrap();

        let w = memory.weights();
        for i in 0..PATTERN_SIZE {
            assert_eq!(w[(i, i)], 0.0);
        }
        assert!(w.is_symmetric());
    }

    #[test]
    fn test_single_pattern_weights() {
        let t = letter_t();
        let mut memory = AssociativeMemory::new();
        memory.train(&store_of(&[t.clone()])).unwrap();

        let s = t.to_f64();
        let w = memory.weights();
        assert_eq!(w[(0, 1)], s[0] * s[1] / PATTERN_SIZE as f64);
        assert_eq!(w[(0, 5)], s[0] * s[5] / PATTERN_SIZE as f64);
    }

    #[test]
    fn test_train_is_a_full_recompute() {
        let store = store_of(&[letter_t(), checkerboard()]);
        let mut memory = AssociativeMemory::new();
        memory.train(&store).unwrap();
        let first = memory.weights().clone();

        memory.train(&store).unwrap();
        assert_eq!(memory.weights(), &first);

        memory.train(&PatternStore::new()).unwrap();
        assert!(memory.weights().as_slice().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_single_pattern_round_trip() {
        let t = letter_t();
        let mut memory = AssociativeMemory::new();
        memory.train(&store_of(&[t.clone()])).unwrap();

        // W t = (24/25) t, which the inverted sign maps to -t; one more step returns t
        let result = memory.recall(&t).unwrap();
        assert_eq!(
            result,
            Recall::Found {
                pattern: t,
                iterations: 2
            }
        );
    }

    #[test]
    fn test_two_letter_library() {
        let l1 = all_on();
        let l2 = checkerboard();
        let mut memory = AssociativeMemory::new();
        memory.train(&store_of(&[l1.clone(), l2.clone()])).unwrap();

        assert_eq!(memory.recall(&l1).unwrap().into_pattern(), Some(l1.clone()));
        assert_eq!(memory.recall(&l2).unwrap().into_pattern(), Some(l2));
    }

    #[test]
    fn test_one_cell_noise_recovers() {
        let l1 = all_on();
        let mut memory = AssociativeMemory::new();
        memory
            .train(&store_of(&[l1.clone(), checkerboard()]))
            .unwrap();

        for cell in 0..PATTERN_SIZE {
            let mut values = l1.to_f64();
            values[cell] = -1.0;
            let noisy = Pattern::new(&values).unwrap();

            let result = memory.recall(&noisy).unwrap();
            assert!(result.iterations() <= DEFAULT_MAX_ITERATIONS);
            assert_eq!(result.pattern(), Some(&l1), "cell {} did not recover", cell);
        }
    }

    #[test]
    fn test_zero_iterations_never_recalls() {
        let t = letter_t();
        let mut memory = AssociativeMemory::new();
        memory.train(&store_of(&[t.clone()])).unwrap();

        let result = memory.recall_with(&t, 0).unwrap();
        assert_eq!(result, Recall::NotFound { iterations: 0 });
        assert!(!result.is_found());
        assert_eq!(result.pattern(), None);
    }

    #[test]
    fn test_untrained_candidate_is_all_plus_one() {
        // zero weights give an all +1 candidate, which only an all-on letter matches
        let mut memory = AssociativeMemory::new();
        memory.train(&store_of(&[all_on()])).unwrap();
        let untrained = AssociativeMemory::new();
        assert!(!untrained.recall(&letter_t()).unwrap().is_found());

        let mut zeroed = memory.clone();
        zeroed.weights = Matrix::zeros(PATTERN_SIZE, PATTERN_SIZE);
        let result = zeroed.recall(&letter_t()).unwrap();
        assert_eq!(
            result,
            Recall::Found {
                pattern: all_on(),
                iterations: 1
            }
        );
    }

    #[test]
    fn test_custom_iteration_cap() {
        let memory = AssociativeMemory::with_config(RecallConfig { max_iterations: 7 });
        assert_eq!(
            memory.recall(&letter_t()).unwrap(),
            Recall::NotFound { iterations: 7 }
        );
    }

    #[test]
    fn test_energy_lower_at_stored_pattern() {
        let t = letter_t();
        let mut memory = AssociativeMemory::new();
        memory.train(&store_of(&[t.clone()])).unwrap();

        let stored = memory.energy(&t);
        let noisy = memory.energy(&t.corrupted(5, 3));
        assert!(stored < noisy, "{} should be below {}", stored, noisy);
        assert_eq!(AssociativeMemory::new().energy(&t), 0.0);
    }

    #[test]
    fn test_config_serde() {
        let cfg: RecallConfig = serde_json::from_str(r#"{"max_iterations": 12}"#).unwrap();
        assert_eq!(cfg.max_iterations, 12);
    }
}
