//! # hopnet: Hopfield associative memory for letter grids
//!
//! hopnet stores a handful of 5x5 binary "letters" and, given a noisy or
//! partial drawing, recovers the closest stored letter by iterating a
//! discrete Hopfield network until it lands on one of them.
//!
//! ## Quick Start
//!
//! ```rust
//! use hopnet::{AssociativeMemory, Pattern, PatternStore, Recall};
//!
//! let l: Pattern = "
//!     ## . . . .
//!     ## . . . .
//!     ## . . . .
//!     ## . . . .
//!     ## # # # #
//! ".parse()?;
//!
//! let mut library = PatternStore::new();
//! library.add(l.clone())?;
//!
//! let mut memory = AssociativeMemory::new();
//! memory.train(&library)?;
//!
//! match memory.recall(&l.corrupted(3, 42))? {
//!     Recall::Found { pattern, .. } => assert_eq!(pattern, l),
//!     Recall::NotFound { .. } => unreachable!(),
//! }
//! # Ok::<(), hopnet::HopnetError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Pattern**: a 25-cell grid with values in {-1, +1}; all zeros means "unset"
//! - **PatternStore**: the set of unique letters the network learns
//! - **Train**: Hebbian outer-product sum, scaled by 1/N, diagonal cleared
//! - **Recall**: synchronous updates until the state equals a stored letter,
//!   capped at a fixed number of iterations
//!
//! The layers mirror each other: [`pattern`] and [`matrix`] are leaf types,
//! [`memory`] holds the store and the network, and [`highlevel`] wraps both
//! for a drawing front end.

pub mod error;
pub mod highlevel;
pub mod matrix;
pub mod memory;
pub mod pattern;

// Re-exports for convenience
pub use error::{HopnetError, Result};
pub use highlevel::Recognizer;
pub use matrix::Matrix;
pub use memory::{
    AssociativeMemory, PatternStore, Recall, RecallConfig, DEFAULT_LIBRARY_CAPACITY,
    DEFAULT_MAX_ITERATIONS,
};
pub use pattern::{Pattern, PATTERN_COLS, PATTERN_ROWS, PATTERN_SIZE};
