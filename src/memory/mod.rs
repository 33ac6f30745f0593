//! Memory layer: pattern libraries and the Hopfield recall engine.
//!
//! This module provides:
//!
//! - [`PatternStore`] — a set of unique letters used as training data,
//!   optionally bounded.
//!
//! - [`AssociativeMemory`] — a discrete Hopfield network that learns a
//!   store with the Hebbian rule and recalls the nearest stored letter from
//!   a noisy or partial one.
//!
//! # Usage
//!
//! ```rust
//! use hopnet::memory::{AssociativeMemory, PatternStore, Recall};
//! use hopnet::Pattern;
//!
//! let mut library = PatternStore::bounded(3);
//! library.add("# . # . # . # . # . # . # . # . # . # . # . # . #".parse().unwrap()).unwrap();
//!
//! let mut memory = AssociativeMemory::new();
//! memory.train(&library).unwrap();
//!
//! let probe = Pattern::new(&[1.0; 25]).unwrap();
//! match memory.recall(&probe).unwrap() {
//!     Recall::Found { pattern, iterations } => println!("{} after {} steps", pattern, iterations),
//!     Recall::NotFound { .. } => println!("not recognized"),
//! }
//! ```

pub mod hopfield;
pub mod store;

pub use hopfield::{AssociativeMemory, Recall, RecallConfig, DEFAULT_MAX_ITERATIONS};
pub use store::{PatternStore, DEFAULT_LIBRARY_CAPACITY};
