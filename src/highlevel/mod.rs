//! High-level convenience API.
//!
//! This layer provides [`Recognizer`], an ergonomic wrapper that owns a
//! bounded [`PatternStore`](crate::memory::PatternStore) and an
//! [`AssociativeMemory`](crate::memory::AssociativeMemory) and runs the
//! add-letters-then-recognize workflow of a drawing front end.
//!
//! For production or library code, prefer importing from
//! [`memory`](crate::memory) directly.

pub mod recognizer;

pub use recognizer::Recognizer;
