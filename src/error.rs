//! Error types for hopnet.

use thiserror::Error;

/// hopnet error types.
#[derive(Error, Debug)]
pub enum HopnetError {
    /// Malformed pattern: wrong length, a value outside {-1, 0, 1}, or bad grid text
    #[error("Invalid pattern: {0}")]
    Validation(String),

    /// Matrix shapes incompatible with the requested operation
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: String, got: String },

    /// A bounded store already holds `capacity` distinct patterns
    #[error("Pattern store is full (capacity {capacity})")]
    StoreFull { capacity: usize },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HopnetError {
    pub(crate) fn shape_mismatch(expected: (usize, usize), got: (usize, usize)) -> Self {
        HopnetError::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            got: format!("{}x{}", got.0, got.1),
        }
    }
}

/// Result type alias for hopnet operations.
pub type Result<T> = std::result::Result<T, HopnetError>;
