//! Pattern type for hopnet.
//!
//! A pattern is a 5x5 letter grid whose cells are signed unit values
//! {-1, +1}. The all-zero vector is reserved as the "unset" sentinel.
//! Internally stored as i8, which gives value equality and hashing for free.

use crate::error::{HopnetError, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rows in a letter grid.
pub const PATTERN_ROWS: usize = 5;
/// Number of columns in a letter grid.
pub const PATTERN_COLS: usize = 5;
/// Number of cells (neurons) in a letter grid.
pub const PATTERN_SIZE: usize = PATTERN_ROWS * PATTERN_COLS;

/// A fixed-size binary grid pattern.
///
/// Two patterns are equal iff their cell values are equal, and `Hash` agrees
/// with that, so patterns can live in a uniqueness-checked set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPattern", into = "RawPattern")]
pub struct Pattern {
    data: Vec<i8>,
    rows: usize,
    cols: usize,
}

impl Pattern {
    /// Create a pattern from exactly [`PATTERN_SIZE`] values in {-1, 0, 1}.
    pub fn new(values: &[f64]) -> Result<Self> {
        Ok(Self {
            data: Self::validate(values)?,
            rows: PATTERN_ROWS,
            cols: PATTERN_COLS,
        })
    }

    /// The all-zero "unset" pattern.
    pub fn empty() -> Self {
        Self {
            data: vec![0; PATTERN_SIZE],
            rows: PATTERN_ROWS,
            cols: PATTERN_COLS,
        }
    }

    /// Replace the cell values, validated the same way as [`Pattern::new`].
    ///
    /// On error the pattern is left untouched.
    pub fn set(&mut self, values: &[f64]) -> Result<()> {
        self.data = Self::validate(values)?;
        Ok(())
    }

    fn validate(values: &[f64]) -> Result<Vec<i8>> {
        if values.len() != PATTERN_SIZE {
            return Err(HopnetError::Validation(format!(
                "expected {} values, got {}",
                PATTERN_SIZE,
                values.len()
            )));
        }

        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                if v == 1.0 {
                    Ok(1)
                } else if v == -1.0 {
                    Ok(-1)
                } else if v == 0.0 {
                    Ok(0)
                } else {
                    Err(HopnetError::Validation(format!(
                        "value {} at cell {} is not one of -1, 0, 1",
                        v, i
                    )))
                }
            })
            .collect()
    }

    /// True iff every cell is the 0.0 sentinel.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the raw cell data as a slice.
    pub fn data(&self) -> &[i8] {
        &self.data
    }

    /// Convert to f64 values in row-major order.
    pub fn to_f64(&self) -> Vec<f64> {
        self.data.iter().map(|&v| v as f64).collect()
    }

    /// Cell value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col] as f64)
    }

    /// Number of cells where the two patterns differ.
    pub fn hamming(&self, other: &Pattern) -> usize {
        self.data
            .iter()
            .zip(other.data.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Copy of this pattern with `flips` distinct cells toggled.
    ///
    /// Cells are picked by a ChaCha8 RNG seeded with `seed`, so the same
    /// seed always corrupts the same cells. A toggled -1 becomes +1 and vice
    /// versa; an unset cell becomes +1. `flips` saturates at the cell count.
    pub fn corrupted(&self, flips: usize, seed: u64) -> Pattern {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let amount = flips.min(self.data.len());
        let mut data = self.data.clone();

        for idx in rand::seq::index::sample(&mut rng, data.len(), amount) {
            data[idx] = if data[idx] == 1 { -1 } else { 1 };
        }

        Self {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &v) in self.data.iter().enumerate() {
            let cell = if v == 1 { '#' } else { '.' };
            let sep = if (i + 1) % self.cols == 0 { '\n' } else { ' ' };
            write!(f, "{}{}", cell, sep)?;
        }
        Ok(())
    }
}

/// Parse a grid drawn with `#` (+1) and `.` (-1). Whitespace is ignored.
impl FromStr for Pattern {
    type Err = HopnetError;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '#' => Ok(1.0),
                '.' => Ok(-1.0),
                other => Err(HopnetError::Validation(format!(
                    "unexpected grid character {:?}",
                    other
                ))),
            })
            .collect::<Result<Vec<f64>>>()?;

        Pattern::new(&values)
    }
}

/// Wire form of a [`Pattern`]; every field is re-checked on the way in.
#[derive(Serialize, Deserialize)]
struct RawPattern {
    rows: usize,
    cols: usize,
    values: Vec<i8>,
}

impl TryFrom<RawPattern> for Pattern {
    type Error = HopnetError;

    fn try_from(raw: RawPattern) -> Result<Self> {
        if raw.rows != PATTERN_ROWS || raw.cols != PATTERN_COLS {
            return Err(HopnetError::Validation(format!(
                "grid must be {}x{}, got {}x{}",
                PATTERN_ROWS, PATTERN_COLS, raw.rows, raw.cols
            )));
        }
        let values: Vec<f64> = raw.values.iter().map(|&v| v as f64).collect();
        Pattern::new(&values)
    }
}

impl From<Pattern> for RawPattern {
    fn from(p: Pattern) -> Self {
        RawPattern {
            rows: p.rows,
            cols: p.cols,
            values: p.data,
        }
    }
}
