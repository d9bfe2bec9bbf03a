//! Input parsing error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A character that is neither `0` nor `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidBit {
    /// Zero-based index among the bit characters (separators excluded).
    pub position: usize,
    pub found: char,
}

impl fmt::Display for InvalidBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}={:?}", self.position + 1, self.found)
    }
}

/// Errors that can occur when parsing a textual sensor vector
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    /// Wrong number of readings
    #[error("Expected {expected} sensor readings, found {found}")]
    WrongLength { expected: usize, found: usize },

    /// One or more readings are not `0` or `1`; every offender is listed
    #[error("Invalid sensor readings (expected 0 or 1): {}", join(.0))]
    InvalidBits(Vec<InvalidBit>),
}

fn join(bits: &[InvalidBit]) -> String {
    bits.iter()
        .map(InvalidBit::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
