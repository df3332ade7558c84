//! Domain validation errors.

use std::fmt;

/// Errors that can occur during phone number validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided number is empty.
    Empty,

    /// The provided number exceeds the configured length bound.
    TooLong { len: usize, max: usize },

    /// The provided number contains a character that is not a decimal digit.
    /// Only the first offending character and its byte offset are kept.
    NonDigit { index: usize, found: char },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Phone number cannot be empty"),
            Self::TooLong { len, max } => {
                write!(f, "Phone number too long: {} digits (max {})", len, max)
            }
            Self::NonDigit { index, found } => write!(
                f,
                "Phone number must be digits only: found {:?} at position {}",
                found, index
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
