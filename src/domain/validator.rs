//! Phone number validation collaborator.
//!
//! The service never trusts raw strings: every number passes through a
//! [`NumberValidator`] before it reaches a directory.

use super::errors::ValidationError;
use super::phone::{PhoneNumber, DEFAULT_MAX_LEN};

/// Turns raw caller input into a validated [`PhoneNumber`].
pub trait NumberValidator: Send + Sync {
    /// Validate `raw`, returning the typed number on success.
    fn validate(&self, raw: &str) -> Result<PhoneNumber, ValidationError>;

    /// The longest number this validator accepts.
    fn max_len(&self) -> usize;
}

/// Accepts non-empty strings of ASCII decimal digits up to `max_len` long.
#[derive(Debug, Clone, Copy)]
pub struct DigitValidator {
    max_len: usize,
}

impl DigitValidator {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Default for DigitValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEN)
    }
}

impl NumberValidator for DigitValidator {
    fn validate(&self, raw: &str) -> Result<PhoneNumber, ValidationError> {
        PhoneNumber::with_max_len(raw, self.max_len)
    }

    fn max_len(&self) -> usize {
        self.max_len
    }
}
