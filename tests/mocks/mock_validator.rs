use maptel::domain::{NumberValidator, PhoneNumber, ValidationError};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock number validator for testing.
///
/// Delegates to the real digit rules but records every string it was asked
/// to validate, and can be told to reject specific numbers outright.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockValidator {
    calls: Arc<Mutex<Vec<String>>>,
    rejected: Arc<Mutex<HashSet<String>>>,
}

#[allow(dead_code)]
impl MockValidator {
    /// Create a new MockValidator that accepts every digit string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject `number` even if it is well formed.
    pub fn reject(&self, number: &str) {
        self.rejected.lock().unwrap().insert(number.to_string());
    }

    /// Strings passed to `validate`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl NumberValidator for MockValidator {
    fn validate(&self, raw: &str) -> Result<PhoneNumber, ValidationError> {
        self.calls.lock().unwrap().push(raw.to_string());

        if self.rejected.lock().unwrap().contains(raw) {
            return Err(ValidationError::NonDigit {
                index: 0,
                found: raw.chars().next().unwrap_or('?'),
            });
        }
        PhoneNumber::with_max_len(raw, self.max_len())
    }

    fn max_len(&self) -> usize {
        maptel::domain::DEFAULT_MAX_LEN
    }
}
