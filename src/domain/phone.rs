//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Default maximum number of digits in a phone number.
pub const DEFAULT_MAX_LEN: usize = 22;

static NON_DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("Failed to compile non-digit regex"));

/// A type-safe wrapper for phone numbers.
///
/// A phone number is a non-empty sequence of ASCII decimal digits with a
/// bounded length. No normalization is applied: `"0123"` and `"123"` are
/// different numbers.
///
/// # Example
///
/// ```
/// use maptel::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("48221234567").unwrap();
/// assert_eq!(phone.as_str(), "48221234567");
/// assert!(PhoneNumber::new("+48 22").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber bounded by [`DEFAULT_MAX_LEN`].
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the number is empty, contains a
    /// non-digit character, or is longer than the bound.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_max_len(phone, DEFAULT_MAX_LEN)
    }

    /// Create a new PhoneNumber with an explicit length bound.
    pub fn with_max_len(phone: impl Into<String>, max_len: usize) -> Result<Self, ValidationError> {
        let phone = phone.into();
        Self::check(&phone, max_len)?;
        Ok(Self(phone))
    }

    /// Check a raw string against the phone number rules without allocating.
    pub fn check(phone: &str, max_len: usize) -> Result<(), ValidationError> {
        if phone.is_empty() {
            return Err(ValidationError::Empty);
        }

        if let Some(m) = NON_DIGIT_REGEX.find(phone) {
            return Err(ValidationError::NonDigit {
                index: m.start(),
                found: m.as_str().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
            });
        }

        // Digits are ASCII, so the byte length is the digit count.
        if phone.len() > max_len {
            return Err(ValidationError::TooLong {
                len: phone.len(),
                max: max_len,
            });
        }

        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed number; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Borrow<str> for PhoneNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
