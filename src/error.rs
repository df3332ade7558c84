//! Error types for maptel.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{DirectoryHandle, ValidationError};
use thiserror::Error;

/// Errors returned by directory operations.
///
/// Every variant is detected before any mutation happens, so a failed
/// operation leaves the store unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaptelError {
    /// No directory exists under the handle
    #[error("Unknown directory handle: {0}")]
    UnknownHandle(DirectoryHandle),

    /// A supplied phone number failed validation
    #[error("Invalid phone number: {0}")]
    InvalidNumber(#[from] ValidationError),

    /// Every directory handle value has been issued
    #[error("Directory handles exhausted")]
    HandlesExhausted,

    /// Output buffer cannot hold the resolved number and its terminator
    #[error("Buffer too small: need {required} bytes, got {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with MaptelError
pub type MaptelResult<T> = Result<T, MaptelError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
