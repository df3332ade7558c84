//! DirectoryHandle value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier naming one directory within a store.
///
/// Handles are issued by [`DirectoryStore`](crate::store::DirectoryStore)
/// in increasing order starting at 0 and are never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DirectoryHandle(u64);

impl DirectoryHandle {
    /// Wrap a raw handle value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw handle value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for DirectoryHandle {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<DirectoryHandle> for u64 {
    fn from(handle: DirectoryHandle) -> Self {
        handle.0
    }
}

impl fmt::Display for DirectoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
