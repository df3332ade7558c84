//! Directory storage.
//!
//! [`DirectoryStore`] manages the lifecycle of [`Directory`] tables keyed by
//! [`DirectoryHandle`](crate::domain::DirectoryHandle).

pub mod directory;
pub mod directory_store;

pub use directory::Directory;
pub use directory_store::{DirectoryStore, SharedDirectory};
