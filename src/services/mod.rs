//! Service layer for maptel.
//!
//! The service is the entry point callers use; it combines validation, the
//! directory store and the resolver.

pub mod maptel_service;

pub use maptel_service::{Maptel, MaptelService};
