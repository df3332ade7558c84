//! Process-wide directory registry.
//!
//! A single [`Maptel`] instance is created on first use from
//! [`Config::from_env`], falling back to defaults if the environment is
//! invalid. The `maptel_*` functions operate on it with raw `u64` handles.

use crate::config::Config;
use crate::domain::{DirectoryHandle, PhoneNumber};
use crate::error::MaptelResult;
use crate::services::{Maptel, MaptelService};
use once_cell::sync::Lazy;
use tracing::warn;

static GLOBAL: Lazy<Maptel> = Lazy::new(|| {
    let config = Config::from_env().unwrap_or_else(|e| {
        warn!("maptel: invalid configuration, using defaults: {}", e);
        Config::default()
    });
    Maptel::from_config(&config)
});

/// The process-wide service instance.
pub fn global() -> &'static Maptel {
    &GLOBAL
}

/// Create a new directory and return its id.
pub fn maptel_create() -> MaptelResult<u64> {
    GLOBAL.create().map(DirectoryHandle::get)
}

pub fn maptel_delete(id: u64) -> MaptelResult<()> {
    GLOBAL.delete(DirectoryHandle::new(id))
}

pub fn maptel_insert(id: u64, tel_src: &str, tel_dst: &str) -> MaptelResult<()> {
    GLOBAL.insert(DirectoryHandle::new(id), tel_src, tel_dst)
}

pub fn maptel_erase(id: u64, tel_src: &str) -> MaptelResult<()> {
    GLOBAL.erase(DirectoryHandle::new(id), tel_src)
}

/// Resolve `tel_src` into `tel_dst` as a NUL-terminated digit string.
///
/// `tel_dst` must hold at least `max_number_len + 1` bytes to fit any number.
pub fn maptel_transform(id: u64, tel_src: &str, tel_dst: &mut [u8]) -> MaptelResult<usize> {
    GLOBAL.transform_into(DirectoryHandle::new(id), tel_src, tel_dst)
}

/// Resolve `tel_src` and return the number directly.
pub fn maptel_resolve(id: u64, tel_src: &str) -> MaptelResult<PhoneNumber> {
    GLOBAL.transform(DirectoryHandle::new(id), tel_src)
}
