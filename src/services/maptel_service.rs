//! Directory service layer.
//!
//! Validates raw caller input, routes it to the right directory and runs the
//! resolver. The handle is looked up first, then every number is validated,
//! and only then is the directory touched, so failed calls change nothing.
//! Directory locking lives in [`DirectoryStore`]; validation runs inside the
//! store's closure so the lookup-then-validate order holds.

use crate::config::Config;
use crate::domain::{DigitValidator, DirectoryHandle, NumberValidator, PhoneNumber};
use crate::error::{MaptelError, MaptelResult};
use crate::metrics::Metrics;
use crate::resolver::{self, Resolution};
use crate::store::DirectoryStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Longest prefix of caller input echoed into trace events.
const MAX_ECHO: usize = 32;

/// Caller input as echoed into trace events, cut at a char boundary.
fn clip(raw: &str) -> &str {
    if raw.len() <= MAX_ECHO {
        return raw;
    }
    let mut end = MAX_ECHO;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    &raw[..end]
}

/// The operations exposed to callers.
pub trait MaptelService: Send + Sync {
    /// Create an empty directory and return its handle.
    fn create(&self) -> MaptelResult<DirectoryHandle>;

    /// Delete a directory and all its entries.
    fn delete(&self, handle: DirectoryHandle) -> MaptelResult<()>;

    /// Record that `src` was changed to `dst`, overwriting any previous change.
    fn insert(&self, handle: DirectoryHandle, src: &str, dst: &str) -> MaptelResult<()>;

    /// Forget the change recorded for `src`. Erasing a missing entry succeeds.
    fn erase(&self, handle: DirectoryHandle, src: &str) -> MaptelResult<()>;

    /// Resolve `src` to the number it ultimately maps to.
    fn transform(&self, handle: DirectoryHandle, src: &str) -> MaptelResult<PhoneNumber>;
}

/// Default implementation of MaptelService.
pub struct Maptel {
    store: DirectoryStore,
    validator: Arc<dyn NumberValidator>,
    metrics: Metrics,
    trace: bool,
}

impl Maptel {
    /// Create a service with the default digit validator and tracing on.
    pub fn new() -> Self {
        Self::with_validator(Arc::new(DigitValidator::default()), true)
    }

    /// Create a service from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_validator(
            Arc::new(DigitValidator::new(config.max_number_len)),
            config.trace,
        )
    }

    /// Create a service with a custom validation collaborator.
    pub fn with_validator(validator: Arc<dyn NumberValidator>, trace: bool) -> Self {
        Self {
            store: DirectoryStore::new(),
            validator,
            metrics: Metrics::new(),
            trace,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Longest number accepted by the validator.
    pub fn max_number_len(&self) -> usize {
        self.validator.max_len()
    }

    pub fn contains(&self, handle: DirectoryHandle) -> bool {
        self.store.contains(handle)
    }

    /// Number of entries in a directory.
    pub fn len(&self, handle: DirectoryHandle) -> MaptelResult<usize> {
        self.store
            .with_directory(handle, |directory| directory.len())
            .inspect_err(|_| self.unknown_handle(handle))
    }

    /// Number of live directories.
    pub fn directory_count(&self) -> usize {
        self.store.len()
    }

    /// Resolve `src` and report how the chain terminated.
    pub fn resolve(&self, handle: DirectoryHandle, src: &str) -> MaptelResult<Resolution> {
        if self.trace {
            debug!(handle = %handle, src = %clip(src), "maptel: transform");
        }

        let resolution = self
            .store
            .with_directory(handle, |directory| -> MaptelResult<Resolution> {
                let src = self.validate(src)?;
                Ok(resolver::resolve(directory, &src))
            })
            .inspect_err(|_| self.unknown_handle(handle))??;

        if resolution.is_cycle() {
            warn!(handle = %handle, src = %src, "maptel: transform: cycle detected");
        }
        self.metrics.record_transform(resolution.is_cycle());

        if self.trace {
            debug!(
                handle = %handle,
                src = %src,
                dst = %resolution.number,
                "maptel: transform: resolved"
            );
        }

        Ok(resolution)
    }

    /// Resolve `src` into `buf` as NUL-terminated ASCII digits.
    ///
    /// Returns the number of digits written, excluding the terminator.
    ///
    /// # Errors
    ///
    /// Returns `MaptelError::BufferTooSmall` unless the resolved number's
    /// length is strictly less than `buf.len()`. `buf` is left untouched on
    /// any error.
    pub fn transform_into(
        &self,
        handle: DirectoryHandle,
        src: &str,
        buf: &mut [u8],
    ) -> MaptelResult<usize> {
        let number = self.transform(handle, src)?;
        let digits = number.as_str().as_bytes();

        if digits.len() >= buf.len() {
            return Err(MaptelError::BufferTooSmall {
                required: digits.len() + 1,
                capacity: buf.len(),
            });
        }

        buf[..digits.len()].copy_from_slice(digits);
        buf[digits.len()] = 0;
        Ok(digits.len())
    }

    fn unknown_handle(&self, handle: DirectoryHandle) {
        self.metrics.record_unknown_handle();
        warn!(handle = %handle, "maptel: unknown directory handle");
    }

    fn validate(&self, raw: &str) -> MaptelResult<PhoneNumber> {
        self.validator.validate(raw).map_err(|e| {
            self.metrics.record_invalid_number();
            if self.trace {
                debug!(len = raw.len(), error = %e, "maptel: rejected phone number");
            }
            MaptelError::from(e)
        })
    }
}

impl Default for Maptel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Maptel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Maptel")
            .field("directories", &self.store.len())
            .field("max_number_len", &self.validator.max_len())
            .field("trace", &self.trace)
            .finish()
    }
}

impl MaptelService for Maptel {
    fn create(&self) -> MaptelResult<DirectoryHandle> {
        let handle = self.store.create().inspect_err(|e| {
            warn!(error = %e, "maptel: create failed");
        })?;

        self.metrics.record_create();
        if self.trace {
            debug!(handle = %handle, "maptel: create: new map");
        }
        Ok(handle)
    }

    fn delete(&self, handle: DirectoryHandle) -> MaptelResult<()> {
        self.store
            .delete(handle)
            .inspect_err(|_| self.unknown_handle(handle))?;

        self.metrics.record_delete();
        if self.trace {
            debug!(handle = %handle, "maptel: delete: map deleted");
        }
        Ok(())
    }

    fn insert(&self, handle: DirectoryHandle, src: &str, dst: &str) -> MaptelResult<()> {
        if self.trace {
            debug!(
                handle = %handle,
                src = %clip(src),
                dst = %clip(dst),
                "maptel: insert"
            );
        }

        self.store
            .with_directory_mut(handle, |directory| -> MaptelResult<()> {
                let src = self.validate(src)?;
                let dst = self.validate(dst)?;
                directory.insert(src, dst);
                Ok(())
            })
            .inspect_err(|_| self.unknown_handle(handle))??;

        self.metrics.record_insert();
        if self.trace {
            debug!(handle = %handle, "maptel: insert: inserted");
        }
        Ok(())
    }

    fn erase(&self, handle: DirectoryHandle, src: &str) -> MaptelResult<()> {
        if self.trace {
            debug!(handle = %handle, src = %clip(src), "maptel: erase");
        }

        let erased = self
            .store
            .with_directory_mut(handle, |directory| -> MaptelResult<bool> {
                let src = self.validate(src)?;
                Ok(directory.erase(src.as_str()))
            })
            .inspect_err(|_| self.unknown_handle(handle))??;

        self.metrics.record_erase(erased);
        if self.trace {
            if erased {
                debug!(handle = %handle, "maptel: erase: erased");
            } else {
                debug!(handle = %handle, "maptel: erase: nothing to erase");
            }
        }
        Ok(())
    }

    fn transform(&self, handle: DirectoryHandle, src: &str) -> MaptelResult<PhoneNumber> {
        self.resolve(handle, src).map(|resolution| resolution.number)
    }
}
