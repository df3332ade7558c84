//! Basic metrics instrumentation for directory operations.
//!
//! Provides counters for directory lifecycle, mutations, resolutions and
//! rejected calls.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for directory operations.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Directories created
    directories_created: Arc<AtomicU64>,

    /// Directories deleted
    directories_deleted: Arc<AtomicU64>,

    /// Successful inserts
    inserts_total: Arc<AtomicU64>,

    /// Successful erases, including ones with nothing to erase
    erases_total: Arc<AtomicU64>,

    /// Erases that found no entry
    erase_misses_total: Arc<AtomicU64>,

    /// Successful transforms
    transforms_total: Arc<AtomicU64>,

    /// Transforms that hit a redirection cycle
    cycles_detected_total: Arc<AtomicU64>,

    /// Calls rejected for an unknown handle
    unknown_handle_total: Arc<AtomicU64>,

    /// Calls rejected for a malformed number
    invalid_number_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            directories_created: Arc::new(AtomicU64::new(0)),
            directories_deleted: Arc::new(AtomicU64::new(0)),
            inserts_total: Arc::new(AtomicU64::new(0)),
            erases_total: Arc::new(AtomicU64::new(0)),
            erase_misses_total: Arc::new(AtomicU64::new(0)),
            transforms_total: Arc::new(AtomicU64::new(0)),
            cycles_detected_total: Arc::new(AtomicU64::new(0)),
            unknown_handle_total: Arc::new(AtomicU64::new(0)),
            invalid_number_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_create(&self) {
        self.directories_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delete(&self) {
        self.directories_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_insert(&self) {
        self.inserts_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an erase; `hit` tells whether an entry was removed.
    pub fn record_erase(&self, hit: bool) {
        self.erases_total.fetch_add(1, Ordering::Relaxed);
        if !hit {
            self.erase_misses_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a transform; `cycle` tells whether a cycle was detected.
    pub fn record_transform(&self, cycle: bool) {
        self.transforms_total.fetch_add(1, Ordering::Relaxed);
        if cycle {
            self.cycles_detected_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_unknown_handle(&self) {
        self.unknown_handle_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid_number(&self) {
        self.invalid_number_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn directories_created(&self) -> u64 {
        self.directories_created.load(Ordering::Relaxed)
    }

    pub fn directories_deleted(&self) -> u64 {
        self.directories_deleted.load(Ordering::Relaxed)
    }

    pub fn inserts_total(&self) -> u64 {
        self.inserts_total.load(Ordering::Relaxed)
    }

    pub fn erases_total(&self) -> u64 {
        self.erases_total.load(Ordering::Relaxed)
    }

    pub fn erase_misses_total(&self) -> u64 {
        self.erase_misses_total.load(Ordering::Relaxed)
    }

    pub fn transforms_total(&self) -> u64 {
        self.transforms_total.load(Ordering::Relaxed)
    }

    pub fn cycles_detected_total(&self) -> u64 {
        self.cycles_detected_total.load(Ordering::Relaxed)
    }

    pub fn unknown_handle_total(&self) -> u64 {
        self.unknown_handle_total.load(Ordering::Relaxed)
    }

    pub fn invalid_number_total(&self) -> u64 {
        self.invalid_number_total.load(Ordering::Relaxed)
    }

    /// Fraction of transforms that hit a cycle (0.0 to 1.0).
    pub fn cycle_rate(&self) -> f64 {
        let transforms = self.transforms_total();
        if transforms == 0 {
            0.0
        } else {
            self.cycles_detected_total() as f64 / transforms as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        for counter in [
            &self.directories_created,
            &self.directories_deleted,
            &self.inserts_total,
            &self.erases_total,
            &self.erase_misses_total,
            &self.transforms_total,
            &self.cycles_detected_total,
            &self.unknown_handle_total,
            &self.invalid_number_total,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            directories_created: self.directories_created(),
            directories_deleted: self.directories_deleted(),
            inserts_total: self.inserts_total(),
            erases_total: self.erases_total(),
            erase_misses_total: self.erase_misses_total(),
            transforms_total: self.transforms_total(),
            cycles_detected_total: self.cycles_detected_total(),
            unknown_handle_total: self.unknown_handle_total(),
            invalid_number_total: self.invalid_number_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub directories_created: u64,
    pub directories_deleted: u64,
    pub inserts_total: u64,
    pub erases_total: u64,
    pub erase_misses_total: u64,
    pub transforms_total: u64,
    pub cycles_detected_total: u64,
    pub unknown_handle_total: u64,
    pub invalid_number_total: u64,
}
