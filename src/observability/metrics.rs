//! Store metrics
//!
//! - Counters only
//! - Monotonic increase for the lifetime of one store
//! - Updated from `&self`, so read paths can count without a `&mut` borrow

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for one [`OrderedStore`](crate::store::OrderedStore).
///
/// Uses Relaxed ordering; the values are exact once the store is quiescent.
#[derive(Debug, Default)]
pub struct StoreMetrics {
    /// Records added to the tree
    inserts: AtomicU64,
    /// Inserts dropped because the key was already present
    duplicates_ignored: AtomicU64,
    /// Single rotations performed while rebalancing
    rotations: AtomicU64,
    /// member / get lookups
    point_lookups: AtomicU64,
    /// predecessor / successor lookups
    neighbor_lookups: AtomicU64,
    /// Full substring scans
    field_scans: AtomicU64,
}

impl StoreMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment inserts
    pub fn increment_inserts(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment ignored duplicates
    pub fn increment_duplicates_ignored(&self) {
        self.duplicates_ignored.fetch_add(1, Ordering::Relaxed);
    }

    /// Add rotations
    pub fn add_rotations(&self, count: u64) {
        self.rotations.fetch_add(count, Ordering::Relaxed);
    }

    /// Increment point lookups
    pub fn increment_point_lookups(&self) {
        self.point_lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment neighbor lookups
    pub fn increment_neighbor_lookups(&self) {
        self.neighbor_lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment field scans
    pub fn increment_field_scans(&self) {
        self.field_scans.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            duplicates_ignored: self.duplicates_ignored.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
            point_lookups: self.point_lookups.load(Ordering::Relaxed),
            neighbor_lookups: self.neighbor_lookups.load(Ordering::Relaxed),
            field_scans: self.field_scans.load(Ordering::Relaxed),
        }
    }

    /// Get current snapshot of all metrics as JSON
    pub fn to_json(&self) -> String {
        let s = self.snapshot();
        format!(
            r#"{{"inserts":{},"duplicates_ignored":{},"rotations":{},"point_lookups":{},"neighbor_lookups":{},"field_scans":{}}}"#,
            s.inserts, s.duplicates_ignored, s.rotations, s.point_lookups, s.neighbor_lookups, s.field_scans,
        )
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub inserts: u64,
    pub duplicates_ignored: u64,
    pub rotations: u64,
    pub point_lookups: u64,
    pub neighbor_lookups: u64,
    pub field_scans: u64,
}
