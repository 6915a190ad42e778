use std::sync::atomic::{AtomicUsize, Ordering};

/// Access counters of an [`EntityStore`](super::EntityStore).
///
/// They are only observed, never consulted during resolution.
#[derive(Debug, Default)]
pub(super) struct StoreStats {
    lookups: AtomicUsize,
    full_scans: AtomicUsize,
    relationship_scans: AtomicUsize,
}

impl StoreStats {
    pub(super) fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_full_scan(&self) {
        self.full_scans.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_relationship_scan(&self) {
        self.relationship_scans.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            lookups: self.lookups.load(Ordering::Relaxed),
            full_scans: self.full_scans.load(Ordering::Relaxed),
            relationship_scans: self.relationship_scans.load(Ordering::Relaxed),
        }
    }

    pub(super) fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.full_scans.store(0, Ordering::Relaxed);
        self.relationship_scans.store(0, Ordering::Relaxed);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Lookups by identifier.
    pub lookups: usize,
    /// Iterations over a whole collection.
    pub full_scans: usize,
    /// Searches for the groupings of an owner.
    pub relationship_scans: usize,
}
