//! Registry operation statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for registry operations.
///
/// All fields are atomic so lookups can be counted through `&self`, including
/// from readers holding a shared lock on a
/// [`SharedRegistry`](crate::SharedRegistry).
///
/// # Memory Ordering
/// We use `Ordering::Relaxed` for all operations: counters are independent
/// and only need atomicity, not ordering against each other.
///
/// # Example
/// ```
/// use supplierdb::RegistryStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = RegistryStats::new();
/// stats.lookup_hits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.snapshot().lookup_hits, 1);
/// ```
#[derive(Debug)]
pub struct RegistryStats {
    /// Lookups that found a supplier.
    pub lookup_hits: AtomicU64,

    /// Lookups for an ID that was not present.
    pub lookup_misses: AtomicU64,

    /// Suppliers added, checked or unchecked.
    pub inserts: AtomicU64,

    /// Checked inserts refused because the ID existed.
    pub duplicate_rejections: AtomicU64,

    /// Suppliers removed.
    pub deletes: AtomicU64,

    /// Updates applied to an existing supplier.
    pub updates: AtomicU64,

    /// Updates whose rating text failed validation.
    pub rating_rejections: AtomicU64,
}

impl RegistryStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            lookup_hits: AtomicU64::new(0),
            lookup_misses: AtomicU64::new(0),
            inserts: AtomicU64::new(0),
            duplicate_rejections: AtomicU64::new(0),
            deletes: AtomicU64::new(0),
            updates: AtomicU64::new(0),
            rating_rejections: AtomicU64::new(0),
        }
    }

    /// Record the result of a lookup.
    #[inline]
    pub(crate) fn record_lookup(&self, found: bool) {
        let counter = if found {
            &self.lookup_hits
        } else {
            &self.lookup_misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Fraction of lookups that found a supplier (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.snapshot().hit_rate()
    }

    /// Get a snapshot of current statistics.
    ///
    /// This returns a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            lookup_hits: self.lookup_hits.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            duplicate_rejections: self.duplicate_rejections.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            rating_rejections: self.rating_rejections.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        for counter in [
            &self.lookup_hits,
            &self.lookup_misses,
            &self.inserts,
            &self.duplicate_rejections,
            &self.deletes,
            &self.updates,
            &self.rating_rejections,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl Default for RegistryStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of registry statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub lookup_hits: u64,
    pub lookup_misses: u64,
    pub inserts: u64,
    pub duplicate_rejections: u64,
    pub deletes: u64,
    pub updates: u64,
    pub rating_rejections: u64,
}

impl StatsSnapshot {
    /// Total lookups, hits and misses.
    pub fn lookups(&self) -> u64 {
        self.lookup_hits + self.lookup_misses
    }

    /// Fraction of lookups that found a supplier (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ lookups: {}, hit_rate: {:.2}%, inserts: {}, duplicates: {}, deletes: {}, updates: {}, rating_rejections: {} }}",
            self.lookups(),
            self.hit_rate() * 100.0,
            self.inserts,
            self.duplicate_rejections,
            self.deletes,
            self.updates,
            self.rating_rejections
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = RegistryStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_record_lookup() {
        let stats = RegistryStats::new();

        for _ in 0..3 {
            stats.record_lookup(true);
        }
        stats.record_lookup(false);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.lookup_hits, 3);
        assert_eq!(snapshot.lookup_misses, 1);
        assert_eq!(snapshot.lookups(), 4);
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_stats_reset() {
        let stats = RegistryStats::new();
        RegistryStats::bump(&stats.inserts);
        RegistryStats::bump(&stats.deletes);
        stats.record_lookup(true);

        stats.reset();

        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_stats_display() {
        let stats = RegistryStats::new();
        stats.lookup_hits.fetch_add(80, Ordering::Relaxed);
        stats.lookup_misses.fetch_add(20, Ordering::Relaxed);
        stats.inserts.fetch_add(5, Ordering::Relaxed);

        let display = format!("{}", stats.snapshot());

        assert!(display.contains("lookups: 100"));
        assert!(display.contains("80.00%"));
        assert!(display.contains("inserts: 5"));
    }
}
