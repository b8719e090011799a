//! Pool usage accounting.
//!
//! Counters are updated with relaxed atomics; a snapshot is cheap and may
//! be taken from any thread, but is not itself an atomic view across
//! counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Internal counter set owned by the pool.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    stores: AtomicU64,
    discards: AtomicU64,
    resizes: AtomicU64,
    shed: AtomicU64,
}

impl Counters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_store(&self) {
        self.stores.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_discard(&self) {
        self.discards.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_resize(&self, shed: usize) {
        self.resizes.fetch_add(1, Ordering::Relaxed);
        self.shed.fetch_add(shed as u64, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> PoolStats {
        PoolStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            stores: self.stores.load(Ordering::Relaxed),
            discards: self.discards.load(Ordering::Relaxed),
            resizes: self.resizes.load(Ordering::Relaxed),
            shed: self.shed.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of pool usage counters.
///
/// Returned by [`Pool::stats`](crate::Pool::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Pulls served from stored objects.
    pub hits: u64,

    /// Pulls that fell through to the factory.
    pub misses: u64,

    /// Pushes that stored their object.
    pub stores: u64,

    /// Pushes discarded because the pool was full.
    pub discards: u64,

    /// Effective (capacity-changing) resizes.
    pub resizes: u64,

    /// Objects dropped by shrinking resizes.
    pub shed: u64,
}
