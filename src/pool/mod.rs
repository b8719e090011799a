//! The concurrent object pool.
//!
//! - [`Pool`] - Ring-buffer pool with `push()`/`pull()`/`resize()` API
//!
//! The push and pull sides are independent synchronization domains: each
//! guards its own cursor with its own mutex, so pushers and pullers never
//! block each other. The backing ring sits behind a read-write lock that
//! both sides take shared; `resize` takes it exclusive, which is the only
//! way any caller can be made to wait.

mod ring;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::stats::{Counters, PoolStats};

use ring::Ring;

/// A concurrent pool of reusable objects over a fixed-length ring buffer.
///
/// Objects handed back with [`push`](Pool::push) are stored FIFO and
/// recycled by [`pull`](Pool::pull). A full pool discards pushed objects
/// silently; an empty pool constructs fresh ones through the factory
/// supplied at creation. Neither path blocks: overflow and underflow are
/// steady states here, not errors.
///
/// [`resize`](Pool::resize) changes capacity live, preserving the oldest
/// stored objects in order, and is the only operation that excludes
/// everything else while it runs.
///
/// # The factory
///
/// The factory runs outside all pool locks, so concurrent pulls against
/// an empty pool may invoke it concurrently. It must be safe to call from
/// multiple threads (`Fn() -> T + Send + Sync`) and should have no side
/// effects the pool can observe. A panicking factory unwinds out of
/// `pull` to the caller; the pool itself stays usable.
///
/// # Example
///
/// ```
/// use poolrs::Pool;
///
/// let pool = Pool::new(3, || Vec::<u8>::new());
///
/// pool.push(vec![1]);
/// pool.push(vec![2]);
///
/// assert_eq!(pool.pull(), vec![1], "oldest pushed is pulled first");
/// assert_eq!(pool.pull(), vec![2]);
/// assert!(pool.pull().is_empty(), "empty pool falls back to the factory");
/// ```
pub struct Pool<T> {
    /// Backing store handle. Push/pull take it shared; resize takes it
    /// exclusive and swaps the ring wholesale, so no partial state is
    /// ever visible to a caller that could not get in.
    ring: RwLock<Ring<T>>,

    /// Write-domain lock: the position the next push stores into.
    push_cursor: Mutex<usize>,

    /// Read-domain lock: the position the next pull takes from.
    pull_cursor: Mutex<usize>,

    /// Count of live entries. The single source of truth for full/empty;
    /// coinciding cursors cannot tell the two apart.
    occupancy: AtomicUsize,

    /// Mirror of the ring length, readable without the ring lock.
    capacity: AtomicUsize,

    factory: Box<dyn Fn() -> T + Send + Sync>,

    counters: Counters,
}

impl<T> Pool<T> {
    /// Creates a pool with the given capacity and construction factory.
    ///
    /// The pool starts empty; the first `capacity` pushes are stored and
    /// pulls before any push are served by `factory`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`PoolConfig`] with
    /// [`with_config`](Pool::with_config) for a fallible constructor.
    ///
    /// # Example
    ///
    /// ```
    /// use poolrs::Pool;
    ///
    /// let pool = Pool::new(8, String::new);
    /// assert_eq!(pool.capacity(), 8);
    /// assert!(pool.is_empty());
    /// ```
    pub fn new<F>(capacity: usize, factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        assert!(capacity > 0, "pool capacity must be non-zero");
        Self::build(capacity, 0, Box::new(factory))
    }

    /// Creates a pool from a validated configuration.
    ///
    /// Returns an error if the configuration is invalid. With a non-zero
    /// prewarm count, that many instances are constructed through
    /// `factory` and stored before the pool is returned; prewarmed
    /// instances do not appear in the usage counters.
    ///
    /// # Example
    ///
    /// ```
    /// use poolrs::{Pool, PoolConfig};
    ///
    /// let config = PoolConfig::new(4)?.with_prewarm(2);
    /// let pool = Pool::with_config(config, || vec![0u8; 1024])?;
    ///
    /// assert_eq!(pool.len(), 2);
    /// # Ok::<(), poolrs::PoolError>(())
    /// ```
    pub fn with_config<F>(config: PoolConfig, factory: F) -> Result<Self, PoolError>
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        config.validate()?;
        Ok(Self::build(
            config.capacity(),
            config.prewarm(),
            Box::new(factory),
        ))
    }

    fn build(capacity: usize, prewarm: usize, factory: Box<dyn Fn() -> T + Send + Sync>) -> Self {
        let pool = Self {
            ring: RwLock::new(Ring::new(capacity)),
            push_cursor: Mutex::new(0),
            pull_cursor: Mutex::new(0),
            occupancy: AtomicUsize::new(0),
            capacity: AtomicUsize::new(capacity),
            factory,
            counters: Counters::default(),
        };
        // Prewarmed instances bypass the usage counters; `stores` counts
        // only objects handed back by callers.
        for _ in 0..prewarm {
            pool.store((pool.factory)());
        }
        pool
    }

    /// Hands an object back to the pool.
    ///
    /// Stores `item` if the pool has spare capacity, otherwise drops it
    /// silently. Never blocks on a full pool; overflow is expected
    /// behavior under sustained load, not a failure.
    ///
    /// # Example
    ///
    /// ```
    /// use poolrs::Pool;
    ///
    /// let pool = Pool::new(1, String::new);
    /// pool.push(String::from("kept"));
    /// pool.push(String::from("discarded")); // full: dropped
    ///
    /// assert_eq!(pool.pull(), "kept");
    /// ```
    pub fn push(&self, item: T) {
        // Unlocked fast path: a full pool sheds load without touching
        // any lock.
        if self.occupancy.load(Ordering::Acquire) >= self.capacity.load(Ordering::Acquire) {
            self.counters.record_discard();
            return;
        }

        if self.store(item) {
            self.counters.record_store();
        } else {
            self.counters.record_discard();
        }
    }

    /// Locked write-domain protocol shared by `push` and prewarming.
    ///
    /// Returns `false` if the pool was full, in which case `item` is
    /// dropped.
    fn store(&self, item: T) -> bool {
        let ring = self.ring.read();
        let mut cursor = self.push_cursor.lock();

        // Any unlocked pre-check may be stale; only this check, made
        // while holding the write-domain lock, is authoritative.
        if self.occupancy.load(Ordering::Acquire) == ring.capacity() {
            return false;
        }

        ring.put(*cursor, item);
        *cursor = ring.advance(*cursor);
        self.occupancy.fetch_add(1, Ordering::AcqRel);
        true
    }

    /// Takes an object from the pool, constructing one if it is empty.
    ///
    /// Returns the oldest stored object if any exist, otherwise a fresh
    /// instance from the factory. Never blocks waiting for availability.
    /// The factory call happens outside all pool locks.
    ///
    /// # Example
    ///
    /// ```
    /// use poolrs::Pool;
    ///
    /// let pool = Pool::new(4, || String::from("fresh"));
    /// pool.push(String::from("stored"));
    ///
    /// assert_eq!(pool.pull(), "stored");
    /// assert_eq!(pool.pull(), "fresh");
    /// ```
    pub fn pull(&self) -> T {
        // Unlocked fast path: an empty pool goes straight to the factory.
        if self.occupancy.load(Ordering::Acquire) == 0 {
            self.counters.record_miss();
            return (self.factory)();
        }

        match self.pull_stored() {
            Some(item) => {
                self.counters.record_hit();
                item
            }
            // Another puller drained the pool between the fast-path
            // check and the lock acquisition.
            None => {
                self.counters.record_miss();
                (self.factory)()
            }
        }
    }

    /// Takes the oldest stored object without ever invoking the factory.
    ///
    /// Returns `None` if the pool is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use poolrs::Pool;
    ///
    /// let pool = Pool::new(4, String::new);
    /// assert!(pool.try_pull().is_none());
    ///
    /// pool.push(String::from("stored"));
    /// assert_eq!(pool.try_pull().as_deref(), Some("stored"));
    /// ```
    pub fn try_pull(&self) -> Option<T> {
        if self.occupancy.load(Ordering::Acquire) == 0 {
            return None;
        }

        let item = self.pull_stored();
        if item.is_some() {
            self.counters.record_hit();
        }
        item
    }

    /// Locked read-domain protocol shared by `pull` and `try_pull`.
    fn pull_stored(&self) -> Option<T> {
        let ring = self.ring.read();
        let mut cursor = self.pull_cursor.lock();

        if self.occupancy.load(Ordering::Acquire) == 0 {
            return None;
        }

        // Occupancy only grows while the read-domain lock is held, so
        // the slot at the pull cursor is inside the occupied arc.
        let taken = ring.take(*cursor);
        debug_assert!(taken.is_some(), "occupied arc held a vacant slot");
        let item = taken?;

        *cursor = ring.advance(*cursor);
        self.occupancy.fetch_sub(1, Ordering::AcqRel);
        Some(item)
    }

    /// Changes the pool's capacity, preserving stored objects.
    ///
    /// The oldest `min(len, new_capacity)` objects survive, in order.
    /// Shrinking below the current occupancy drops the newest objects
    /// silently; growing preserves everything. A resize to the current
    /// capacity is a no-op.
    ///
    /// Concurrent pushes and pulls are blocked (not failed) for the
    /// duration; no caller ever observes a half-resized pool.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use poolrs::Pool;
    ///
    /// let pool = Pool::new(4, String::new);
    /// for name in ["a", "b", "c"] {
    ///     pool.push(String::from(name));
    /// }
    ///
    /// pool.resize(2);
    /// assert_eq!(pool.len(), 2);
    /// assert_eq!(pool.pull(), "a");
    /// assert_eq!(pool.pull(), "b"); // "c" was shed
    /// ```
    pub fn resize(&self, new_capacity: usize) {
        assert!(new_capacity > 0, "pool capacity must be non-zero");

        let mut ring = self.ring.write();
        if new_capacity == ring.capacity() {
            return;
        }

        // Fixed acquisition order, write domain before read domain.
        let mut push_cursor = self.push_cursor.lock();
        let mut pull_cursor = self.pull_cursor.lock();

        let occupancy = self.occupancy.load(Ordering::Acquire);
        let keep = occupancy.min(new_capacity);

        #[cfg(feature = "logging")]
        let old_capacity = ring.capacity();

        let rebuilt = ring.rebuild(*pull_cursor, keep, new_capacity);
        *ring = rebuilt;

        *pull_cursor = 0;
        *push_cursor = keep % new_capacity;
        self.occupancy.store(keep, Ordering::Release);
        self.capacity.store(new_capacity, Ordering::Release);
        self.counters.record_resize(occupancy - keep);

        #[cfg(feature = "logging")]
        tracing::debug!(
            old_capacity,
            new_capacity,
            kept = keep,
            shed = occupancy - keep,
            "pool resized"
        );
    }

    /// Returns the pool's current capacity.
    pub fn capacity(&self) -> usize {
        self.capacity.load(Ordering::Acquire)
    }

    /// Returns the number of objects currently stored.
    pub fn len(&self) -> usize {
        self.occupancy.load(Ordering::Acquire)
    }

    /// Returns `true` if no objects are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the pool is at capacity.
    ///
    /// Advisory under concurrency: occupancy and capacity are read as two
    /// separate loads, and a resize can complete between them. The answer
    /// is exact only while no other thread is resizing.
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Returns a snapshot of the pool's usage counters.
    pub fn stats(&self) -> PoolStats {
        self.counters.snapshot()
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
