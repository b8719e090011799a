//! poolrs
//!
//! A concurrent pool of reusable objects over a fixed-length ring buffer.
//!
//! `poolrs` amortizes the cost of constructing expensive instances by
//! recycling them across callers. Objects are returned with [`Pool::push`]
//! and borrowed with [`Pool::pull`]; when the pool is empty, `pull`
//! constructs a fresh instance through the factory supplied at creation
//! instead of blocking. The pool can be resized live, preserving the oldest
//! entries in FIFO order, without any caller observing a half-updated state.
//!
//! The crate intentionally:
//! - does NOT return borrowed objects automatically on drop
//! - does NOT reset or validate objects handed back to it
//! - does NOT block or apply backpressure on any path
//! - does NOT evict idle objects by age
//!
//! It only does one thing: **recycle objects, FIFO, under concurrency**
//!
//! # Single-threaded
//!
//! ```
//! use poolrs::Pool;
//!
//! let pool = Pool::new(2, || String::with_capacity(1024));
//!
//! pool.push(String::from("recycled"));
//! assert_eq!(pool.pull(), "recycled");
//!
//! // Empty pool: pull falls back to the factory.
//! assert_eq!(pool.pull().capacity(), 1024);
//! ```
//!
//! # Concurrent
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use poolrs::Pool;
//!
//! let pool = Arc::new(Pool::new(64, || Vec::<u8>::with_capacity(4096)));
//!
//! let handles: Vec<_> = (0..8)
//!     .map(|_| {
//!         let pool = Arc::clone(&pool);
//!         thread::spawn(move || {
//!             let mut buf = pool.pull();
//!             buf.extend_from_slice(b"work");
//!             buf.clear();
//!             pool.push(buf);
//!         })
//!     })
//!     .collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod stats;

mod pool; // ring storage + concurrent protocol

//
// Public surface (intentionally tiny)
//

pub use config::{DEFAULT_CAPACITY, PoolConfig};
pub use error::PoolError;
pub use pool::Pool;
pub use stats::PoolStats;
