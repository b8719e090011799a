//! Error types for poolrs.

use std::fmt;

/// Errors that can occur when building a pool.
///
/// Capacity-boundary conditions during operation are not errors: a full
/// pool silently discards pushed objects and an empty pool constructs
/// fresh ones. The only fallible surface is configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for PoolError {}
