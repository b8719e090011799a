//! Configuration for pool behavior.
//!
//! - [`PoolConfig`] - Capacity and pre-warming

use crate::error::PoolError;

/// Default pool capacity.
pub const DEFAULT_CAPACITY: usize = 32;

/// Configuration for an object pool.
///
/// Constraints: `capacity` must be non-zero and `prewarm <= capacity`.
///
/// Pre-warming constructs `prewarm` instances through the factory at pool
/// creation so the first pulls are served from storage instead of paying
/// construction cost on the hot path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    capacity: usize,
    prewarm: usize,
}

impl PoolConfig {
    /// Creates a new configuration with the given capacity.
    ///
    /// Returns an error if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, PoolError> {
        if capacity == 0 {
            return Err(PoolError::InvalidConfig {
                message: "capacity must be non-zero",
            });
        }

        Ok(Self {
            capacity,
            prewarm: 0,
        })
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the number of instances to construct upfront.
    pub fn with_prewarm(mut self, prewarm: usize) -> Self {
        self.prewarm = prewarm;
        self
    }

    /// Returns the capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of instances constructed upfront.
    pub fn prewarm(&self) -> usize {
        self.prewarm
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.capacity == 0 {
            return Err(PoolError::InvalidConfig {
                message: "capacity must be non-zero",
            });
        }

        if self.prewarm > self.capacity {
            return Err(PoolError::InvalidConfig {
                message: "prewarm cannot exceed capacity",
            });
        }

        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            prewarm: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PoolConfig::default();
        assert_eq!(config.capacity(), DEFAULT_CAPACITY);
        assert_eq!(config.prewarm(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_valid() {
        let config = PoolConfig::new(16).unwrap();
        assert_eq!(config.capacity(), 16);
    }

    #[test]
    fn test_config_zero_capacity() {
        assert!(PoolConfig::new(0).is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = PoolConfig::new(8).unwrap().with_prewarm(4);
        assert_eq!(config.capacity(), 8);
        assert_eq!(config.prewarm(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_prewarm_exceeds_capacity() {
        let config = PoolConfig::new(4).unwrap().with_prewarm(5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_after_builder() {
        let config = PoolConfig::default().with_capacity(0);
        assert!(config.validate().is_err());
    }
}
