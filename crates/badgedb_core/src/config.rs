//! Store configuration.

use crate::error::{CoreError, CoreResult};

/// Configuration for opening a card store.
///
/// The defaults match the classic layout: 4-byte UIDs, 20 slots, a
/// 1024-byte reserved region.
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    /// Width of one UID record in bytes.
    pub uid_size: usize,

    /// Maximum number of records the region holds.
    pub capacity: usize,

    /// Size of the reserved backend region in bytes.
    pub region_size: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uid_size: 4,
            capacity: 20,
            region_size: 1024,
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the UID width in bytes.
    #[must_use]
    pub const fn uid_size(mut self, size: usize) -> Self {
        self.uid_size = size;
        self
    }

    /// Sets the record capacity.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the reserved region size in bytes.
    #[must_use]
    pub const fn region_size(mut self, size: u32) -> Self {
        self.region_size = size;
        self
    }

    /// Returns the number of bytes the layout occupies: sentinel, count,
    /// and the packed record array.
    #[must_use]
    pub const fn layout_size(&self) -> u32 {
        2 + (self.uid_size * self.capacity) as u32
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if:
    /// - `uid_size` is zero
    /// - `capacity` is zero or exceeds 255 (the count field is one byte)
    /// - the region is smaller than the layout requires
    pub fn validate(&self) -> CoreResult<()> {
        if self.uid_size == 0 {
            return Err(CoreError::invalid_config("uid_size must be at least 1"));
        }
        if self.capacity == 0 {
            return Err(CoreError::invalid_config("capacity must be at least 1"));
        }
        if self.capacity > 255 {
            return Err(CoreError::invalid_config(
                "capacity must fit in the one-byte count field (max 255)",
            ));
        }
        if self.region_size < self.layout_size() {
            return Err(CoreError::RegionTooSmall {
                required: self.layout_size(),
                actual: self.region_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = StoreConfig::default();
        assert_eq!(config.uid_size, 4);
        assert_eq!(config.capacity, 20);
        assert_eq!(config.region_size, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_pattern() {
        let config = StoreConfig::new().uid_size(7).capacity(3).region_size(64);

        assert_eq!(config.uid_size, 7);
        assert_eq!(config.capacity, 3);
        assert_eq!(config.layout_size(), 23);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_uid_size_rejected() {
        let config = StoreConfig::new().uid_size(0);
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn oversized_capacity_rejected() {
        let config = StoreConfig::new().capacity(256).region_size(4096);
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn undersized_region_rejected() {
        // 4 * 20 + 2 = 82 bytes needed
        let config = StoreConfig::new().region_size(81);
        assert!(matches!(
            config.validate(),
            Err(CoreError::RegionTooSmall {
                required: 82,
                actual: 81
            })
        ));
    }
}
