// Copyright (c) 2025 Lanai Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the probe sets.

use serde::{Deserialize, Serialize};

use crate::data_structures::probe_set::error::{ProbeSetError, Result};

/// Configuration for a fixed-capacity probe set.
///
/// The capacity is fixed for the lifetime of the set. There is no load factor
/// and no growth policy: once `capacity` elements are stored, further inserts
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSetConfig {
    /// Number of slots in the table, which is also the maximum element count.
    pub capacity: usize,
}

impl ProbeSetConfig {
    /// Creates a new configuration with the given capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of slots to allocate.
    ///
    /// # Returns
    ///
    /// A new `ProbeSetConfig` instance.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Sets the capacity of the table.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of slots to allocate.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks that the configuration describes a usable set.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ProbeSetError::ZeroCapacity)` if no slots were requested
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ProbeSetError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for ProbeSetConfig {
    fn default() -> Self {
        Self {
            capacity: 1_024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProbeSetConfig::default();
        assert_eq!(config.capacity, 1_024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ProbeSetConfig::default().with_capacity(16);
        assert_eq!(config, ProbeSetConfig::new(16));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = ProbeSetConfig::new(0);
        assert_eq!(config.validate(), Err(ProbeSetError::ZeroCapacity));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: ProbeSetConfig = toml::from_str("capacity = 32").unwrap();
        assert_eq!(config.capacity, 32);

        // Missing fields fall back to the defaults
        let config: ProbeSetConfig = toml::from_str("").unwrap();
        assert_eq!(config, ProbeSetConfig::default());
    }

    #[test]
    fn test_serialize_to_json() {
        let json = serde_json::to_string(&ProbeSetConfig::new(8)).unwrap();
        assert_eq!(json, r#"{"capacity":8}"#);
    }
}
