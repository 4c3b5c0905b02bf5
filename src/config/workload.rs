//! Workload configuration module.
//!
//! This module defines the synthetic workload run by the `run` command: how
//! many keys are generated, what they look like and what value they store.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest supported number of generated keys.
const MAX_KEY_COUNT: usize = 100_000_000;

/// Workload settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadSettings {
    /// Number of keys to insert and read back
    pub key_count: usize,

    /// Prefix of every generated key, followed by its sequence number
    pub key_prefix: String,

    /// Value stored under every key
    pub value: String,

    /// Whether to time the same workload against a `HashMap`
    pub compare_hash_map: bool,
}

impl Default for WorkloadSettings {
    fn default() -> Self {
        Self {
            key_count: 100_000,
            key_prefix: "item ".to_string(),
            value: "sweet".to_string(),
            compare_hash_map: true,
        }
    }
}

impl Validate for WorkloadSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.key_count == 0 {
            return Err(ConfigError::ValidationError(
                "key_count must be greater than 0".to_string(),
            ));
        }

        if self.key_count > MAX_KEY_COUNT {
            return Err(ConfigError::ValueOutOfRange {
                key: "workload.key_count".to_string(),
                message: format!("must not exceed {MAX_KEY_COUNT}"),
            });
        }

        Ok(())
    }
}
