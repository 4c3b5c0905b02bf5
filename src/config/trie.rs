//! Trie configuration module.
//!
//! This module defines how the trie built by the workload driver is shaped:
//! key normalisation, key length limits, arena pre-allocation and the value
//! handed back on a lookup miss.

use super::{ConfigResult, Validate};
use crate::data_structures::LalaTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest number of node slots the driver may reserve up front.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Trie settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieSettings {
    /// Whether keys are compared case-sensitively
    pub case_sensitive: bool,

    /// Maximum key length in characters (None for unlimited)
    pub max_key_length: Option<usize>,

    /// Number of node slots to reserve up front
    pub initial_capacity: usize,

    /// Value returned on a lookup miss (None for no value)
    pub default_value: Option<String>,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_key_length: None,
            initial_capacity: 0,
            default_value: None,
        }
    }
}

impl TrieSettings {
    /// Converts these settings into the trie's own configuration.
    pub fn to_trie_config(&self) -> LalaTrieConfig {
        let config = LalaTrieConfig::new()
            .with_case_sensitive(self.case_sensitive)
            .with_initial_capacity(self.initial_capacity);

        match self.max_key_length {
            Some(max_key_length) => config.with_max_key_length(max_key_length),
            None => config,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_length == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_key_length must be greater than 0".to_string(),
            ));
        }

        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.initial_capacity".to_string(),
                message: format!("must not exceed {MAX_INITIAL_CAPACITY}"),
            });
        }

        Ok(())
    }
}
