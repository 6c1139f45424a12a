//! # Configuration
//!
//! Deployment-level settings for the lifecycle precompile.

use crate::domain::entities::ContractStatus;
use crate::domain::policy::ZeroCallerPolicy;
use crate::domain::value_objects::Address;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Default address of the lifecycle precompile.
pub const DEFAULT_PRECOMPILE_ADDRESS: Address = Address::from_low_u64_be(0x1007);

/// Default account table prefix.
pub const DEFAULT_TABLE_PREFIX: &str = "c_";

/// Lifecycle precompile configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Address the precompile is registered at.
    pub precompile_address: Address,
    /// Prefix of account table names.
    pub table_prefix: String,
    /// Treatment of the zero caller address.
    pub zero_caller_policy: ZeroCallerPolicy,
    /// `getStatus` texts, indexed by [`ContractStatus`].
    pub status_descriptions: Vec<String>,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            precompile_address: DEFAULT_PRECOMPILE_ADDRESS,
            table_prefix: DEFAULT_TABLE_PREFIX.to_string(),
            zero_caller_policy: ZeroCallerPolicy::default(),
            status_descriptions: ContractStatus::ALL
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
        }
    }
}

impl LifecycleConfig {
    /// Parses and validates a JSON document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Parse failures and [`LifecycleConfig::validate`] failures.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Empty table prefix or a description table of the wrong size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_prefix.is_empty() {
            return Err(ConfigError::EmptyTablePrefix);
        }
        if self.status_descriptions.len() != ContractStatus::COUNT {
            return Err(ConfigError::DescriptionCount {
                expected: ContractStatus::COUNT,
                actual: self.status_descriptions.len(),
            });
        }
        Ok(())
    }

    /// Description for `status`.
    #[must_use]
    pub fn description(&self, status: ContractStatus) -> &str {
        self.status_descriptions
            .get(status.index())
            .map_or(status.name(), String::as_str)
    }
}
