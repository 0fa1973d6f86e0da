pub mod defaults;
pub mod maintenance_config;
pub mod persistence_config;
pub mod scoring_config;
pub mod trigger_config;

use serde::{Deserialize, Serialize};

use crate::errors::RadarResult;

pub use maintenance_config::MaintenanceConfig;
pub use persistence_config::PersistenceConfig;
pub use scoring_config::ScoringConfig;
pub use trigger_config::{BreakerConfig, TriggerConfig};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RadarConfig {
    pub trigger: TriggerConfig,
    pub scoring: ScoringConfig,
    pub maintenance: MaintenanceConfig,
    pub persistence: PersistenceConfig,
}

impl RadarConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> RadarResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from a JSON string, falling back to defaults for missing fields.
    pub fn from_json(json_str: &str) -> RadarResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}
