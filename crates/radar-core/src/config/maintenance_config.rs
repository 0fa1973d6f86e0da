use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Zombie reaping settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MaintenanceConfig {
    pub max_idle_days: u64,
    pub sweep_interval_secs: u64,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            max_idle_days: DEFAULT_MAX_IDLE_DAYS,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

impl MaintenanceConfig {
    pub fn max_idle(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.max_idle_days.saturating_mul(SECONDS_PER_DAY))
    }

    pub fn sweep_interval(&self) -> std::time::Duration {
        // tokio::time::interval panics on zero and on deadlines past Instant's range.
        std::time::Duration::from_secs(self.sweep_interval_secs.clamp(1, MAX_SWEEP_INTERVAL_SECS))
    }
}
