//! Trigger subsystem configuration.

use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Configuration for trigger evaluation and cooldown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TriggerConfig {
    // Score ceiling and absolute trigger level
    pub max_score_cap: u32,
    pub trigger_threshold: u32,

    // Velocity (current window / previous window)
    pub velocity_threshold: f64,
    pub min_velocity_score: f64,

    pub cooldown_minutes: u64,

    /// Global limit on downstream actions across all groups.
    pub breaker: BreakerConfig,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            max_score_cap: DEFAULT_MAX_SCORE_CAP,
            trigger_threshold: DEFAULT_TRIGGER_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            min_velocity_score: DEFAULT_MIN_VELOCITY_SCORE,
            cooldown_minutes: DEFAULT_COOLDOWN_MINUTES,
            breaker: BreakerConfig::default(),
        }
    }
}

impl TriggerConfig {
    pub fn cooldown_seconds(&self) -> f64 {
        self.cooldown_minutes as f64 * SECONDS_PER_MINUTE
    }
}

/// Rolling-window rate limit on triggers handed downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BreakerConfig {
    pub max_triggers_per_window: u32,
    pub window_secs: u64,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            max_triggers_per_window: DEFAULT_BREAKER_MAX_TRIGGERS,
            window_secs: DEFAULT_BREAKER_WINDOW_SECS,
        }
    }
}
