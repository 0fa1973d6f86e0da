//! Scoring, decay, and buffering configuration.

use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Per-group score bookkeeping settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub decay_rate_per_minute: u32,
    pub window_size_seconds: u64,
    /// Recency bound for both the participant set and the message buffer.
    pub active_window_seconds: u64,
    pub crowd_weight: u32,
    pub new_face_bonus: u32,
    /// Optional count cap on the message buffer. `None` bounds it by time only.
    pub max_buffered_messages: Option<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            decay_rate_per_minute: DEFAULT_DECAY_RATE_PER_MINUTE,
            window_size_seconds: DEFAULT_WINDOW_SIZE_SECONDS,
            active_window_seconds: DEFAULT_ACTIVE_WINDOW_SECONDS,
            crowd_weight: DEFAULT_CROWD_WEIGHT,
            new_face_bonus: DEFAULT_NEW_FACE_BONUS,
            max_buffered_messages: None,
        }
    }
}
