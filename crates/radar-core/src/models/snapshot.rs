use serde::{Deserialize, Serialize};

/// Point-in-time view of a group for admin/status display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatSnapshot {
    /// Decayed score, rounded to one decimal place.
    pub score: f64,
    pub max_score_cap: u32,
    pub trigger_threshold: u32,
    /// Seconds until the group may trigger again; 0 when armed.
    pub remaining_cooldown: f64,
}

impl HeatSnapshot {
    pub fn is_cooling_down(&self) -> bool {
        self.remaining_cooldown > 0.0
    }
}
