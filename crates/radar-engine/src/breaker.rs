//! Global rate limit on downstream summarization across all groups.
//!
//! Independent of per-group cooldown: a tripped breaker drops the
//! downstream action but never re-arms or delays a group.

use std::collections::VecDeque;
use std::sync::Mutex;

use radar_core::config::BreakerConfig;
use tracing::warn;

#[derive(Debug)]
pub struct TriggerBreaker {
    config: BreakerConfig,
    recent: Mutex<VecDeque<f64>>,
}

impl TriggerBreaker {
    pub fn new(config: BreakerConfig) -> Self {
        Self {
            config,
            recent: Mutex::new(VecDeque::new()),
        }
    }

    /// Take a slot in the rolling window if one is free.
    /// `max_triggers_per_window == 0` disables the breaker.
    pub fn try_acquire(&self, now: f64) -> bool {
        if self.config.max_triggers_per_window == 0 {
            return true;
        }
        let window = self.config.window_secs as f64;
        let mut recent = self.recent.lock().unwrap_or_else(|p| p.into_inner());

        while recent.front().is_some_and(|ts| now - *ts >= window) {
            recent.pop_front();
        }

        if recent.len() < self.config.max_triggers_per_window as usize {
            recent.push_back(now);
            true
        } else {
            warn!(
                in_window = recent.len(),
                window_secs = self.config.window_secs,
                "trigger breaker open, skipping downstream action"
            );
            false
        }
    }
}
