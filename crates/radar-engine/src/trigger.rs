//! Trigger evaluation and derived cooldown state.
//!
//! There is no stored ACTIVE/COOLDOWN flag. The phase is recomputed from
//! `last_trigger_time` on every evaluation.

use radar_core::config::TriggerConfig;
use radar_core::models::TriggerReason;

use crate::state::GroupHeatState;

/// Derived trigger phase of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPhase {
    Active,
    Cooldown,
}

pub fn phase(last_trigger_time: Option<f64>, now: f64, cooldown_secs: f64) -> TriggerPhase {
    match last_trigger_time {
        Some(last) if now - last <= cooldown_secs => TriggerPhase::Cooldown,
        _ => TriggerPhase::Active,
    }
}

/// Seconds left before the group is armed again; 0 when already armed.
pub fn remaining_cooldown(last_trigger_time: Option<f64>, now: f64, cooldown_secs: f64) -> f64 {
    match last_trigger_time {
        Some(last) => (cooldown_secs - (now - last)).max(0.0),
        None => 0.0,
    }
}

/// Check trigger conditions in priority order, ignoring cooldown.
pub fn evaluate(state: &GroupHeatState, config: &TriggerConfig) -> Option<TriggerReason> {
    let window = state.window();
    if window.score() > config.min_velocity_score {
        if let Some(ratio) = window.ratio() {
            if ratio >= config.velocity_threshold {
                return Some(TriggerReason::Velocity);
            }
        }
    }

    if state.score() >= state.trigger_threshold() as f64 {
        return Some(TriggerReason::Threshold);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_triggered_is_active_at_time_zero() {
        assert_eq!(phase(None, 0.0, 600.0), TriggerPhase::Active);
        assert_eq!(remaining_cooldown(None, 0.0, 600.0), 0.0);
    }

    #[test]
    fn cooldown_boundary_is_strict() {
        assert_eq!(phase(Some(0.0), 600.0, 600.0), TriggerPhase::Cooldown);
        assert_eq!(phase(Some(0.0), 600.5, 600.0), TriggerPhase::Active);
        assert_eq!(remaining_cooldown(Some(100.0), 200.0, 600.0), 500.0);
        assert_eq!(remaining_cooldown(Some(100.0), 2_000.0, 600.0), 0.0);
    }
}
