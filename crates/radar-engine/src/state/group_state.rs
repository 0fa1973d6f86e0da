//! GroupHeatState — score, decay, velocity windows, participants, context.

use radar_core::config::defaults::SECONDS_PER_MINUTE;
use radar_core::config::{ScoringConfig, TriggerConfig};
use radar_core::models::BufferedMessage;
use tracing::debug;

use super::{ActiveParticipants, MessageBuffer, VelocityWindow};

/// Heat bookkeeping for a single group.
///
/// Created lazily on the first message of a group and mutated only through
/// the engine, which serializes access per group.
#[derive(Debug, Clone)]
pub struct GroupHeatState {
    group_id: String,
    score: f64,
    max_score_cap: u32,
    trigger_threshold: u32,
    last_update_time: f64,
    last_trigger_time: Option<f64>,
    window: VelocityWindow,
    participants: ActiveParticipants,
    buffer: MessageBuffer,
}

impl GroupHeatState {
    pub fn new(group_id: impl Into<String>, trigger: &TriggerConfig, now: f64) -> Self {
        Self {
            group_id: group_id.into(),
            score: 0.0,
            max_score_cap: trigger.max_score_cap,
            trigger_threshold: trigger.trigger_threshold,
            last_update_time: now,
            last_trigger_time: None,
            window: VelocityWindow::new(now),
            participants: ActiveParticipants::default(),
            buffer: MessageBuffer::default(),
        }
    }

    /// Restore the last trigger time from persistence.
    pub fn with_last_trigger_time(mut self, last_trigger_time: Option<f64>) -> Self {
        self.last_trigger_time = last_trigger_time;
        self
    }

    /// Linear decay since the last touch. Time never runs backwards here:
    /// an older `now` decays nothing and leaves `last_update_time` alone.
    pub fn apply_decay(&mut self, now: f64, rate_per_minute: u32) {
        let elapsed = now - self.last_update_time;
        if elapsed <= 0.0 {
            return;
        }
        let minutes = elapsed / SECONDS_PER_MINUTE;
        self.score = (self.score - minutes * rate_per_minute as f64).max(0.0);
        self.last_update_time = now;
    }

    /// Score one message and return the increment that was applied.
    ///
    /// Order matters: stale participants are evicted before the new-face
    /// check, decay runs before the increment lands, and the window rotates
    /// before the increment is added to it.
    pub fn add_score(
        &mut self,
        base_score: u32,
        sender_id: &str,
        now: f64,
        scoring: &ScoringConfig,
    ) -> f64 {
        self.participants
            .evict_stale(now, scoring.active_window_seconds as f64);

        let mut increment = base_score as f64;
        if self.participants.touch(sender_id, now) {
            debug!(group_id = %self.group_id, sender_id, bonus = scoring.new_face_bonus, "new face bonus");
            increment += scoring.new_face_bonus as f64;
        }
        let active = self.participants.len();
        increment += active as f64 * scoring.crowd_weight as f64;

        self.apply_decay(now, scoring.decay_rate_per_minute);

        self.window
            .rotate_if_expired(now, scoring.window_size_seconds as f64);
        self.window.add(increment);

        self.score = (self.score + increment).min(self.max_score_cap as f64);

        debug!(
            group_id = %self.group_id,
            score = self.score,
            increment,
            active,
            window = self.window.score(),
            prev_window = self.window.prev_score(),
            "group score updated"
        );
        increment
    }

    pub fn push_message(
        &mut self,
        sender_name: &str,
        content: &str,
        now: f64,
        scoring: &ScoringConfig,
    ) {
        self.buffer.push(
            BufferedMessage {
                timestamp: now,
                sender_name: sender_name.to_string(),
                content: content.to_string(),
            },
            scoring.active_window_seconds as f64,
            scoring.max_buffered_messages,
        );
    }

    pub fn mark_triggered(&mut self, now: f64) {
        self.last_trigger_time = Some(now);
    }

    /// Zero the score only. Cooldown, windows, participants and buffer are untouched.
    pub fn reset_score(&mut self) {
        self.score = 0.0;
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn max_score_cap(&self) -> u32 {
        self.max_score_cap
    }

    pub fn trigger_threshold(&self) -> u32 {
        self.trigger_threshold
    }

    pub fn last_update_time(&self) -> f64 {
        self.last_update_time
    }

    pub fn last_trigger_time(&self) -> Option<f64> {
        self.last_trigger_time
    }

    pub fn window(&self) -> &VelocityWindow {
        &self.window
    }

    pub fn participants(&self) -> &ActiveParticipants {
        &self.participants
    }

    pub fn buffer(&self) -> &MessageBuffer {
        &self.buffer
    }
}
