//! Rotating fixed-size buckets used for velocity detection.

use tracing::debug;

#[derive(Debug, Clone)]
pub struct VelocityWindow {
    start: f64,
    score: f64,
    prev_score: f64,
}

impl VelocityWindow {
    pub fn new(start: f64) -> Self {
        Self {
            start,
            score: 0.0,
            prev_score: 0.0,
        }
    }

    /// Rotate at most once if the current bucket is older than `size_secs`.
    /// Returns true when a rotation happened.
    pub fn rotate_if_expired(&mut self, now: f64, size_secs: f64) -> bool {
        let diff = now - self.start;
        if diff > size_secs {
            debug!(diff, prev = self.score, "rotating velocity window");
            self.prev_score = self.score;
            self.score = 0.0;
            self.start = now;
            return true;
        }
        false
    }

    pub fn add(&mut self, amount: f64) {
        self.score += amount;
    }

    /// `current / previous`, or `None` without a real previous baseline.
    pub fn ratio(&self) -> Option<f64> {
        if self.prev_score > 0.0 {
            Some(self.score / self.prev_score)
        } else {
            None
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn prev_score(&self) -> f64 {
        self.prev_score
    }
}
