use std::collections::HashMap;

/// Recently active senders: `user_id -> last_speak_timestamp`.
#[derive(Debug, Clone, Default)]
pub struct ActiveParticipants {
    last_seen: HashMap<String, f64>,
}

impl ActiveParticipants {
    /// Drop everyone who has been quiet for longer than `window_secs`.
    pub fn evict_stale(&mut self, now: f64, window_secs: f64) {
        self.last_seen.retain(|_, ts| now - *ts <= window_secs);
    }

    /// Record that `user_id` spoke at `now`. Returns true if they were not active.
    pub fn touch(&mut self, user_id: &str, now: f64) -> bool {
        match self.last_seen.get_mut(user_id) {
            Some(ts) => {
                *ts = now;
                false
            }
            None => {
                self.last_seen.insert(user_id.to_string(), now);
                true
            }
        }
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.last_seen.contains_key(user_id)
    }

    pub fn len(&self) -> usize {
        self.last_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_seen.is_empty()
    }
}
