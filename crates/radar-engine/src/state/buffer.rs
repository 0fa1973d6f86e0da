use std::collections::VecDeque;

use radar_core::models::BufferedMessage;

/// Time-bounded context buffer, oldest first.
#[derive(Debug, Clone, Default)]
pub struct MessageBuffer {
    messages: VecDeque<BufferedMessage>,
}

impl MessageBuffer {
    /// Append a message, then evict from the front everything older than
    /// `window_secs`. When `max_len` is set the buffer is also trimmed to it.
    ///
    /// Out-of-order input is accepted but its timestamp is clamped up to the
    /// newest entry, keeping the buffer sorted oldest first.
    pub fn push(
        &mut self,
        mut message: BufferedMessage,
        window_secs: f64,
        max_len: Option<usize>,
    ) {
        if let Some(newest) = self.messages.back() {
            message.timestamp = message.timestamp.max(newest.timestamp);
        }
        let cutoff = message.timestamp - window_secs;
        self.messages.push_back(message);

        while self
            .messages
            .front()
            .is_some_and(|oldest| oldest.timestamp < cutoff)
        {
            self.messages.pop_front();
        }

        if let Some(max_len) = max_len {
            while self.messages.len() > max_len {
                self.messages.pop_front();
            }
        }
    }

    pub fn to_vec(&self) -> Vec<BufferedMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
