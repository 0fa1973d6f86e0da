//! Inbound messages and the buffered context handed to summarization.

use serde::{Deserialize, Serialize};

/// A message that already passed the noise filter and has a base score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomingMessage {
    pub group_id: String,
    pub base_score: u32,
    pub sender_id: String,
    pub sender_name: String,
    pub content: String,
    /// Seconds since epoch. `None` means "now" according to the engine clock.
    pub timestamp: Option<f64>,
}

impl IncomingMessage {
    pub fn new(
        group_id: impl Into<String>,
        base_score: u32,
        sender_id: impl Into<String>,
        sender_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            base_score,
            sender_id: sender_id.into(),
            sender_name: sender_name.into(),
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn at(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// One entry of a group's context buffer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BufferedMessage {
    #[serde(rename = "ts")]
    pub timestamp: f64,
    #[serde(rename = "sender")]
    pub sender_name: String,
    pub content: String,
}

/// Render buffered messages as `sender: content` lines, oldest first.
pub fn format_history(messages: &[BufferedMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.sender_name, m.content))
        .collect::<Vec<_>>()
        .join("\n")
}
