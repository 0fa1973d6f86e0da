use std::fmt;

use serde::{Deserialize, Serialize};

use super::BufferedMessage;

/// Which condition caused a trigger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TriggerReason {
    /// Current window outpaced the previous one.
    Velocity,
    /// Absolute score reached the trigger threshold.
    Threshold,
}

impl fmt::Display for TriggerReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Velocity => f.write_str("velocity"),
            Self::Threshold => f.write_str("threshold"),
        }
    }
}

/// Result of ingesting one message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestOutcome {
    pub triggered: bool,
    pub reason: Option<TriggerReason>,
    /// Buffered context at trigger time, oldest first. Only set when `triggered`.
    pub context: Option<Vec<BufferedMessage>>,
}

impl IngestOutcome {
    pub fn quiet() -> Self {
        Self::default()
    }

    pub fn fired(reason: TriggerReason, context: Vec<BufferedMessage>) -> Self {
        Self {
            triggered: true,
            reason: Some(reason),
            context: Some(context),
        }
    }

    pub fn into_parts(self) -> (bool, Option<Vec<BufferedMessage>>) {
        (self.triggered, self.context)
    }
}
