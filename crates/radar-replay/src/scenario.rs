//! Scenario files and the replay loop.
//!
//! A scenario is a JSON array of events:
//! `{"time_offset": 12.5, "group": "g1", "user": "u1", "name": "Alice", "content": "...", "score": 3}`.
//! `name` defaults to `user`, `group` to `group_default`, `score` to the
//! replay's default score.

use std::sync::Arc;

use radar_core::models::{format_history, IncomingMessage, TriggerReason};
use radar_core::traits::{Clock, ManualClock};
use radar_engine::{HeatEngine, TriggerBreaker};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioEvent {
    #[serde(default)]
    pub time_offset: f64,
    #[serde(default = "default_group")]
    pub group: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: Option<u32>,
}

fn default_group() -> String {
    "group_default".to_string()
}

fn default_user() -> String {
    "unknown_user".to_string()
}

/// Parse a scenario and sort it by `time_offset` (stable for ties).
pub fn parse_scenario(raw: &str) -> serde_json::Result<Vec<ScenarioEvent>> {
    let mut events: Vec<ScenarioEvent> = serde_json::from_str(raw)?;
    events.sort_by(|a, b| a.time_offset.total_cmp(&b.time_offset));
    Ok(events)
}

/// One trigger observed during a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayTrigger {
    pub time_offset: f64,
    pub group: String,
    pub reason: TriggerReason,
    pub context_len: usize,
    pub history: String,
    /// False when the breaker dropped the downstream action.
    pub dispatched: bool,
}

pub struct Replay {
    engine: HeatEngine,
    clock: Arc<ManualClock>,
    breaker: Option<TriggerBreaker>,
    start: f64,
    default_score: u32,
}

impl Replay {
    pub fn new(
        engine: HeatEngine,
        clock: Arc<ManualClock>,
        breaker: Option<TriggerBreaker>,
        default_score: u32,
    ) -> Self {
        let start = clock.now();
        Self {
            engine,
            clock,
            breaker,
            start,
            default_score,
        }
    }

    pub fn engine(&self) -> &HeatEngine {
        &self.engine
    }

    /// Feed every event through the engine, advancing the clock to each
    /// event's simulated time first.
    pub fn run(&self, events: &[ScenarioEvent]) -> Vec<ReplayTrigger> {
        let mut triggers = Vec::new();

        for event in events {
            let now = self.start + event.time_offset;
            self.clock.set(now);

            let name = event.name.clone().unwrap_or_else(|| event.user.clone());
            let message = IncomingMessage::new(
                event.group.clone(),
                event.score.unwrap_or(self.default_score),
                event.user.clone(),
                name,
                event.content.clone(),
            );

            let outcome = self.engine.ingest(message);
            let (Some(reason), Some(context)) = (outcome.reason, outcome.context) else {
                continue;
            };

            let dispatched = self
                .breaker
                .as_ref()
                .map_or(true, |breaker| breaker.try_acquire(now));
            info!(
                offset = event.time_offset,
                group = %event.group,
                %reason,
                context = context.len(),
                dispatched,
                "replay trigger"
            );
            triggers.push(ReplayTrigger {
                time_offset: event.time_offset,
                group: event.group.clone(),
                reason,
                context_len: context.len(),
                history: format_history(&context),
                dispatched,
            });
        }

        triggers
    }
}
