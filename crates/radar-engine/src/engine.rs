//! HeatEngine — owns every group's heat state and the trigger store.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use radar_core::config::RadarConfig;
use radar_core::errors::RadarResult;
use radar_core::models::{BufferedMessage, HeatSnapshot, IncomingMessage, IngestOutcome};
use radar_core::traits::Clock;
use tracing::{debug, info, warn};

use crate::state::GroupHeatState;
use crate::store::PersistentTriggerStore;
use crate::trigger::{self, TriggerPhase};

/// The heat scoring and trigger decision engine.
///
/// Group states live in a `DashMap`; holding an entry guard serializes all
/// mutation of that group while other groups proceed in parallel. Every
/// time-dependent operation reads the one injected clock unless the message
/// carries its own timestamp.
pub struct HeatEngine {
    config: RadarConfig,
    clock: Arc<dyn Clock>,
    groups: DashMap<String, GroupHeatState>,
    store: PersistentTriggerStore,
}

impl HeatEngine {
    /// Create an engine persisting to `config.persistence.path`.
    pub fn new(config: RadarConfig, clock: Arc<dyn Clock>) -> Self {
        let store = PersistentTriggerStore::open(config.persistence.path.clone());
        Self::with_store(config, clock, store)
    }

    pub fn with_store(
        config: RadarConfig,
        clock: Arc<dyn Clock>,
        store: PersistentTriggerStore,
    ) -> Self {
        Self {
            config,
            clock,
            groups: DashMap::new(),
            store,
        }
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn store(&self) -> &PersistentTriggerStore {
        &self.store
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Score one message and decide whether the group triggers.
    ///
    /// A trigger fires at most once per cooldown period; when it does the
    /// new trigger time is persisted before returning the buffered context.
    pub fn ingest(&self, message: IncomingMessage) -> IngestOutcome {
        let scoring = &self.config.scoring;
        let trigger_config = &self.config.trigger;
        let cooldown = trigger_config.cooldown_seconds();
        let stamp = || message.timestamp.unwrap_or_else(|| self.clock.now());

        let (fired, now) = {
            let mut state = self
                .groups
                .entry(message.group_id.clone())
                .or_insert_with(|| self.hydrate(&message.group_id, stamp()));
            // Read the clock under the group guard so clock-stamped messages
            // for one group are stamped in the order they are applied.
            let now = stamp();

            state.add_score(message.base_score, &message.sender_id, now, scoring);
            state.push_message(&message.sender_name, &message.content, now, scoring);

            let Some(reason) = trigger::evaluate(&state, trigger_config) else {
                return IngestOutcome::quiet();
            };

            if trigger::phase(state.last_trigger_time(), now, cooldown) == TriggerPhase::Cooldown {
                debug!(
                    group_id = %message.group_id,
                    %reason,
                    score = state.score(),
                    "trigger suppressed by cooldown"
                );
                return IngestOutcome::quiet();
            }

            state.mark_triggered(now);
            info!(
                group_id = %message.group_id,
                %reason,
                score = state.score(),
                window = state.window().score(),
                prev_window = state.window().prev_score(),
                "group triggered"
            );
            (IngestOutcome::fired(reason, state.buffer().to_vec()), now)
        };

        // Group guard is released; persistence never holds up other groups.
        self.store.record_trigger(&message.group_id, now);
        if let Err(e) = self.store.flush() {
            warn!(group_id = %message.group_id, error = %e, "failed to persist trigger time");
        }
        fired
    }

    /// Decayed view of a group as of the engine clock.
    ///
    /// A group with no live state but a persisted trigger reports a zero
    /// score and its remaining cooldown. Unknown groups yield `None`.
    pub fn snapshot(&self, group_id: &str) -> Option<HeatSnapshot> {
        let now = self.clock.now();
        let trigger_config = &self.config.trigger;
        let cooldown = trigger_config.cooldown_seconds();

        if let Some(mut state) = self.groups.get_mut(group_id) {
            state.apply_decay(now, self.config.scoring.decay_rate_per_minute);
            return Some(HeatSnapshot {
                score: round1(state.score()),
                max_score_cap: state.max_score_cap(),
                trigger_threshold: state.trigger_threshold(),
                remaining_cooldown: trigger::remaining_cooldown(
                    state.last_trigger_time(),
                    now,
                    cooldown,
                ),
            });
        }

        let last = self.store.last_trigger_time(group_id)?;
        Some(HeatSnapshot {
            score: 0.0,
            max_score_cap: trigger_config.max_score_cap,
            trigger_threshold: trigger_config.trigger_threshold,
            remaining_cooldown: trigger::remaining_cooldown(Some(last), now, cooldown),
        })
    }

    /// Zero a group's score. Cooldown and context are left as they are.
    /// Returns false if the group has no state.
    pub fn reset(&self, group_id: &str) -> bool {
        match self.groups.get_mut(group_id) {
            Some(mut state) => {
                state.reset_score();
                info!(group_id, "score manually reset");
                true
            }
            None => false,
        }
    }

    /// Drop every group idle for longer than `max_idle`. Returns how many were removed.
    pub fn sweep(&self, max_idle: Duration) -> usize {
        let now = self.clock.now();
        let limit = max_idle.as_secs_f64();
        let before = self.groups.len();

        self.groups.retain(|group_id, state| {
            let idle = now - state.last_update_time();
            let keep = idle <= limit;
            if !keep {
                info!(group_id = %group_id, idle_secs = idle, "reaped idle group");
            }
            keep
        });

        before.saturating_sub(self.groups.len())
    }

    /// `sweep` with the configured `max_idle_days`.
    pub fn sweep_idle(&self) -> usize {
        self.sweep(self.config.maintenance.max_idle())
    }

    /// Current context buffer of a group, oldest first.
    pub fn buffered_messages(&self, group_id: &str) -> Option<Vec<BufferedMessage>> {
        self.groups.get(group_id).map(|state| state.buffer().to_vec())
    }

    pub fn group_ids(&self) -> Vec<String> {
        self.groups.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Flush trigger times to disk. Failures are logged and handed back,
    /// never panicked on.
    pub fn shutdown(&self) -> RadarResult<()> {
        match self.store.flush() {
            Ok(()) => {
                info!(groups = self.store.len(), "trigger store flushed on shutdown");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to flush trigger store on shutdown");
                Err(e.into())
            }
        }
    }

    fn hydrate(&self, group_id: &str, now: f64) -> GroupHeatState {
        let last = self.store.last_trigger_time(group_id);
        debug!(group_id, restored_trigger = ?last, "creating group state");
        GroupHeatState::new(group_id, &self.config.trigger, now).with_last_trigger_time(last)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
