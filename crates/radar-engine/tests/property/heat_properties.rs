//! Property tests for the heat engine: decay monotonicity, the score cap,
//! cooldown exclusivity, and the velocity guard.

use std::sync::Arc;

use proptest::prelude::*;

use radar_core::config::{RadarConfig, TriggerConfig};
use radar_core::models::IncomingMessage;
use radar_core::traits::ManualClock;
use radar_engine::state::GroupHeatState;
use radar_engine::{HeatEngine, PersistentTriggerStore};

fn engine(config: RadarConfig) -> (HeatEngine, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(0.0));
    let engine = HeatEngine::with_store(config, clock.clone(), PersistentTriggerStore::in_memory());
    (engine, clock)
}

// Strategy: (base_score, sender index, seconds since previous message)
fn message_stream() -> impl Strategy<Value = Vec<(u32, u8, u16)>> {
    prop::collection::vec((0u32..300, 0u8..12, 0u16..200), 1..120)
}

proptest! {
    #[test]
    fn prop_score_never_exceeds_cap(cap in 10u32..2_000, stream in message_stream()) {
        let mut config = RadarConfig::default();
        config.trigger.max_score_cap = cap;
        let (engine, clock) = engine(config);

        let mut t = 0.0;
        for (score, sender, gap) in stream {
            t += gap as f64;
            engine.ingest(IncomingMessage::new("g", score, format!("u{sender}"), "n", "c").at(t));
            clock.set(t);
            let snap = engine.snapshot("g").unwrap();
            prop_assert!(snap.score <= cap as f64);
            prop_assert!(snap.score >= 0.0);
        }
    }

    #[test]
    fn prop_decay_is_monotone_and_reaches_zero(
        base in 1u32..900,
        rate in 1u32..50,
        steps in prop::collection::vec(1u32..600, 1..40),
    ) {
        let scoring = radar_core::config::ScoringConfig {
            decay_rate_per_minute: rate,
            ..Default::default()
        };
        let mut state = GroupHeatState::new("g", &TriggerConfig::default(), 0.0);
        state.add_score(base, "u1", 0.0, &scoring);
        let initial = state.score();

        let mut t = 0.0;
        let mut prev = initial;
        for step in steps {
            t += step as f64;
            state.apply_decay(t, rate);
            prop_assert!(state.score() <= prev);
            prop_assert!(state.score() >= 0.0);
            prev = state.score();
        }

        let zero_at = initial / rate as f64 * 60.0;
        state.apply_decay(t.max(zero_at) + 1.0, rate);
        prop_assert_eq!(state.score(), 0.0);
    }

    #[test]
    fn prop_at_most_one_trigger_per_cooldown(stream in message_stream(), cooldown in 1u64..30) {
        let mut config = RadarConfig::default();
        config.trigger.trigger_threshold = 40;
        config.trigger.cooldown_minutes = cooldown;
        let cooldown_secs = (cooldown * 60) as f64;
        let (engine, _clock) = engine(config);

        let mut t = 0.0;
        let mut fired_at: Vec<f64> = Vec::new();
        for (score, sender, gap) in stream {
            t += gap as f64;
            if engine.ingest(IncomingMessage::new("g", score, format!("u{sender}"), "n", "c").at(t)).triggered {
                fired_at.push(t);
            }
        }
        for pair in fired_at.windows(2) {
            prop_assert!(pair[1] - pair[0] > cooldown_secs);
        }
    }

    #[test]
    fn prop_no_velocity_without_previous_window(scores in prop::collection::vec(0u32..1_000, 1..60)) {
        let mut config = RadarConfig::default();
        config.trigger.trigger_threshold = 1_000_000;
        config.trigger.min_velocity_score = 0.0;
        let (engine, _clock) = engine(config);

        // All messages fall in the first window, so the previous window is empty.
        for (i, score) in scores.into_iter().enumerate() {
            let t = (i as f64) * 0.5;
            prop_assert!(!engine.ingest(IncomingMessage::new("g", score, "u1", "n", "c").at(t)).triggered);
        }
    }
}
