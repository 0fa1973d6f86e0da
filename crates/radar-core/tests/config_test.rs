#![allow(clippy::field_reassign_with_default)]
//! Config serde resilience: missing keys fall back to documented defaults,
//! partial files keep their explicit values, both TOML and JSON parse.

use radar_core::config::{RadarConfig, ScoringConfig, TriggerConfig};
use radar_core::RadarError;

// ═══════════════════════════════════════════════════════════════════════════
// Defaults
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn default_config_matches_documented_values() {
    let config = RadarConfig::default();

    assert_eq!(config.trigger.max_score_cap, 1000);
    assert_eq!(config.trigger.trigger_threshold, 80);
    assert_eq!(config.trigger.velocity_threshold, 2.0);
    assert_eq!(config.trigger.min_velocity_score, 30.0);
    assert_eq!(config.trigger.cooldown_minutes, 10);
    assert_eq!(config.trigger.cooldown_seconds(), 600.0);

    assert_eq!(config.scoring.decay_rate_per_minute, 5);
    assert_eq!(config.scoring.window_size_seconds, 60);
    assert_eq!(config.scoring.active_window_seconds, 600);
    assert_eq!(config.scoring.crowd_weight, 2);
    assert_eq!(config.scoring.new_face_bonus, 20);
    assert_eq!(config.scoring.max_buffered_messages, None);

    assert_eq!(config.maintenance.max_idle_days, 7);
    assert_eq!(config.maintenance.max_idle().as_secs(), 7 * 86_400);
}

#[test]
fn empty_toml_yields_defaults() {
    let config = RadarConfig::from_toml("").unwrap();
    assert_eq!(config, RadarConfig::default());
}

#[test]
fn empty_json_object_yields_defaults() {
    let config = RadarConfig::from_json("{}").unwrap();
    assert_eq!(config, RadarConfig::default());
}

// ═══════════════════════════════════════════════════════════════════════════
// Partial configs
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn partial_toml_keeps_explicit_fields() {
    let toml = r#"
        [trigger]
        trigger_threshold = 50
        cooldown_minutes = 3

        [scoring]
        decay_rate_per_minute = 0
        max_buffered_messages = 200
    "#;
    let config = RadarConfig::from_toml(toml).unwrap();

    assert_eq!(config.trigger.trigger_threshold, 50);
    assert_eq!(config.trigger.cooldown_seconds(), 180.0);
    assert_eq!(config.trigger.max_score_cap, 1000, "missing field should get default");
    assert_eq!(config.scoring.decay_rate_per_minute, 0);
    assert_eq!(config.scoring.max_buffered_messages, Some(200));
    assert_eq!(config.scoring.new_face_bonus, 20);
    assert_eq!(config.trigger.breaker.max_triggers_per_window, 5);
}

#[test]
fn partial_json_sub_config_deserializes() {
    let json = r#"{ "velocity_threshold": 3.5 }"#;
    let trigger: TriggerConfig = serde_json::from_str(json).unwrap();
    assert_eq!(trigger.velocity_threshold, 3.5);
    assert_eq!(trigger.trigger_threshold, 80);

    let scoring: ScoringConfig = serde_json::from_str(r#"{ "crowd_weight": 0 }"#).unwrap();
    assert_eq!(scoring.crowd_weight, 0);
    assert_eq!(scoring.active_window_seconds, 600);
}

#[test]
fn persistence_path_is_configurable() {
    let config = RadarConfig::from_toml("[persistence]\npath = \"/tmp/radar.json\"").unwrap();
    assert_eq!(config.persistence.path.to_str(), Some("/tmp/radar.json"));
}

#[test]
fn zero_sweep_interval_is_clamped() {
    let config = RadarConfig::from_toml("[maintenance]\nsweep_interval_secs = 0").unwrap();
    assert_eq!(config.maintenance.sweep_interval().as_secs(), 1);
}

#[test]
fn extreme_durations_do_not_overflow() {
    let json = r#"{
        "trigger": { "cooldown_minutes": 18446744073709551615 },
        "maintenance": { "max_idle_days": 18446744073709551615, "sweep_interval_secs": 18446744073709551615 }
    }"#;
    let config = RadarConfig::from_json(json).unwrap();
    assert!(config.trigger.cooldown_seconds().is_finite());
    assert_eq!(config.maintenance.max_idle().as_secs(), u64::MAX);
    assert_eq!(config.maintenance.sweep_interval().as_secs(), 365 * 86_400);
}

// ═══════════════════════════════════════════════════════════════════════════
// Malformed input
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn wrong_type_is_reported_not_defaulted() {
    let err = RadarConfig::from_toml("[trigger]\ntrigger_threshold = \"high\"");
    assert!(matches!(err, Err(RadarError::ConfigParse(_))));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = RadarConfig::from_json(r#"{ "trigger": { "cooldown_minutes": -1 } }"#);
    assert!(matches!(err, Err(RadarError::Serialization(_))));
}

#[test]
fn custom_values_roundtrip_through_json() {
    let mut config = RadarConfig::default();
    config.trigger.trigger_threshold = 123;
    config.scoring.max_buffered_messages = Some(42);

    let json = serde_json::to_string(&config).unwrap();
    let back = RadarConfig::from_json(&json).unwrap();
    assert_eq!(back, config);
}
