//! Default values shared by the config structs and the engine.

pub const DEFAULT_MAX_SCORE_CAP: u32 = 1000;
pub const DEFAULT_TRIGGER_THRESHOLD: u32 = 80;
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 2.0;
pub const DEFAULT_MIN_VELOCITY_SCORE: f64 = 30.0;
pub const DEFAULT_COOLDOWN_MINUTES: u64 = 10;

pub const DEFAULT_DECAY_RATE_PER_MINUTE: u32 = 5;
pub const DEFAULT_WINDOW_SIZE_SECONDS: u64 = 60;
pub const DEFAULT_ACTIVE_WINDOW_SECONDS: u64 = 600;
pub const DEFAULT_CROWD_WEIGHT: u32 = 2;
pub const DEFAULT_NEW_FACE_BONUS: u32 = 20;

pub const DEFAULT_MAX_IDLE_DAYS: u64 = 7;
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 3600;
pub const MAX_SWEEP_INTERVAL_SECS: u64 = 365 * SECONDS_PER_DAY;

pub const DEFAULT_BREAKER_MAX_TRIGGERS: u32 = 5;
pub const DEFAULT_BREAKER_WINDOW_SECS: u64 = 60;

pub const DEFAULT_PERSISTENCE_PATH: &str = "data/buzz_radar/persistence.json";

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_DAY: u64 = 86_400;
