//! # radar-engine
//!
//! Heat scoring and trigger decision engine for group chat streams.
//! Per-group decaying scores, rotating velocity windows, crowd and new-face
//! bonuses, cooldown-gated one-shot triggers, and crash-safe persistence of
//! trigger timing.

pub mod breaker;
pub mod engine;
pub mod maintenance;
pub mod state;
pub mod store;
pub mod trigger;

pub use breaker::TriggerBreaker;
pub use engine::HeatEngine;
pub use maintenance::MaintenanceTask;
pub use store::PersistentTriggerStore;
