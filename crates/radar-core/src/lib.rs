//! # radar-core
//!
//! Foundation crate for the buzz radar heat engine.
//! Defines config, errors, message and snapshot models, and the clock trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RadarConfig;
pub use errors::{RadarError, RadarResult, StoreError};
pub use models::{BufferedMessage, HeatSnapshot, IncomingMessage, IngestOutcome, TriggerReason};
pub use traits::{Clock, ManualClock, SystemClock};
