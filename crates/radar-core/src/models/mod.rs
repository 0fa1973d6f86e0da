mod message;
mod outcome;
mod snapshot;

pub use message::{format_history, BufferedMessage, IncomingMessage};
pub use outcome::{IngestOutcome, TriggerReason};
pub use snapshot::HeatSnapshot;
