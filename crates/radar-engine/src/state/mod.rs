//! Per-group mutable heat state.

mod buffer;
mod group_state;
mod participants;
mod window;

pub use buffer::MessageBuffer;
pub use group_state::GroupHeatState;
pub use participants::ActiveParticipants;
pub use window::VelocityWindow;
