//! Tracking module - temporal state across frames
//!
//! Re-exports only. All logic in submodules. Everything here is owned by a
//! single `ExerciseSession`; nothing is global.

mod frame_gate;
mod rep_counter;
mod session;
mod smoother;
mod stats;

pub use frame_gate::FrameGate;
pub use rep_counter::{RepCounter, RepData, RepRating, RepState, RepThresholds};
pub use session::{ExerciseSession, FrameReport};
pub use smoother::{ConfidenceSmoother, DEFAULT_CAPACITY, DEFAULT_DECAY};
pub use stats::{SessionStats, SessionSummary};
