//! Pose module - landmark data and MediaPipe Pose indices
//!
//! Re-exports only. All logic in submodules.

mod indices;
mod landmark;

pub use indices::*;
pub use landmark::{Landmark, LANDMARK_COUNT};
