//! Geometry module - pure vector math over pose landmarks
//!
//! Re-exports only. All logic in submodules. Nothing here holds state, so
//! every function is safe to call from any number of sessions.

mod angles;
mod confidence;
mod distance;
mod math;

pub use angles::{angle_2d, angle_3d, checked_angle_3d, inclination_from_vertical, weighted_angle};
pub use confidence::{all_visible, average_confidence, is_visible};
pub use distance::{distance_2d, distance_3d, point_to_line_distance};
pub use math::{clamp_score, clamp_unit, lerp};
