//! Analysis module - per-exercise biomechanical form evaluation
//!
//! Re-exports only. All logic in submodules. Analyzers are pure functions
//! of one landmark frame.

mod bent_row;
mod exercise;
mod push_up;
mod squat;
mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use exercise::{analyze_exercise, ExerciseKind, VISIBILITY_THRESHOLD};
pub use types::{BiomechanicalAnalysis, MovementPhase};
