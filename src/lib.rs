//! Form Coach Web - exercise form analysis and rep counting
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - The wasm_bindgen start hook

pub mod analysis;
pub mod bridge;
pub mod config;
pub mod geometry;
pub mod pose;
pub mod tracking;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen entry points for JS access
pub use bridge::{analyze_frame, set_log_level, FormSession};

pub use analysis::{analyze_exercise, BiomechanicalAnalysis, ExerciseKind, MovementPhase};
pub use config::{ConfigError, EngineConfig};
pub use pose::Landmark;
pub use tracking::{ExerciseSession, FrameReport, RepData, SessionSummary};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    bridge::init_logging(log::LevelFilter::Info);
    log::info!("form coach ready");
}
