//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod console;
mod landmarks;
mod session;

pub use console::{init_logging, set_log_level};
pub use landmarks::{parse_landmarks, FLOATS_PER_LANDMARK};
pub use session::{analyze_frame, FormSession};
