//! Engine configuration - fixed when a session starts
//!
//! Defaults are the documented baseline behaviour. JS callers can override
//! any subset with a JSON object; missing keys keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while configuring a session
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unrecognized exercise \"{0}\"")]
    UnknownExercise(String),
    #[error("invalid config JSON: {0}")]
    Malformed(String),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("rep duration band is inverted: [{min}, {max}]")]
    InvertedDurationBand { min: f32, max: f32 },
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Frames below this analysis confidence never move the rep state machine
    pub min_confidence: f32,
    /// Per-landmark visibility needed for a frame to be evaluated
    pub visibility_threshold: f32,
    /// Samples kept by the smoother
    pub buffer_capacity: usize,
    /// Recency decay per sample of age in the smoother
    pub decay: f32,
    /// Minimum time between two accepted reps
    pub debounce_ms: f64,
    pub min_rep_duration_s: f32,
    pub max_rep_duration_s: f32,
    /// Frames arriving faster than this are dropped
    pub max_frame_rate_hz: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
            visibility_threshold: 0.5,
            buffer_capacity: 5,
            decay: 0.8,
            debounce_ms: 500.0,
            min_rep_duration_s: 0.3,
            max_rep_duration_s: 10.0,
            max_frame_rate_hz: 30.0,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON object and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_range("min_confidence", self.min_confidence)?;
        unit_range("visibility_threshold", self.visibility_threshold)?;
        if self.buffer_capacity == 0 {
            return Err(ConfigError::OutOfRange { field: "buffer_capacity", value: 0.0 });
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(ConfigError::OutOfRange { field: "decay", value: self.decay as f64 });
        }
        if !(self.debounce_ms >= 0.0) {
            return Err(ConfigError::OutOfRange { field: "debounce_ms", value: self.debounce_ms });
        }
        if !(self.min_rep_duration_s >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "min_rep_duration_s",
                value: self.min_rep_duration_s as f64,
            });
        }
        if self.min_rep_duration_s > self.max_rep_duration_s {
            return Err(ConfigError::InvertedDurationBand {
                min: self.min_rep_duration_s,
                max: self.max_rep_duration_s,
            });
        }
        if !(self.max_frame_rate_hz > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "max_frame_rate_hz",
                value: self.max_frame_rate_hz as f64,
            });
        }
        Ok(())
    }

    /// Minimum spacing between processed frames
    pub fn min_frame_interval_ms(&self) -> f64 {
        1000.0 / self.max_frame_rate_hz as f64
    }
}

fn unit_range(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value: value as f64 })
    }
}
