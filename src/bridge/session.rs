//! JS-facing session handle
//!
//! One `FormSession` per person on screen. JS owns the handle; every call
//! borrows it mutably, so there is no shared state between sessions.

use wasm_bindgen::prelude::*;

use super::landmarks::parse_landmarks;
use crate::analysis::{analyze_exercise, ExerciseKind};
use crate::config::{ConfigError, EngineConfig};
use crate::tracking::{ExerciseSession, FrameReport};

fn to_js(err: serde_json::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn exercise_by_name(name: &str) -> Result<ExerciseKind, ConfigError> {
    ExerciseKind::from_name(name).ok_or_else(|| ConfigError::UnknownExercise(name.to_string()))
}

#[wasm_bindgen]
pub struct FormSession {
    session: ExerciseSession,
    last_report: Option<FrameReport>,
}

impl FormSession {
    fn wrap(session: ExerciseSession) -> Self {
        Self { session, last_report: None }
    }
}

#[wasm_bindgen]
impl FormSession {
    /// Session with the baseline configuration
    #[wasm_bindgen(constructor)]
    pub fn new(exercise: &str) -> Result<FormSession, JsValue> {
        let kind = exercise_by_name(exercise)?;
        Ok(Self::wrap(ExerciseSession::with_defaults(kind)))
    }

    /// Session with a JSON config; missing keys keep their defaults
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(exercise: &str, config_json: &str) -> Result<FormSession, JsValue> {
        let config = EngineConfig::from_json(config_json)?;
        Ok(Self::wrap(ExerciseSession::from_name(exercise, config)?))
    }

    /// Feed one landmark frame (4 floats per landmark)
    ///
    /// Returns false when the buffer was malformed or the frame was
    /// dropped by the rate cap; the previous report stays current.
    #[wasm_bindgen(js_name = processFrame)]
    pub fn process_frame(&mut self, data: &[f32], timestamp_ms: f64) -> bool {
        let Some(frame) = parse_landmarks(data) else {
            return false;
        };
        match self.session.process_frame(&frame, timestamp_ms) {
            Some(report) => {
                self.last_report = Some(report);
                true
            }
            None => false,
        }
    }

    /// Latest frame report as JSON, `undefined` before the first frame
    #[wasm_bindgen(js_name = reportJson)]
    pub fn report_json(&self) -> Result<Option<String>, JsValue> {
        self.last_report
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(to_js)
    }

    /// Totals and rep history as JSON
    #[wasm_bindgen(js_name = summaryJson)]
    pub fn summary_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.summary()).map_err(to_js)
    }

    /// Active config as JSON
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.config()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setExercise)]
    pub fn set_exercise(&mut self, exercise: &str) -> Result<(), JsValue> {
        let kind = exercise_by_name(exercise)?;
        self.session.set_exercise(kind);
        self.last_report = None;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.last_report = None;
    }

    #[wasm_bindgen(getter)]
    pub fn exercise(&self) -> String {
        self.session.exercise().as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = repCount)]
    pub fn rep_count(&self) -> u32 {
        self.session.rep_count()
    }

    #[wasm_bindgen(getter, js_name = averageQuality)]
    pub fn average_quality(&self) -> u32 {
        self.session.stats().average_quality()
    }

    #[wasm_bindgen(getter, js_name = averageConfidence)]
    pub fn average_confidence(&self) -> f32 {
        self.session.stats().average_confidence()
    }

    #[wasm_bindgen(getter, js_name = lastRepDuration)]
    pub fn last_rep_duration(&self) -> Option<f32> {
        self.session.stats().last_rep_duration()
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.session.current_phase().as_str().to_string()
    }

    /// Whether the latest processed frame completed a rep
    #[wasm_bindgen(getter, js_name = repCompleted)]
    pub fn rep_completed(&self) -> bool {
        self.last_report
            .as_ref()
            .is_some_and(|report| report.rep_completed.is_some())
    }

    /// Feedback lines of the latest frame, newline-separated
    #[wasm_bindgen(getter)]
    pub fn feedback(&self) -> String {
        self.session.latest_feedback().join("\n")
    }
}

/// Stateless one-frame analysis by exercise name, as JSON
#[wasm_bindgen(js_name = analyzeFrame)]
pub fn analyze_frame(exercise: &str, data: &[f32]) -> Result<String, JsValue> {
    let frame = parse_landmarks(data).unwrap_or_default();
    serde_json::to_string(&analyze_exercise(exercise, &frame)).map_err(to_js)
}
