//! Repetition detection with hysteresis
//!
//! State machine over the smoothed primary angle:
//!
//! ```text
//! Up --(s <= down - h)--> Transitioning --(s <= down - 2h)--> Down
//!  ^                          |                                 |
//!  +-----(s >= up + h)--------+ (rep candidate)                 |
//!  +-----(s >= up + h)------------------------------------------+ (not counted)
//! ```
//!
//! A candidate only counts if it clears the debounce window and its
//! duration is physiologically plausible. Either way the machine returns to
//! Up, so a rejected cycle never leaves it stuck.

use log::debug;
use serde::Serialize;

use crate::analysis::ExerciseKind;
use crate::config::EngineConfig;

/// Angle thresholds for one exercise (degrees)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepThresholds {
    /// Extended position
    pub up: f32,
    /// Flexed position
    pub down: f32,
    /// Dead zone around both thresholds
    pub hysteresis: f32,
}

impl RepThresholds {
    pub fn for_exercise(kind: ExerciseKind) -> Self {
        match kind {
            ExerciseKind::Squat => Self { up: 150.0, down: 100.0, hysteresis: 10.0 },
            ExerciseKind::BentRow => Self { up: 140.0, down: 90.0, hysteresis: 10.0 },
            ExerciseKind::PushUp => Self { up: 150.0, down: 100.0, hysteresis: 10.0 },
        }
    }

    /// Thresholds by exercise name, falling back to the default triple
    pub fn for_name(name: &str) -> Self {
        ExerciseKind::from_name(name)
            .map(Self::for_exercise)
            .unwrap_or_default()
    }

    fn enter_below(&self) -> f32 {
        self.down - self.hysteresis
    }

    fn bottom_below(&self) -> f32 {
        self.down - 2.0 * self.hysteresis
    }

    fn return_above(&self) -> f32 {
        self.up + self.hysteresis
    }
}

impl Default for RepThresholds {
    fn default() -> Self {
        Self { up: 150.0, down: 90.0, hysteresis: 10.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepState {
    Up,
    Down,
    Transitioning,
}

/// Presentation tier of a completed rep
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepRating {
    Perfect,
    Good,
    ReviewTechnique,
}

impl RepRating {
    pub fn from_quality(quality: f32) -> Self {
        if quality >= 80.0 {
            RepRating::Perfect
        } else if quality >= 60.0 {
            RepRating::Good
        } else {
            RepRating::ReviewTechnique
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RepRating::Perfect => "Perfect rep!",
            RepRating::Good => "Good rep",
            RepRating::ReviewTechnique => "Rep counted, but review your technique",
        }
    }
}

/// One validated repetition. Never modified after creation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RepData {
    /// 1-based sequence number within the session
    pub number: u32,
    pub duration_s: f32,
    pub quality: f32,
    pub confidence: f32,
    pub completed_at_ms: f64,
}

impl RepData {
    pub fn rating(&self) -> RepRating {
        RepRating::from_quality(self.quality)
    }
}

/// Hysteresis rep counter for one exercise session
#[derive(Debug)]
pub struct RepCounter {
    thresholds: RepThresholds,
    min_confidence: f32,
    debounce_ms: f64,
    min_duration_s: f32,
    max_duration_s: f32,

    state: RepState,
    rep_start_ms: f64,
    last_rep_ms: Option<f64>,
    rep_count: u32,
}

impl RepCounter {
    pub fn new(thresholds: RepThresholds, config: &EngineConfig) -> Self {
        Self {
            thresholds,
            min_confidence: config.min_confidence,
            debounce_ms: config.debounce_ms,
            min_duration_s: config.min_rep_duration_s,
            max_duration_s: config.max_rep_duration_s,
            state: RepState::Up,
            rep_start_ms: 0.0,
            last_rep_ms: None,
            rep_count: 0,
        }
    }

    /// Advance with one smoothed angle sample
    ///
    /// `quality` and `confidence` are those of the analysis that produced
    /// the sample; they are captured on the rep if this sample completes one.
    pub fn update(&mut self, angle: f32, confidence: f32, quality: f32, timestamp_ms: f64) -> Option<RepData> {
        if self.clock_went_back(timestamp_ms) {
            debug!("clock went back to {:.0}ms, re-anchoring", timestamp_ms);
            self.state = RepState::Up;
            self.last_rep_ms = None;
        }
        if confidence < self.min_confidence {
            return None;
        }

        match self.state {
            RepState::Up => {
                if angle <= self.thresholds.enter_below() {
                    self.state = RepState::Transitioning;
                    self.rep_start_ms = timestamp_ms;
                }
                None
            }
            RepState::Transitioning => {
                if angle <= self.thresholds.bottom_below() {
                    self.state = RepState::Down;
                    None
                } else if angle >= self.thresholds.return_above() {
                    self.state = RepState::Up;
                    self.complete(confidence, quality, timestamp_ms)
                } else {
                    None
                }
            }
            RepState::Down => {
                if angle >= self.thresholds.return_above() {
                    debug!("rep abandoned from bottom position at {:.0}ms", timestamp_ms);
                    self.state = RepState::Up;
                }
                None
            }
        }
    }

    /// Timestamp earlier than the last rep or the open rep's start
    fn clock_went_back(&self, timestamp_ms: f64) -> bool {
        let before_last_rep = self.last_rep_ms.is_some_and(|last| timestamp_ms < last);
        let before_rep_start = self.state != RepState::Up && timestamp_ms < self.rep_start_ms;
        before_last_rep || before_rep_start
    }

    fn complete(&mut self, confidence: f32, quality: f32, timestamp_ms: f64) -> Option<RepData> {
        if let Some(last) = self.last_rep_ms {
            if timestamp_ms - last < self.debounce_ms {
                debug!("rep debounced: {:.0}ms after previous", timestamp_ms - last);
                return None;
            }
        }

        let duration_s = ((timestamp_ms - self.rep_start_ms) / 1000.0) as f32;
        if duration_s < self.min_duration_s || duration_s > self.max_duration_s {
            debug!("rep discarded: implausible duration {:.2}s", duration_s);
            return None;
        }

        self.rep_count += 1;
        self.last_rep_ms = Some(timestamp_ms);
        debug!("rep {} accepted: {:.2}s, quality {:.0}", self.rep_count, duration_s, quality);

        Some(RepData {
            number: self.rep_count,
            duration_s,
            quality,
            confidence,
            completed_at_ms: timestamp_ms,
        })
    }

    pub fn state(&self) -> RepState {
        self.state
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    pub fn thresholds(&self) -> RepThresholds {
        self.thresholds
    }

    /// Back to Up with no history
    pub fn reset(&mut self) {
        self.state = RepState::Up;
        self.rep_start_ms = 0.0;
        self.last_rep_ms = None;
        self.rep_count = 0;
    }
}
