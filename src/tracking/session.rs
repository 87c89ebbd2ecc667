//! Exercise session - one person, one exercise, one activity window
//!
//! Owns every piece of mutable state in the pipeline and drives it once per
//! accepted frame:
//!
//! landmarks → analyzer → smoother → rep counter → stats
//!
//! Independent sessions share nothing; run one per user.

use log::info;
use serde::Serialize;

use super::frame_gate::FrameGate;
use super::rep_counter::{RepCounter, RepData, RepRating, RepThresholds};
use super::smoother::ConfidenceSmoother;
use super::stats::{SessionStats, SessionSummary};
use crate::analysis::{BiomechanicalAnalysis, ExerciseKind, MovementPhase};
use crate::config::{ConfigError, EngineConfig};
use crate::pose::Landmark;

/// Everything the caller needs after one processed frame
#[derive(Clone, Debug, Serialize)]
pub struct FrameReport {
    pub analysis: BiomechanicalAnalysis,
    /// Set only on the frame that completed a rep
    pub rep_completed: Option<RepData>,
    pub rep_rating: Option<RepRating>,
    pub rep_count: u32,
    pub average_quality: u32,
    pub average_confidence: f32,
    pub last_rep_duration: Option<f32>,
    pub phase: MovementPhase,
}

pub struct ExerciseSession {
    exercise: ExerciseKind,
    config: EngineConfig,
    gate: FrameGate,
    smoother: ConfidenceSmoother,
    counter: RepCounter,
    stats: SessionStats,
    last_analysis: Option<BiomechanicalAnalysis>,
}

impl ExerciseSession {
    pub fn new(exercise: ExerciseKind, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(exercise, config))
    }

    /// Session with the baseline configuration
    pub fn with_defaults(exercise: ExerciseKind) -> Self {
        Self::build(exercise, EngineConfig::default())
    }

    fn build(exercise: ExerciseKind, config: EngineConfig) -> Self {
        info!("session started: {} ({:?})", exercise.as_str(), config);
        Self {
            exercise,
            gate: FrameGate::new(config.min_frame_interval_ms()),
            smoother: ConfidenceSmoother::new(config.buffer_capacity, config.decay),
            counter: RepCounter::new(RepThresholds::for_exercise(exercise), &config),
            stats: SessionStats::new(),
            last_analysis: None,
            config,
        }
    }

    /// Resolve the exercise by name once, up front
    pub fn from_name(name: &str, config: EngineConfig) -> Result<Self, ConfigError> {
        let exercise =
            ExerciseKind::from_name(name).ok_or_else(|| ConfigError::UnknownExercise(name.to_string()))?;
        Self::new(exercise, config)
    }

    /// Run the pipeline on one frame
    ///
    /// Returns `None` when the frame arrived too soon after the previous
    /// one and was dropped by the rate cap.
    pub fn process_frame(&mut self, frame: &[Landmark], timestamp_ms: f64) -> Option<FrameReport> {
        if !self.gate.accept(timestamp_ms) {
            return None;
        }

        let analysis = self
            .exercise
            .analyze_with_threshold(frame, self.config.visibility_threshold);

        // Frames that could not be evaluated carry no angle and leave the
        // smoother and state machine untouched
        let mut rep_completed = None;
        if let Some(angle) = analysis.primary_angle {
            let smoothed = self.smoother.push(angle, analysis.confidence);
            rep_completed = self
                .counter
                .update(smoothed, analysis.confidence, analysis.quality, timestamp_ms);
        }
        if let Some(rep) = &rep_completed {
            info!("rep {}: {}", rep.number, rep.rating().message());
            self.stats.record(rep.clone());
        }

        let report = FrameReport {
            phase: analysis.phase,
            rep_rating: rep_completed.as_ref().map(RepData::rating),
            rep_completed,
            rep_count: self.stats.rep_count(),
            average_quality: self.stats.average_quality(),
            average_confidence: self.stats.average_confidence(),
            last_rep_duration: self.stats.last_rep_duration(),
            analysis,
        };
        self.last_analysis = Some(report.analysis.clone());
        Some(report)
    }

    /// Switch exercise; all state starts over
    pub fn set_exercise(&mut self, exercise: ExerciseKind) {
        info!("exercise changed: {} -> {}", self.exercise.as_str(), exercise.as_str());
        self.exercise = exercise;
        self.counter = RepCounter::new(RepThresholds::for_exercise(exercise), &self.config);
        self.reset();
    }

    /// Full reset: buffers, state machine, totals
    pub fn reset(&mut self) {
        self.gate.reset();
        self.smoother.clear();
        self.counter.reset();
        self.stats.clear();
        self.last_analysis = None;
    }

    pub fn exercise(&self) -> ExerciseKind {
        self.exercise
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rep_count(&self) -> u32 {
        self.stats.rep_count()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn summary(&self) -> SessionSummary {
        self.stats.summary()
    }

    pub fn current_phase(&self) -> MovementPhase {
        self.last_analysis
            .as_ref()
            .map_or(MovementPhase::Rest, |a| a.phase)
    }

    /// Feedback of the most recent processed frame
    pub fn latest_feedback(&self) -> &[String] {
        self.last_analysis
            .as_ref()
            .map(|a| a.feedback.as_slice())
            .unwrap_or(&[])
    }
}
