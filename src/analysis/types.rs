//! Analysis output types
//!
//! A `BiomechanicalAnalysis` is produced fresh for every frame and replaced
//! by the next one; nothing in it refers back to the frame it came from.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ExerciseKind;
use crate::geometry::{clamp_score, clamp_unit};

/// Qualitative portion of the movement cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementPhase {
    Eccentric,
    Concentric,
    Isometric,
    Rest,
}

impl MovementPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementPhase::Eccentric => "eccentric",
            MovementPhase::Concentric => "concentric",
            MovementPhase::Isometric => "isometric",
            MovementPhase::Rest => "rest",
        }
    }

    /// Classify a primary angle against an exercise's phase thresholds
    pub(crate) fn classify(angle: f32, thresholds: &PhaseThresholds) -> Self {
        if angle > thresholds.high {
            thresholds.extended
        } else if angle < thresholds.low {
            MovementPhase::Concentric
        } else {
            MovementPhase::Isometric
        }
    }
}

/// Per-exercise phase split of the primary angle
pub(crate) struct PhaseThresholds {
    /// Above this the joint is extended
    pub high: f32,
    /// Below this the joint is flexed (concentric)
    pub low: f32,
    /// What an extended joint means for this exercise
    pub extended: MovementPhase,
}

/// Form assessment for one frame
#[derive(Clone, Debug, Serialize)]
pub struct BiomechanicalAnalysis {
    /// None when the exercise name was not recognized
    pub exercise: Option<ExerciseKind>,
    /// Most relevant first
    pub feedback: Vec<String>,
    pub metrics: BTreeMap<&'static str, f32>,
    pub phase: MovementPhase,
    pub is_valid: bool,
    /// 0-100, meaningful only when valid
    pub quality: f32,
    /// 0-1, mean visibility of the required landmarks
    pub confidence: f32,
    /// The repetition-governing joint angle
    #[serde(skip)]
    pub primary_angle: Option<f32>,
}

impl BiomechanicalAnalysis {
    /// Frame could not be evaluated: required landmarks missing or hidden
    pub fn not_visible(exercise: ExerciseKind, instruction: &str) -> Self {
        Self {
            exercise: Some(exercise),
            feedback: vec![instruction.to_string()],
            metrics: BTreeMap::new(),
            phase: MovementPhase::Rest,
            is_valid: false,
            quality: 0.0,
            confidence: 0.0,
            primary_angle: None,
        }
    }

    /// Exercise name did not match any analyzer
    pub fn unrecognized(name: &str) -> Self {
        Self {
            exercise: None,
            feedback: vec![format!("Exercise not recognized: \"{}\"", name)],
            metrics: BTreeMap::new(),
            phase: MovementPhase::Rest,
            is_valid: false,
            quality: 0.0,
            confidence: 0.0,
            primary_angle: None,
        }
    }

    pub fn metric(&self, name: &str) -> Option<f32> {
        self.metrics.get(name).copied()
    }
}

/// Left and right readings of the primary joint
///
/// A side whose landmarks coincide has no angle. Such a frame still gets
/// its metrics but carries no primary angle, so nothing downstream reads
/// the placeholder 0° as a flexed joint.
#[derive(Clone, Copy, Debug)]
pub(crate) struct JointPair {
    left: Option<f32>,
    right: Option<f32>,
}

impl JointPair {
    pub fn new(left: Option<f32>, right: Option<f32>) -> Self {
        Self { left, right }
    }

    /// Mean of both sides, `None` if either is degenerate
    pub fn primary(&self) -> Option<f32> {
        self.left.zip(self.right).map(|(l, r)| (l + r) / 2.0)
    }

    /// Value for the metrics map; a degenerate side reads 0
    pub fn reported(&self) -> f32 {
        (self.left.unwrap_or(0.0) + self.right.unwrap_or(0.0)) / 2.0
    }

    /// Left/right difference; 0 unless both sides are measurable
    pub fn asymmetry(&self) -> f32 {
        self.left.zip(self.right).map_or(0.0, |(l, r)| (l - r).abs())
    }

    /// Phase of the primary angle; Rest when there is none
    pub fn phase(&self, thresholds: &PhaseThresholds) -> MovementPhase {
        self.primary()
            .map_or(MovementPhase::Rest, |angle| MovementPhase::classify(angle, thresholds))
    }
}

/// Accumulates rule results for one frame.
///
/// Quality starts at 100; each violated rule subtracts its own penalty.
/// Rules are independent, so several can fire on the same frame.
pub(crate) struct FormCheck {
    quality: f32,
    feedback: Vec<String>,
    metrics: BTreeMap<&'static str, f32>,
}

impl FormCheck {
    pub fn new() -> Self {
        Self {
            quality: 100.0,
            feedback: Vec::new(),
            metrics: BTreeMap::new(),
        }
    }

    pub fn metric(&mut self, name: &'static str, value: f32) -> f32 {
        self.metrics.insert(name, value);
        value
    }

    pub fn penalize(&mut self, points: f32, message: &str) {
        self.quality -= points;
        self.feedback.push(message.to_string());
    }

    pub fn praise(&mut self, message: &str) {
        self.feedback.push(message.to_string());
    }

    pub fn finish(
        self,
        exercise: ExerciseKind,
        primary_angle: Option<f32>,
        phase: MovementPhase,
        confidence: f32,
    ) -> BiomechanicalAnalysis {
        BiomechanicalAnalysis {
            exercise: Some(exercise),
            feedback: self.feedback,
            metrics: self.metrics,
            phase,
            is_valid: true,
            quality: clamp_score(self.quality),
            confidence: clamp_unit(confidence),
            primary_angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalties_clamp_at_zero() {
        let mut check = FormCheck::new();
        for _ in 0..8 {
            check.penalize(20.0, "bad");
        }
        let analysis = check.finish(ExerciseKind::Squat, Some(120.0), MovementPhase::Isometric, 1.0);
        assert_eq!(analysis.quality, 0.0);
        assert_eq!(analysis.feedback.len(), 8);
        assert!(analysis.is_valid);
    }

    #[test]
    fn test_phase_classification() {
        let t = PhaseThresholds { high: 160.0, low: 90.0, extended: MovementPhase::Rest };
        assert_eq!(MovementPhase::classify(170.0, &t), MovementPhase::Rest);
        assert_eq!(MovementPhase::classify(120.0, &t), MovementPhase::Isometric);
        assert_eq!(MovementPhase::classify(70.0, &t), MovementPhase::Concentric);
    }

    #[test]
    fn test_unrecognized_record() {
        let analysis = BiomechanicalAnalysis::unrecognized("deadlift");
        assert!(!analysis.is_valid);
        assert!(analysis.exercise.is_none());
        assert_eq!(analysis.feedback, vec!["Exercise not recognized: \"deadlift\"".to_string()]);
    }

    #[test]
    fn test_degenerate_joint_has_no_primary() {
        let t = PhaseThresholds { high: 160.0, low: 90.0, extended: MovementPhase::Rest };
        let pair = JointPair::new(Some(170.0), None);
        assert_eq!(pair.primary(), None);
        assert_eq!(pair.reported(), 85.0);
        assert_eq!(pair.asymmetry(), 0.0);
        assert_eq!(pair.phase(&t), MovementPhase::Rest);

        let both = JointPair::new(Some(80.0), Some(70.0));
        assert_eq!(both.primary(), Some(75.0));
        assert_eq!(both.asymmetry(), 10.0);
        assert_eq!(both.phase(&t), MovementPhase::Concentric);
    }
}
