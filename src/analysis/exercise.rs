//! Exercise selection and analyzer dispatch
//!
//! Names are matched once, when a session is configured. Per-frame work
//! goes through `ExerciseKind::analyze` and never scans strings.

use serde::Serialize;

use super::types::BiomechanicalAnalysis;
use super::{bent_row, push_up, squat};
use crate::pose::Landmark;

/// Minimum landmark visibility for a frame to be evaluable
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Supported exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    BentRow,
    Squat,
    PushUp,
}

/// Keyword table, checked in order against the lowercased name
const KEYWORDS: [(&str, ExerciseKind); 7] = [
    ("row", ExerciseKind::BentRow),
    ("remada", ExerciseKind::BentRow),
    ("squat", ExerciseKind::Squat),
    ("agachamento", ExerciseKind::Squat),
    ("push", ExerciseKind::PushUp),
    ("flexão", ExerciseKind::PushUp),
    ("flexao", ExerciseKind::PushUp),
];

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [ExerciseKind::BentRow, ExerciseKind::Squat, ExerciseKind::PushUp];

    /// Resolve a free-form exercise name by case-insensitive substring match
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|&(_, kind)| kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::BentRow => "bent_row",
            ExerciseKind::Squat => "squat",
            ExerciseKind::PushUp => "push_up",
        }
    }

    /// Metric key of the repetition-governing angle
    pub fn primary_metric(&self) -> &'static str {
        match self {
            ExerciseKind::BentRow | ExerciseKind::PushUp => "elbow_angle",
            ExerciseKind::Squat => "knee_angle",
        }
    }

    /// Analyze one frame with the default visibility threshold
    pub fn analyze(&self, frame: &[Landmark]) -> BiomechanicalAnalysis {
        self.analyze_with_threshold(frame, VISIBILITY_THRESHOLD)
    }

    pub fn analyze_with_threshold(&self, frame: &[Landmark], visibility_threshold: f32) -> BiomechanicalAnalysis {
        match self {
            ExerciseKind::BentRow => bent_row::analyze(frame, visibility_threshold),
            ExerciseKind::Squat => squat::analyze(frame, visibility_threshold),
            ExerciseKind::PushUp => push_up::analyze(frame, visibility_threshold),
        }
    }
}

/// One-shot analysis by name
///
/// Unknown names produce an explicit unrecognized record instead of failing.
pub fn analyze_exercise(name: &str, frame: &[Landmark]) -> BiomechanicalAnalysis {
    match ExerciseKind::from_name(name) {
        Some(kind) => kind.analyze(frame),
        None => BiomechanicalAnalysis::unrecognized(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_matching() {
        assert_eq!(ExerciseKind::from_name("Bent-Over Row"), Some(ExerciseKind::BentRow));
        assert_eq!(ExerciseKind::from_name("Remada Curvada"), Some(ExerciseKind::BentRow));
        assert_eq!(ExerciseKind::from_name("BACK SQUAT"), Some(ExerciseKind::Squat));
        assert_eq!(ExerciseKind::from_name("agachamento livre"), Some(ExerciseKind::Squat));
        assert_eq!(ExerciseKind::from_name("Push-up"), Some(ExerciseKind::PushUp));
        assert_eq!(ExerciseKind::from_name("FLEXÃO de braço"), Some(ExerciseKind::PushUp));
        assert_eq!(ExerciseKind::from_name("flexao"), Some(ExerciseKind::PushUp));
        assert_eq!(ExerciseKind::from_name("plank"), None);
        assert_eq!(ExerciseKind::from_name(""), None);
    }

    #[test]
    fn test_primary_metric() {
        assert_eq!(ExerciseKind::Squat.primary_metric(), "knee_angle");
        assert_eq!(ExerciseKind::PushUp.primary_metric(), "elbow_angle");
        assert_eq!(ExerciseKind::BentRow.primary_metric(), "elbow_angle");
    }

    #[test]
    fn test_unrecognized_name_does_not_fail() {
        let frame = vec![Landmark::new(0.5, 0.5); 33];
        let analysis = analyze_exercise("jumping jacks", &frame);
        assert!(!analysis.is_valid);
        assert!(analysis.exercise.is_none());
        assert_eq!(analysis.feedback.len(), 1);
    }

    #[test]
    fn test_dispatch_reports_exercise() {
        let frame: Vec<Landmark> = Vec::new();
        for kind in ExerciseKind::ALL {
            let analysis = kind.analyze(&frame);
            assert_eq!(analysis.exercise, Some(kind));
            assert!(!analysis.is_valid);
        }
    }
}
