//! Bent-over row analyzer
//!
//! Primary signal is the elbow angle (shoulder-elbow-wrist). Arms extended
//! is the lowering (eccentric) end of the movement, elbows fully pulled is
//! concentric.

use super::exercise::ExerciseKind;
use super::types::{BiomechanicalAnalysis, FormCheck, JointPair, MovementPhase, PhaseThresholds};
use crate::geometry::{
    all_visible, average_confidence, checked_angle_3d, distance_2d, inclination_from_vertical,
    point_to_line_distance,
};
use crate::pose::*;

const REQUIRED: [usize; 8] = [
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
];

const POSITION_HINT: &str = "Position yourself sideways to the camera with your arms and hips visible";

const PHASES: PhaseThresholds = PhaseThresholds {
    high: 150.0,
    low: 90.0,
    extended: MovementPhase::Eccentric,
};

/// Torso lean from vertical (degrees): hinge window and ideal band
const MIN_TORSO_LEAN: f32 = 30.0;
const MAX_TORSO_LEAN: f32 = 75.0;
const IDEAL_TORSO_LEAN: (f32, f32) = (30.0, 60.0);
/// Shoulder height difference relative to torso length
const MAX_SHOULDER_TILT: f32 = 0.15;
/// Elbow distance from the torso line relative to torso length
const MAX_ELBOW_DISTANCE: f32 = 0.5;
const MAX_ARM_ASYMMETRY: f32 = 15.0;

pub fn analyze(frame: &[Landmark], visibility_threshold: f32) -> BiomechanicalAnalysis {
    if !all_visible(frame, &REQUIRED, visibility_threshold) {
        return BiomechanicalAnalysis::not_visible(ExerciseKind::BentRow, POSITION_HINT);
    }
    let lm = |i: usize| frame[i];

    let (l_shoulder, r_shoulder) = (lm(LEFT_SHOULDER), lm(RIGHT_SHOULDER));
    let (l_elbow, r_elbow) = (lm(LEFT_ELBOW), lm(RIGHT_ELBOW));
    let (l_wrist, r_wrist) = (lm(LEFT_WRIST), lm(RIGHT_WRIST));
    let (l_hip, r_hip) = (lm(LEFT_HIP), lm(RIGHT_HIP));

    let mut check = FormCheck::new();

    let elbow = JointPair::new(
        checked_angle_3d(&l_shoulder, &l_elbow, &l_wrist),
        checked_angle_3d(&r_shoulder, &r_elbow, &r_wrist),
    );
    check.metric("elbow_angle", elbow.reported());

    let shoulder_mid = l_shoulder.midpoint(&r_shoulder);
    let hip_mid = l_hip.midpoint(&r_hip);
    let torso_length = distance_2d(&shoulder_mid, &hip_mid).max(1e-6);

    let torso_angle = check.metric("torso_angle", inclination_from_vertical(&shoulder_mid, &hip_mid));
    let shoulder_tilt = check.metric("shoulder_tilt", (l_shoulder.y - r_shoulder.y).abs() / torso_length);
    let elbow_distance = check.metric(
        "elbow_torso_distance",
        (point_to_line_distance(&l_elbow, &l_shoulder, &l_hip)
            + point_to_line_distance(&r_elbow, &r_shoulder, &r_hip))
            / 2.0
            / torso_length,
    );
    let asymmetry = check.metric("arm_asymmetry", elbow.asymmetry());

    if torso_angle < MIN_TORSO_LEAN {
        check.penalize(15.0, "Hinge forward at the hips, your torso is too upright");
    } else if torso_angle > MAX_TORSO_LEAN {
        check.penalize(10.0, "Lift your chest slightly, your torso is too low");
    } else if torso_angle <= IDEAL_TORSO_LEAN.1 && torso_angle >= IDEAL_TORSO_LEAN.0 {
        check.praise("Good hip hinge");
    }
    if shoulder_tilt > MAX_SHOULDER_TILT {
        check.penalize(10.0, "Keep your shoulders level, avoid rotating your torso");
    }
    if elbow_distance > MAX_ELBOW_DISTANCE {
        check.penalize(15.0, "Keep your elbows close to your body");
    }
    if asymmetry > MAX_ARM_ASYMMETRY {
        check.penalize(10.0, "Pull evenly with both arms");
    }

    let phase = elbow.phase(&PHASES);
    let confidence = average_confidence(frame, &REQUIRED);
    check.finish(ExerciseKind::BentRow, elbow.primary(), phase, confidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::{row_frame, without};

    #[test]
    fn test_extended_arms_are_eccentric() {
        let analysis = analyze(&row_frame(170.0, 45.0), 0.5);
        assert!(analysis.is_valid);
        assert_eq!(analysis.phase, MovementPhase::Eccentric);
        assert_eq!(analysis.quality, 100.0);
        assert_eq!(analysis.feedback, vec!["Good hip hinge".to_string()]);
    }

    #[test]
    fn test_pulled_arms_are_concentric() {
        let analysis = analyze(&row_frame(70.0, 45.0), 0.5);
        assert_eq!(analysis.phase, MovementPhase::Concentric);
        assert!((analysis.metric("elbow_angle").unwrap() - 70.0).abs() < 0.1);
    }

    #[test]
    fn test_upright_torso_penalized() {
        let analysis = analyze(&row_frame(120.0, 10.0), 0.5);
        assert_eq!(analysis.phase, MovementPhase::Isometric);
        assert_eq!(analysis.quality, 85.0);
        assert_eq!(analysis.feedback, vec!["Hinge forward at the hips, your torso is too upright".to_string()]);
    }

    #[test]
    fn test_flared_elbows_penalized() {
        let mut frame = row_frame(120.0, 45.0);
        frame[LEFT_ELBOW].x += 0.2;
        frame[RIGHT_ELBOW].x += 0.2;
        let analysis = analyze(&frame, 0.5);
        assert!(analysis.metric("elbow_torso_distance").unwrap() > MAX_ELBOW_DISTANCE);
        assert!(analysis.feedback.iter().any(|f| f == "Keep your elbows close to your body"));
    }

    #[test]
    fn test_uneven_arms_penalized() {
        let mut frame = row_frame(170.0, 45.0);
        let pulled = row_frame(90.0, 45.0);
        frame[RIGHT_WRIST] = pulled[RIGHT_WRIST];
        let analysis = analyze(&frame, 0.5);
        assert!((analysis.metric("arm_asymmetry").unwrap() - 80.0).abs() < 0.5);
        assert!(analysis.feedback.iter().any(|f| f == "Pull evenly with both arms"));
        assert_eq!(analysis.quality, 90.0);
    }

    #[test]
    fn test_hidden_wrist_is_invalid() {
        let analysis = analyze(&without(row_frame(170.0, 45.0), RIGHT_WRIST), 0.5);
        assert!(!analysis.is_valid);
        assert_eq!(analysis.feedback, vec![POSITION_HINT.to_string()]);
    }
}
