//! Push-up analyzer
//!
//! Primary signal is the elbow angle. The body line is judged by how far
//! the hips sit from the straight line shoulder→ankle.

use super::exercise::ExerciseKind;
use super::types::{BiomechanicalAnalysis, FormCheck, JointPair, MovementPhase, PhaseThresholds};
use crate::geometry::{
    all_visible, angle_3d, average_confidence, checked_angle_3d, distance_2d, lerp, point_to_line_distance,
};
use crate::pose::*;

const REQUIRED: [usize; 10] = [
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_ANKLE, RIGHT_ANKLE,
];

const POSITION_HINT: &str = "Position yourself sideways to the camera with your whole body visible";

const PHASES: PhaseThresholds = PhaseThresholds {
    high: 160.0,
    low: 90.0,
    extended: MovementPhase::Rest,
};

/// Hip distance from the shoulder-ankle line, relative to body length
const MAX_LINE_DEVIATION: f32 = 0.08;
const IDEAL_LINE_DEVIATION: f32 = 0.04;
/// Hip-shoulder-elbow angle (degrees)
const MAX_ELBOW_FLARE: f32 = 110.0;
const MAX_ARM_ASYMMETRY: f32 = 15.0;

pub fn analyze(frame: &[Landmark], visibility_threshold: f32) -> BiomechanicalAnalysis {
    if !all_visible(frame, &REQUIRED, visibility_threshold) {
        return BiomechanicalAnalysis::not_visible(ExerciseKind::PushUp, POSITION_HINT);
    }
    let lm = |i: usize| frame[i];

    let (l_shoulder, r_shoulder) = (lm(LEFT_SHOULDER), lm(RIGHT_SHOULDER));
    let (l_elbow, r_elbow) = (lm(LEFT_ELBOW), lm(RIGHT_ELBOW));
    let (l_wrist, r_wrist) = (lm(LEFT_WRIST), lm(RIGHT_WRIST));
    let (l_hip, r_hip) = (lm(LEFT_HIP), lm(RIGHT_HIP));
    let (l_ankle, r_ankle) = (lm(LEFT_ANKLE), lm(RIGHT_ANKLE));

    let mut check = FormCheck::new();

    let elbow = JointPair::new(
        checked_angle_3d(&l_shoulder, &l_elbow, &l_wrist),
        checked_angle_3d(&r_shoulder, &r_elbow, &r_wrist),
    );
    check.metric("elbow_angle", elbow.reported());

    let shoulder = l_shoulder.midpoint(&r_shoulder);
    let hip = l_hip.midpoint(&r_hip);
    let ankle = l_ankle.midpoint(&r_ankle);
    let body_length = distance_2d(&shoulder, &ankle).max(1e-6);

    let deviation = check.metric(
        "body_line_deviation",
        point_to_line_distance(&hip, &shoulder, &ankle) / body_length,
    );
    check.metric("hip_angle", angle_3d(&shoulder, &hip, &ankle));
    let flare = check.metric(
        "elbow_flare",
        (angle_3d(&l_hip, &l_shoulder, &l_elbow) + angle_3d(&r_hip, &r_shoulder, &r_elbow)) / 2.0,
    );
    let asymmetry = check.metric("arm_asymmetry", elbow.asymmetry());

    if deviation > MAX_LINE_DEVIATION {
        if hips_below_line(&hip, &shoulder, &ankle) {
            check.penalize(20.0, "Your hips are sagging, brace your core");
        } else {
            check.penalize(20.0, "Your hips are too high, lower them in line with your body");
        }
    } else if deviation <= IDEAL_LINE_DEVIATION {
        check.praise("Body in a straight line");
    }
    if flare > MAX_ELBOW_FLARE {
        check.penalize(15.0, "Keep your elbows at about 45° from your body");
    }
    if asymmetry > MAX_ARM_ASYMMETRY {
        check.penalize(10.0, "Push evenly with both arms");
    }

    let phase = elbow.phase(&PHASES);
    let confidence = average_confidence(frame, &REQUIRED);
    check.finish(ExerciseKind::PushUp, elbow.primary(), phase, confidence)
}

/// Image y grows downwards, so "below" means a larger y than the line has
/// at the hip's x position.
fn hips_below_line(hip: &Landmark, shoulder: &Landmark, ankle: &Landmark) -> bool {
    let span = ankle.x - shoulder.x;
    if span.abs() < 1e-6 {
        return hip.y > shoulder.y;
    }
    let line_y = lerp(shoulder.y, ankle.y, (hip.x - shoulder.x) / span);
    hip.y > line_y
}
