//! Squat analyzer
//!
//! Primary signal is the knee angle (hip-knee-ankle). Works from a side or
//! a front view: lateral metrics only apply when the feet are far enough
//! apart on screen to be measured.

use super::exercise::ExerciseKind;
use super::types::{BiomechanicalAnalysis, FormCheck, JointPair, MovementPhase, PhaseThresholds};
use crate::geometry::{
    all_visible, angle_3d, average_confidence, checked_angle_3d, distance_2d,
    inclination_from_vertical,
};
use crate::pose::*;

const REQUIRED: [usize; 8] = [
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
];

const POSITION_HINT: &str = "Position yourself so your whole body, shoulders to ankles, is visible";

const PHASES: PhaseThresholds = PhaseThresholds {
    high: 160.0,
    low: 90.0,
    extended: MovementPhase::Rest,
};

/// Forward lean past this (degrees from vertical) loses the chest
const MAX_TORSO_LEAN: f32 = 45.0;
/// Horizontal knee travel over the ankle, relative to shin length. A deep
/// squat tilts the shin forward by up to about 40° (ratio ~0.64).
const MAX_KNEE_FORWARD: f32 = 0.65;
const MAX_KNEE_ASYMMETRY: f32 = 15.0;
/// Hip midpoint drift from the ankle midpoint, relative to stance width
const MAX_HIP_SHIFT: f32 = 0.25;
/// Below this stance width (front view) lateral shift is not measurable
const MIN_STANCE_WIDTH: f32 = 0.05;

pub fn analyze(frame: &[Landmark], visibility_threshold: f32) -> BiomechanicalAnalysis {
    if !all_visible(frame, &REQUIRED, visibility_threshold) {
        return BiomechanicalAnalysis::not_visible(ExerciseKind::Squat, POSITION_HINT);
    }
    let lm = |i: usize| frame[i];

    let (l_shoulder, r_shoulder) = (lm(LEFT_SHOULDER), lm(RIGHT_SHOULDER));
    let (l_hip, r_hip) = (lm(LEFT_HIP), lm(RIGHT_HIP));
    let (l_knee, r_knee) = (lm(LEFT_KNEE), lm(RIGHT_KNEE));
    let (l_ankle, r_ankle) = (lm(LEFT_ANKLE), lm(RIGHT_ANKLE));

    let mut check = FormCheck::new();

    let knee = JointPair::new(
        checked_angle_3d(&l_hip, &l_knee, &l_ankle),
        checked_angle_3d(&r_hip, &r_knee, &r_ankle),
    );
    check.metric("knee_angle", knee.reported());

    let hip_angle = (angle_3d(&l_shoulder, &l_hip, &l_knee) + angle_3d(&r_shoulder, &r_hip, &r_knee)) / 2.0;
    check.metric("hip_angle", hip_angle);

    let shoulder_mid = l_shoulder.midpoint(&r_shoulder);
    let hip_mid = l_hip.midpoint(&r_hip);
    let ankle_mid = l_ankle.midpoint(&r_ankle);

    let torso_angle = check.metric("torso_angle", inclination_from_vertical(&shoulder_mid, &hip_mid));
    let knee_forward = check.metric(
        "knee_forward_ratio",
        (knee_forward_ratio(&l_knee, &l_ankle) + knee_forward_ratio(&r_knee, &r_ankle)) / 2.0,
    );
    let asymmetry = check.metric("knee_asymmetry", knee.asymmetry());

    let stance_width = (l_ankle.x - r_ankle.x).abs();
    let hip_shift = if stance_width >= MIN_STANCE_WIDTH {
        (hip_mid.x - ankle_mid.x).abs() / stance_width
    } else {
        0.0
    };
    check.metric("hip_shift", hip_shift);

    let phase = knee.phase(&PHASES);

    if torso_angle > MAX_TORSO_LEAN {
        check.penalize(15.0, "Keep your chest up, you are leaning too far forward");
    }
    if knee_forward > MAX_KNEE_FORWARD {
        check.penalize(15.0, "Keep your knees aligned over your feet");
    }
    if asymmetry > MAX_KNEE_ASYMMETRY {
        check.penalize(10.0, "Distribute your weight evenly on both legs");
    }
    if hip_shift > MAX_HIP_SHIFT {
        check.penalize(10.0, "Avoid shifting your hips to one side");
    }
    if phase == MovementPhase::Concentric {
        check.praise("Great depth!");
    }

    let confidence = average_confidence(frame, &REQUIRED);
    check.finish(ExerciseKind::Squat, knee.primary(), phase, confidence)
}

fn knee_forward_ratio(knee: &Landmark, ankle: &Landmark) -> f32 {
    let shin = distance_2d(knee, ankle);
    if shin < 1e-6 {
        return 0.0;
    }
    (knee.x - ankle.x).abs() / shin
}
