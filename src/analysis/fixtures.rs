//! Synthetic side-view poses for tests
//!
//! Left and right landmarks coincide, as they roughly do when filmed from
//! the side. All points are fully visible.

use crate::pose::*;

pub fn blank_frame() -> Vec<Landmark> {
    vec![Landmark::new(0.5, 0.5).with_visibility(1.0); LANDMARK_COUNT]
}

fn set_pair(frame: &mut [Landmark], left: usize, right: usize, x: f32, y: f32) {
    let lm = Landmark::new(x, y).with_visibility(1.0);
    frame[left] = lm;
    frame[right] = lm;
}

/// Hide one landmark (visibility 0)
pub fn without(mut frame: Vec<Landmark>, index: usize) -> Vec<Landmark> {
    frame[index].visibility = Some(0.0);
    frame
}

/// Squat with the given knee angle and torso lean (degrees); shins vertical
pub fn squat_frame(knee_angle: f32, torso_lean: f32) -> Vec<Landmark> {
    squat_frame_with_shin(knee_angle, torso_lean, 0.0)
}

/// Squat whose shins tilt forward by `shin_tilt` degrees from vertical
pub fn squat_frame_with_shin(knee_angle: f32, torso_lean: f32, shin_tilt: f32) -> Vec<Landmark> {
    let mut frame = blank_frame();
    let (theta, phi, tilt) = (knee_angle.to_radians(), torso_lean.to_radians(), shin_tilt.to_radians());

    let (ankle_x, ankle_y) = (0.5, 0.9);
    let knee_x = ankle_x + 0.2 * tilt.sin();
    let knee_y = ankle_y - 0.2 * tilt.cos();
    // Thigh direction is the knee→ankle direction turned by the knee angle
    let hip_x = knee_x - 0.2 * (theta + tilt).sin();
    let hip_y = knee_y + 0.2 * (theta + tilt).cos();
    let shoulder_x = hip_x + 0.3 * phi.sin();
    let shoulder_y = hip_y - 0.3 * phi.cos();

    set_pair(&mut frame, LEFT_ANKLE, RIGHT_ANKLE, ankle_x, ankle_y);
    set_pair(&mut frame, LEFT_KNEE, RIGHT_KNEE, knee_x, knee_y);
    set_pair(&mut frame, LEFT_HIP, RIGHT_HIP, hip_x, hip_y);
    set_pair(&mut frame, LEFT_SHOULDER, RIGHT_SHOULDER, shoulder_x, shoulder_y);
    frame
}

/// Bent row with the given elbow angle and torso lean; upper arm hangs straight down
pub fn row_frame(elbow_angle: f32, torso_lean: f32) -> Vec<Landmark> {
    let mut frame = blank_frame();
    let (theta, phi) = (elbow_angle.to_radians(), torso_lean.to_radians());

    let (hip_x, hip_y) = (0.5, 0.6);
    let shoulder_x = hip_x + 0.3 * phi.sin();
    let shoulder_y = hip_y - 0.3 * phi.cos();
    let (elbow_x, elbow_y) = (shoulder_x, shoulder_y + 0.15);
    let wrist_x = elbow_x + 0.15 * theta.sin();
    let wrist_y = elbow_y - 0.15 * theta.cos();

    set_pair(&mut frame, LEFT_HIP, RIGHT_HIP, hip_x, hip_y);
    set_pair(&mut frame, LEFT_SHOULDER, RIGHT_SHOULDER, shoulder_x, shoulder_y);
    set_pair(&mut frame, LEFT_ELBOW, RIGHT_ELBOW, elbow_x, elbow_y);
    set_pair(&mut frame, LEFT_WRIST, RIGHT_WRIST, wrist_x, wrist_y);
    frame
}

/// Push-up with the given elbow angle; `hip_drop` moves the hips below
/// (positive) or above (negative) the shoulder-ankle line
pub fn push_up_frame(elbow_angle: f32, hip_drop: f32) -> Vec<Landmark> {
    let mut frame = blank_frame();
    let theta = elbow_angle.to_radians();

    let (shoulder_x, shoulder_y) = (0.3, 0.5);
    let (elbow_x, elbow_y) = (0.3, 0.62);
    let wrist_x = elbow_x + 0.12 * theta.sin();
    let wrist_y = elbow_y - 0.12 * theta.cos();

    set_pair(&mut frame, LEFT_SHOULDER, RIGHT_SHOULDER, shoulder_x, shoulder_y);
    set_pair(&mut frame, LEFT_ELBOW, RIGHT_ELBOW, elbow_x, elbow_y);
    set_pair(&mut frame, LEFT_WRIST, RIGHT_WRIST, wrist_x, wrist_y);
    set_pair(&mut frame, LEFT_HIP, RIGHT_HIP, 0.6, 0.5 + hip_drop);
    set_pair(&mut frame, LEFT_ANKLE, RIGHT_ANKLE, 0.9, 0.5);
    frame
}
