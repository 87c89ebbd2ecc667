//! Joint angle calculation
//!
//! Angle at a vertex `b` between the vectors b→a and b→c. The 3D variant
//! uses the dot product; the 2D variant uses atan2 on the image plane and is
//! meant for side-view exercises where MediaPipe depth is unreliable.

use crate::pose::Landmark;

/// Vectors shorter than this are treated as zero length
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Calculate the angle at `b` in degrees, using full 3D coordinates
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Missing depth counts as 0. Returns 0 when either vector has no length;
/// callers must read that as "no information", not as a folded joint.
pub fn angle_3d(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
    checked_angle_3d(a, b, c).unwrap_or(0.0)
}

/// Same as [`angle_3d`], but `None` when either segment has no length
pub fn checked_angle_3d(a: &Landmark, b: &Landmark, c: &Landmark) -> Option<f32> {
    let v1 = a.to_vector3() - b.to_vector3();
    let v2 = c.to_vector3() - b.to_vector3();

    let mag1 = v1.norm();
    let mag2 = v2.norm();
    if mag1 < DEGENERATE_EPSILON || mag2 < DEGENERATE_EPSILON {
        return None;
    }

    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    Some(cos_angle.acos().to_degrees())
}

/// Calculate the angle at `b` in degrees on the x-y plane
///
/// Difference of the two atan2 headings, folded into [0, 180].
pub fn angle_2d(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
    let v1 = a.to_vector2() - b.to_vector2();
    let v2 = c.to_vector2() - b.to_vector2();
    if v1.norm() < DEGENERATE_EPSILON || v2.norm() < DEGENERATE_EPSILON {
        return 0.0;
    }

    let radians = v2.y.atan2(v2.x) - v1.y.atan2(v1.x);
    let degrees = radians.to_degrees().abs();
    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

/// Angle plus the trust it deserves.
///
/// The confidence is the minimum visibility of the three points: an angle
/// is only as good as its worst landmark.
pub fn weighted_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> (f32, f32) {
    let confidence = a.confidence().min(b.confidence()).min(c.confidence());
    (angle_3d(a, b, c), confidence)
}

/// Lean of the segment bottom→top away from vertical, in degrees
///
/// 0 = upright, 90 = horizontal. Image y grows downwards, so "up" is -y.
pub fn inclination_from_vertical(top: &Landmark, bottom: &Landmark) -> f32 {
    let above = Landmark::new(bottom.x, bottom.y - 1.0);
    angle_2d(top, bottom, &above)
}
