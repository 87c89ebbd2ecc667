//! Distances between landmarks
//!
//! All distances are in normalized frame units.

use crate::pose::Landmark;

/// Euclidean distance including depth (missing z counts as 0)
pub fn distance_3d(a: &Landmark, b: &Landmark) -> f32 {
    (b.to_vector3() - a.to_vector3()).norm()
}

/// Euclidean distance on the image plane
pub fn distance_2d(a: &Landmark, b: &Landmark) -> f32 {
    (b.to_vector2() - a.to_vector2()).norm()
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`
///
/// |(b - a) × (p - a)| / |b - a|, measured on the image plane. Falls back to
/// the plain distance p→a when the line collapses to a point.
pub fn point_to_line_distance(p: &Landmark, a: &Landmark, b: &Landmark) -> f32 {
    let baseline = b.to_vector2() - a.to_vector2();
    let length = baseline.norm();
    if length < 1e-6 {
        return distance_2d(p, a);
    }

    let offset = p.to_vector2() - a.to_vector2();
    baseline.perp(&offset).abs() / length
}
