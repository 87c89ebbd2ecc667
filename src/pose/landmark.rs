//! Landmark - one detected body keypoint
//!
//! Coordinates are normalized to the video frame (0-1 per axis). Depth and
//! visibility are optional because not every pose model reports them.

use nalgebra::{Vector2, Vector3};

use crate::geometry::lerp;

/// Number of points in the reference skeleton
pub const LANDMARK_COUNT: usize = 33;

/// A single pose landmark (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized, grows downwards
    pub z: Option<f32>,
    pub visibility: Option<f32>,
}

impl Landmark {
    /// 2D landmark with full visibility
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: None, visibility: None }
    }

    pub fn with_z(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Visibility, treating an unscored landmark as fully visible
    pub fn confidence(&self) -> f32 {
        self.visibility.unwrap_or(1.0)
    }

    /// Position with missing depth treated as 0
    pub fn to_vector3(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z.unwrap_or(0.0))
    }

    /// Position projected onto the image plane
    pub fn to_vector2(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }

    /// Point halfway between two landmarks.
    ///
    /// Depth is kept only when both sides report it; visibility is the
    /// weaker of the two.
    pub fn midpoint(&self, other: &Landmark) -> Landmark {
        let z = match (self.z, other.z) {
            (Some(a), Some(b)) => Some(lerp(a, b, 0.5)),
            _ => None,
        };
        Landmark {
            x: lerp(self.x, other.x, 0.5),
            y: lerp(self.y, other.y, 0.5),
            z,
            visibility: Some(self.confidence().min(other.confidence())),
        }
    }
}
