//! Landmark decoding - flat Float32Array from JS into pose landmarks
//!
//! Wire layout is 4 floats per landmark: x, y, z, visibility. NaN in the
//! z or visibility slot means the pose model did not report that value.

use log::{debug, warn};

use crate::pose::{Landmark, LANDMARK_COUNT, MIN_FRAME_LEN};

pub const FLOATS_PER_LANDMARK: usize = 4;

/// Decode one frame; `None` when the buffer is not a whole number of landmarks
pub fn parse_landmarks(data: &[f32]) -> Option<Vec<Landmark>> {
    if data.len() % FLOATS_PER_LANDMARK != 0 {
        warn!(
            "Invalid landmark data length: {} (expected a multiple of {})",
            data.len(),
            FLOATS_PER_LANDMARK
        );
        return None;
    }

    let frame: Vec<Landmark> = data
        .chunks_exact(FLOATS_PER_LANDMARK)
        .map(|chunk| Landmark {
            x: chunk[0],
            y: chunk[1],
            z: present(chunk[2]),
            visibility: present(chunk[3]),
        })
        .collect();

    if frame.len() < MIN_FRAME_LEN {
        debug!("short frame: {} of {} landmarks", frame.len(), LANDMARK_COUNT);
    }
    Some(frame)
}

fn present(value: f32) -> Option<f32> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}
