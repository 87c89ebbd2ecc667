//! Scalar helpers shared by the analyzers and trackers

/// Clamp into [0, 1]
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Clamp a form-quality score into [0, 100]
pub fn clamp_score(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}

/// Linear interpolation from `a` to `b`; `t` is not clamped
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_score(-35.0), 0.0);
        assert_eq!(clamp_score(64.0), 64.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    }
}
