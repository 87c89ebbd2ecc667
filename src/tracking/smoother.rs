//! Confidence-weighted smoothing of the primary joint angle
//!
//! Keeps the last few (angle, confidence) samples. Each sample's weight is
//! its confidence times decay^age, so the newest confident frames dominate
//! and stale or uncertain ones fade out.

use std::collections::VecDeque;

/// Default number of samples kept
pub const DEFAULT_CAPACITY: usize = 5;

/// Default recency decay per sample of age
pub const DEFAULT_DECAY: f32 = 0.8;

#[derive(Clone, Copy, Debug)]
struct Sample {
    value: f32,
    weight: f32,
}

/// Rolling weighted-average smoother
#[derive(Debug)]
pub struct ConfidenceSmoother {
    /// Oldest first
    samples: VecDeque<Sample>,
    capacity: usize,
    decay: f32,
}

impl ConfidenceSmoother {
    pub fn new(capacity: usize, decay: f32) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
            decay,
        }
    }

    /// Add a sample and return the smoothed estimate
    ///
    /// Falls back to the raw value when every buffered confidence is zero.
    pub fn push(&mut self, value: f32, confidence: f32) -> f32 {
        self.samples.push_back(Sample { value, weight: confidence });
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }

        let n = self.samples.len();
        let (weighted_sum, weight_sum) = self
            .samples
            .iter()
            .enumerate()
            .fold((0.0_f32, 0.0_f32), |(acc, total), (i, s)| {
                let w = s.weight * self.decay.powi((n - 1 - i) as i32);
                (acc + s.value * w, total + w)
            });

        if weight_sum > 0.0 {
            weighted_sum / weight_sum
        } else {
            value
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear the buffer (exercise change or session reset)
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for ConfidenceSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_DECAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_signal_is_unchanged() {
        for confidence in [0.1, 0.5, 1.0] {
            let mut smoother = ConfidenceSmoother::default();
            let mut out = 0.0;
            for _ in 0..5 {
                out = smoother.push(120.0, confidence);
            }
            assert!((out - 120.0).abs() < 1e-4, "confidence {} gave {}", confidence, out);
        }
    }

    #[test]
    fn test_capacity_bound() {
        let mut smoother = ConfidenceSmoother::default();
        for i in 0..12 {
            smoother.push(i as f32, 1.0);
            assert!(smoother.len() <= smoother.capacity());
        }
        assert_eq!(smoother.len(), 5);
    }

    #[test]
    fn test_recent_samples_dominate() {
        let mut smoother = ConfidenceSmoother::default();
        smoother.push(100.0, 1.0);
        let out = smoother.push(200.0, 1.0);
        // (100 * 0.8 + 200 * 1.0) / 1.8
        assert!((out - 155.555).abs() < 0.01);
    }

    #[test]
    fn test_low_confidence_sample_has_little_pull() {
        let mut smoother = ConfidenceSmoother::default();
        for _ in 0..4 {
            smoother.push(170.0, 1.0);
        }
        let out = smoother.push(60.0, 0.05);
        assert!(out > 160.0, "got {}", out);
    }

    #[test]
    fn test_zero_confidence_falls_back_to_raw() {
        let mut smoother = ConfidenceSmoother::default();
        assert_eq!(smoother.push(42.0, 0.0), 42.0);
        assert_eq!(smoother.push(43.0, 0.0), 43.0);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut smoother = ConfidenceSmoother::new(2, 1.0);
        smoother.push(1000.0, 1.0);
        smoother.push(10.0, 1.0);
        let out = smoother.push(20.0, 1.0);
        assert!((out - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_clear() {
        let mut smoother = ConfidenceSmoother::default();
        smoother.push(10.0, 1.0);
        smoother.clear();
        assert!(smoother.is_empty());
        assert_eq!(smoother.push(90.0, 1.0), 90.0);
    }
}
