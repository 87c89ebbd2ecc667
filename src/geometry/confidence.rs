//! Confidence aggregation over landmark subsets
//!
//! A landmark without a visibility score counts as fully visible: an
//! available but unscored point is more useful than a discarded one.

use crate::pose::Landmark;

/// Mean visibility over the listed indices that exist in the frame
///
/// Returns 0 when none of the indices are present.
pub fn average_confidence(frame: &[Landmark], indices: &[usize]) -> f32 {
    let (sum, count) = indices
        .iter()
        .filter_map(|&i| frame.get(i))
        .fold((0.0_f32, 0_usize), |(sum, count), lm| (sum + lm.confidence(), count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}

/// Landmark exists and meets the visibility threshold
pub fn is_visible(frame: &[Landmark], index: usize, threshold: f32) -> bool {
    frame
        .get(index)
        .is_some_and(|lm| lm.confidence() >= threshold)
}

/// Every listed landmark is present and visible
pub fn all_visible(frame: &[Landmark], indices: &[usize], threshold: f32) -> bool {
    indices.iter().all(|&i| is_visible(frame, i, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_visibility() {
        let frame = vec![Landmark::new(0.5, 0.5).with_visibility(1.0); 4];
        assert_eq!(average_confidence(&frame, &[0, 1, 2, 3]), 1.0);
    }

    #[test]
    fn test_unscored_counts_as_visible() {
        let frame = vec![Landmark::new(0.5, 0.5), Landmark::new(0.5, 0.5).with_visibility(0.5)];
        assert!((average_confidence(&frame, &[0, 1]) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_empty_subset() {
        let frame = vec![Landmark::new(0.5, 0.5); 3];
        assert_eq!(average_confidence(&frame, &[]), 0.0);
        assert_eq!(average_confidence(&frame, &[10, 20]), 0.0);
    }

    #[test]
    fn test_visibility_threshold() {
        let frame = vec![
            Landmark::new(0.1, 0.1).with_visibility(0.5),
            Landmark::new(0.1, 0.1).with_visibility(0.49),
        ];
        assert!(is_visible(&frame, 0, 0.5));
        assert!(!is_visible(&frame, 1, 0.5));
        assert!(!is_visible(&frame, 7, 0.5));
        assert!(!all_visible(&frame, &[0, 1], 0.5));
        assert!(all_visible(&frame, &[0], 0.5));
    }
}
