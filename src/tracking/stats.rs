//! Session aggregator - running totals over accepted reps

use serde::Serialize;

use super::rep_counter::RepData;

#[derive(Debug, Default)]
pub struct SessionStats {
    history: Vec<RepData>,
    quality_sum: f32,
    confidence_sum: f32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, rep: RepData) {
        self.quality_sum += rep.quality;
        self.confidence_sum += rep.confidence;
        self.history.push(rep);
    }

    pub fn rep_count(&self) -> u32 {
        self.history.len() as u32
    }

    /// Mean rep quality rounded to an integer; 0 before the first rep
    pub fn average_quality(&self) -> u32 {
        if self.history.is_empty() {
            return 0;
        }
        (self.quality_sum / self.history.len() as f32).round() as u32
    }

    /// Mean rep confidence rounded to 2 decimals; 0 before the first rep
    pub fn average_confidence(&self) -> f32 {
        if self.history.is_empty() {
            return 0.0;
        }
        let mean = self.confidence_sum / self.history.len() as f32;
        (mean * 100.0).round() / 100.0
    }

    pub fn last_rep_duration(&self) -> Option<f32> {
        self.history.last().map(|rep| rep.duration_s)
    }

    pub fn history(&self) -> &[RepData] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.quality_sum = 0.0;
        self.confidence_sum = 0.0;
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            rep_count: self.rep_count(),
            average_quality: self.average_quality(),
            average_confidence: self.average_confidence(),
            last_rep_duration: self.last_rep_duration(),
            reps: self.history.clone(),
        }
    }
}

/// Serializable snapshot of a session's totals
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSummary {
    pub rep_count: u32,
    pub average_quality: u32,
    pub average_confidence: f32,
    pub last_rep_duration: Option<f32>,
    pub reps: Vec<RepData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rep(number: u32, quality: f32, confidence: f32, duration_s: f32) -> RepData {
        RepData {
            number,
            duration_s,
            quality,
            confidence,
            completed_at_ms: number as f64 * 1000.0,
        }
    }

    #[test]
    fn test_empty_session() {
        let stats = SessionStats::new();
        assert_eq!(stats.rep_count(), 0);
        assert_eq!(stats.average_quality(), 0);
        assert_eq!(stats.average_confidence(), 0.0);
        assert_eq!(stats.last_rep_duration(), None);
    }

    #[test]
    fn test_rounded_averages() {
        let mut stats = SessionStats::new();
        stats.record(rep(1, 85.0, 0.912, 1.2));
        stats.record(rep(2, 70.0, 0.871, 1.6));

        assert_eq!(stats.rep_count(), 2);
        // 77.5 rounds half away from zero
        assert_eq!(stats.average_quality(), 78);
        assert!((stats.average_confidence() - 0.89).abs() < 1e-6);
        assert_eq!(stats.last_rep_duration(), Some(1.6));
        assert_eq!(stats.history()[0].number, 1);
    }

    #[test]
    fn test_summary_and_clear() {
        let mut stats = SessionStats::new();
        stats.record(rep(1, 90.0, 1.0, 2.0));
        let summary = stats.summary();
        assert_eq!(summary.rep_count, 1);
        assert_eq!(summary.reps.len(), 1);

        stats.clear();
        assert_eq!(stats.rep_count(), 0);
        assert_eq!(stats.average_quality(), 0);
    }
}
