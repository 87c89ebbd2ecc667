//! Frame rate cap
//!
//! Frames arriving closer together than the minimum interval are dropped,
//! never queued, so a fast producer cannot build up a backlog.

#[derive(Debug)]
pub struct FrameGate {
    min_interval_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl FrameGate {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last_accepted_ms: None,
        }
    }

    /// Whether a frame at this timestamp should be processed
    ///
    /// A timestamp earlier than the last accepted one (clock reset on the
    /// JS side) is accepted and re-anchors the gate.
    pub fn accept(&mut self, timestamp_ms: f64) -> bool {
        let open = match self.last_accepted_ms {
            None => true,
            Some(last) if timestamp_ms < last => true,
            Some(last) => timestamp_ms - last >= self.min_interval_ms,
        };
        if open {
            self.last_accepted_ms = Some(timestamp_ms);
        }
        open
    }

    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}
