//! Fixed-step pacing
//!
//! Folds variable wall-clock frame deltas into whole simulation ticks. The
//! simulation itself never sees a delta; it only sees how many ticks to run.

use crate::consts::MAX_SUBSTEPS;

/// Longest frame delta accepted before clamping (seconds)
const MAX_FRAME_DELTA: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
}

impl FixedStep {
    /// Pace at `ticks_per_second`; zero falls back to one tick per second
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: 1.0 / ticks_per_second.max(1) as f32,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed a frame delta in seconds; returns how many ticks to run now.
    /// Long stalls are clamped so a slow frame cannot snowball.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DELTA) } else { 0.0 };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= self.step {
            log::debug!("Dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedStep::new(60);
        assert_eq!(clock.advance(0.010), 0);
        assert_eq!(clock.advance(0.010), 1);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn test_caps_substeps() {
        let mut clock = FixedStep::new(1000);
        assert_eq!(clock.advance(0.1), MAX_SUBSTEPS);
        // Backlog was dropped
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut clock = FixedStep::new(60);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(FixedStep::new(0).step(), 1.0);
    }
}
