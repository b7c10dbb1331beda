//! Fixed-step frame clock
//!
//! Turns display refresh timestamps into a whole number of simulation ticks so
//! the per-tick physics runs at the same speed on 60 Hz and 144 Hz displays.

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, SIM_DT_MS};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator_ms: f64,
    last_time_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a refresh timestamp, get the number of ticks to run this frame
    ///
    /// The first frame runs exactly one tick. Long gaps are clamped to
    /// `MAX_FRAME_MS`, and time beyond `MAX_SUBSTEPS` ticks is dropped.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_time_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => SIM_DT_MS,
        };
        self.last_time_ms = Some(now_ms);
        self.accumulator_ms += dt;

        let mut substeps = 0;
        while self.accumulator_ms >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
            self.accumulator_ms -= SIM_DT_MS;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator_ms = self.accumulator_ms.min(SIM_DT_MS);
        }

        substeps
    }

    /// Forget the last timestamp (after the tab was hidden, for example)
    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
        self.last_time_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_one_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(12_345.0), 1);
    }

    #[test]
    fn test_sixty_hz_is_one_tick_per_frame() {
        let mut clock = FrameClock::new();
        let mut t = 0.0;
        clock.advance(t);
        let mut total = 0;
        for _ in 0..600 {
            t += SIM_DT_MS;
            total += clock.advance(t);
        }
        assert!((599..=600).contains(&total), "{total}");
    }

    #[test]
    fn test_high_refresh_rate_accumulates() {
        let mut clock = FrameClock::new();
        let mut t = 0.0;
        clock.advance(t);
        let mut total = 0;
        // One second at 144 Hz
        for _ in 0..144 {
            t += 1000.0 / 144.0;
            total += clock.advance(t);
        }
        assert!((59..=60).contains(&total), "{total}");
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        // A 5 second stall only yields MAX_FRAME_MS worth of ticks
        let ticks = clock.advance(5_000.0);
        // 100ms is six ticks, give or take float rounding of the step
        assert!((5..=6).contains(&ticks), "{ticks}");
        assert!(ticks <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        clock.advance(50.0);
        clock.reset();
        assert_eq!(clock.advance(90_000.0), 1);
    }
}
