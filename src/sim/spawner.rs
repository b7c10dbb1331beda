//! Pipe spawning and scrolling
//!
//! Pipes enter at the right edge on a fixed wall-clock cadence with a random
//! gap height, scroll left at a constant speed and are dropped once fully off
//! the left edge.

use rand::Rng;

use super::state::{GameEvent, GameState, Pipe};

/// Spawn a pipe if more than one spawn interval has elapsed since the last one
///
/// Returns true when a pipe was created.
pub fn maybe_spawn(state: &mut GameState, now_ms: f64) -> bool {
    if now_ms - state.last_spawn_ms <= state.tuning.spawn_interval_ms {
        return false;
    }

    let min = state.tuning.pipe_min_height;
    let max = state.tuning.max_gap_top();
    let top_height = if max > min {
        state.rng.random_range(min..=max)
    } else {
        min
    };

    spawn_pipe_at(state, state.tuning.world_width, top_height);
    state.last_spawn_ms = now_ms;
    true
}

/// Push a pipe with a given gap-top height at a given x
pub fn spawn_pipe_at(state: &mut GameState, x: f32, top_height: f32) {
    let pipe = Pipe::new(x, top_height, state.tuning.pipe_gap);
    log::debug!(
        "Pipe spawned at x={:.0}, gap {:.0}..{:.0}",
        pipe.x,
        pipe.top_height,
        pipe.bottom_y
    );
    state.pipes.push(pipe);
    state.emit(GameEvent::PipeSpawned);
}

/// Scroll every pipe left and drop the ones fully past the left edge
pub fn advance(pipes: &mut Vec<Pipe>, speed: f32, pipe_width: f32) {
    for pipe in pipes.iter_mut() {
        pipe.x -= speed;
    }
    pipes.retain(|p| p.right(pipe_width) >= 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT_MS;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn state_with(tuning: Tuning) -> GameState {
        let mut state = GameState::new(tuning, 42);
        state.restart();
        state.drain_events().for_each(drop);
        state
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut state = state_with(Tuning::default());
        assert!(!maybe_spawn(&mut state, 1_000.0));
        // Exactly one interval is not enough, it must be exceeded
        assert!(!maybe_spawn(&mut state, 1_500.0));
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_spawn_after_interval() {
        let mut state = state_with(Tuning::default());
        assert!(maybe_spawn(&mut state, 1_501.0));

        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.last_spawn_ms, 1_501.0);
        let pipe = state.pipes[0];
        assert_eq!(pipe.x, 400.0);
        assert!(pipe.top_height >= 50.0 && pipe.top_height <= 300.0);
        assert_eq!(pipe.bottom_y, pipe.top_height + 200.0);
        assert!(!pipe.passed);
        assert_eq!(state.pending_events(), &[GameEvent::PipeSpawned]);
    }

    #[test]
    fn test_gap_placement_is_seeded() {
        let mut a = state_with(Tuning::default());
        let mut b = state_with(Tuning::default());
        for i in 1..=5 {
            let now = i as f64 * 2_000.0;
            maybe_spawn(&mut a, now);
            maybe_spawn(&mut b, now);
        }
        assert_eq!(a.pipes, b.pipes);
    }

    #[test]
    fn test_degenerate_range_uses_min_height() {
        let tuning = Tuning {
            pipe_gap: 450.0,
            ..Default::default()
        };
        let mut state = state_with(tuning);
        maybe_spawn(&mut state, 2_000.0);
        assert_eq!(state.pipes[0].top_height, 50.0);
    }

    #[test]
    fn test_advance_scrolls_and_culls() {
        let mut pipes = vec![
            Pipe::new(-78.0, 100.0, 200.0),
            Pipe::new(-76.0, 100.0, 200.0),
            Pipe::new(200.0, 100.0, 200.0),
        ];
        advance(&mut pipes, 3.0, 80.0);

        // First pipe's right edge went to -1 and was removed, the second's is at +1
        assert_eq!(pipes.len(), 2);
        assert_eq!(pipes[0].x, -79.0);
        assert_eq!(pipes[1].x, 197.0);
    }

    #[test]
    fn test_spawn_cadence_over_time() {
        let mut state = state_with(Tuning::default());
        let total_ms = 30_000.0;
        let mut now = 0.0;
        let mut spawned = 0;
        while now < total_ms {
            now += SIM_DT_MS;
            if maybe_spawn(&mut state, now) {
                spawned += 1;
            }
        }
        let expected = (total_ms / 1_500.0).floor() as i64;
        assert!((spawned - expected).abs() <= 1, "spawned {spawned}, expected {expected}");
    }

    proptest! {
        #[test]
        fn prop_spawn_cadence(interval in 200.0f64..3_000.0, intervals in 1u32..10) {
            let tuning = Tuning { spawn_interval_ms: interval, ..Default::default() };
            let mut state = state_with(tuning);
            let total_ms = interval * intervals as f64;
            let mut now = 0.0;
            let mut spawned = 0i64;
            while now + SIM_DT_MS <= total_ms {
                now += SIM_DT_MS;
                if maybe_spawn(&mut state, now) {
                    spawned += 1;
                }
            }
            let expected = (total_ms / interval).floor() as i64;
            prop_assert!((spawned - expected).abs() <= 1, "spawned {} expected {}", spawned, expected);
        }

        #[test]
        fn prop_gap_within_bounds(seed in any::<u64>()) {
            let mut state = GameState::new(Tuning::default(), seed);
            state.restart();
            for i in 1..=20 {
                maybe_spawn(&mut state, i as f64 * 1_600.0);
            }
            prop_assert_eq!(state.pipes.len(), 20);
            for pipe in &state.pipes {
                prop_assert!(pipe.top_height >= 50.0 && pipe.top_height <= 300.0);
                prop_assert!(pipe.bottom_y <= 550.0 - 50.0);
            }
        }
    }
}
