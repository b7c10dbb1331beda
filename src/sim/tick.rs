//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically, plus the state
//! machine transitions driven by input and collisions.

use super::physics::{self, BoundsContact};
use super::spawner;
use super::state::{CrashCause, GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap / start / restart (click, tap, space)
    pub flap: bool,
    /// Demo mode - the game flaps for the player
    pub autopilot: bool,
}

/// Handle the single player trigger
///
/// Starts or restarts the run when not playing; otherwise flaps. Never changes
/// phase while Playing.
pub fn on_input(state: &mut GameState) {
    match state.phase {
        GamePhase::NotStarted | GamePhase::GameOver => state.restart(),
        GamePhase::Playing => {
            physics::apply_impulse(&mut state.bird, state.tuning.jump_velocity);
            state.emit(GameEvent::Flapped);
        }
    }
}

/// End the run; ignored unless Playing so a breach fires exactly once
pub fn on_collision_detected(state: &mut GameState, cause: CrashCause) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.phase = GamePhase::GameOver;
    log::info!("Run over: {:?} with score {}", cause, state.score);
    state.emit(GameEvent::Crashed {
        score: state.score,
        cause,
    });
}

/// Count one passed pipe
pub fn on_score_increment(state: &mut GameState) {
    state.score += 1;
    state.emit(GameEvent::Scored { score: state.score });
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64) {
    state.time_ticks += 1;
    state.clock_ms += dt_ms;

    let autopilot_flap = input.autopilot && state.is_playing() && autopilot_wants_flap(state);
    if input.flap || autopilot_flap {
        on_input(state);
    }

    // Don't simulate unless a run is in progress
    if !state.is_playing() {
        return;
    }

    // Bird
    physics::apply_gravity(&mut state.bird, state.tuning.gravity);
    if physics::clamp_bounds(&mut state.bird, state.tuning.ground_line()) == BoundsContact::Ground {
        on_collision_detected(state, CrashCause::Ground);
        return;
    }

    // Pipes
    let now = state.clock_ms;
    spawner::maybe_spawn(state, now);
    let (speed, width) = (state.tuning.pipe_speed, state.tuning.pipe_width);
    spawner::advance(&mut state.pipes, speed, width);

    for i in 0..state.pipes.len() {
        if physics::has_passed(&state.bird, &state.pipes[i], width) {
            state.pipes[i].passed = true;
            on_score_increment(state);
        }

        if physics::check_pipe_collision(&state.bird, &state.pipes[i], width) {
            on_collision_detected(state, CrashCause::Pipe);
            break;
        }
    }
}

/// Demo mode: flap when falling below the aim point of the next gap
///
/// The aim sits far enough above the gap bottom that one flap (which lifts the
/// bird by roughly jump²/2g) keeps it inside the gap.
fn autopilot_wants_flap(state: &GameState) -> bool {
    let bird = &state.bird;
    let tuning = &state.tuning;

    let next_gap_bottom = state
        .pipes
        .iter()
        .find(|p| p.right(tuning.pipe_width) >= bird.x - bird.radius)
        .map(|p| p.bottom_y);

    let aim = match next_gap_bottom {
        Some(bottom) => bottom - bird.radius - 30.0,
        None => tuning.world_height * 0.5,
    };

    bird.velocity >= 0.0 && bird.y > aim
}
