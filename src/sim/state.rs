//! Game state and core simulation types
//!
//! One `GameState` is the whole session: the frame loop owns it, the renderer
//! reads it, and every other collaborator only sees the events it emits.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input
    NotStarted,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for input to restart
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Bird touched the ground strip
    Ground,
    /// Bird hit a pipe segment
    Pipe,
}

/// Notifications for collaborators outside the simulation (audio, HUD, logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run began (from NotStarted or GameOver)
    Started,
    /// Jump impulse applied
    Flapped,
    /// A pipe was passed; carries the new score
    Scored { score: u32 },
    /// The run ended; carries the final score
    Crashed { score: u32, cause: CrashCause },
    /// A pipe entered at the right edge
    PipeSpawned,
}

/// The player's bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Fixed horizontal position of the center
    pub x: f32,
    /// Vertical position of the center (down is positive)
    pub y: f32,
    /// Vertical velocity per tick (down is positive)
    pub velocity: f32,
    /// Collision radius
    pub radius: f32,
}

impl Bird {
    /// A bird at its start position, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.bird_x,
            y: tuning.bird_start_y,
            velocity: 0.0,
            radius: tuning.bird_radius,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.radius
    }
}

/// A pipe obstacle (top + bottom pair with a gap)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Height of the top segment (gap starts here)
    pub top_height: f32,
    /// Y where the bottom segment starts (gap ends here)
    pub bottom_y: f32,
    /// Whether the bird has passed this pipe (for scoring)
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            top_height,
            bottom_y: top_height + gap,
            passed: false,
        }
    }

    /// Right (trailing) edge
    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// World constants for this session
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Pipes passed this run
    pub score: u32,
    /// The bird
    pub bird: Bird,
    /// Active pipes, oldest (leftmost) first
    pub pipes: Vec<Pipe>,
    /// Simulated wall clock (ms), advances every tick in every phase
    pub clock_ms: f64,
    /// Clock reading when the last pipe spawned
    pub last_spawn_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Gap placement RNG
    pub(crate) rng: Pcg32,
    /// Events not yet handed to collaborators
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session waiting for the first input
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            bird: Bird::new(&tuning),
            tuning,
            seed,
            phase: GamePhase::NotStarted,
            score: 0,
            pipes: Vec::new(),
            clock_ms: 0.0,
            last_spawn_ms: 0.0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Reset all run data and enter Playing
    ///
    /// The spawn timer restarts from the current clock, so the first pipe
    /// arrives one full interval after the start.
    pub fn restart(&mut self) {
        self.bird = Bird::new(&self.tuning);
        self.pipes.clear();
        self.score = 0;
        self.last_spawn_ms = self.clock_ms;
        self.phase = GamePhase::Playing;
        log::info!("Run started (seed {}, t={:.0}ms)", self.seed, self.clock_ms);
        self.emit(GameEvent::Started);
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Queue an event for collaborators
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events emitted since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(Tuning::default(), 7);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird.x, 150.0);
        assert_eq!(state.bird.y, 300.0);
        assert_eq!(state.bird.velocity, 0.0);
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_restart_resets_run_data() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.phase = GamePhase::GameOver;
        state.score = 12;
        state.bird.y = 530.0;
        state.bird.velocity = 9.0;
        state.pipes.push(Pipe::new(100.0, 120.0, 200.0));
        state.clock_ms = 4_000.0;

        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird, Bird::new(&state.tuning));
        assert_eq!(state.last_spawn_ms, 4_000.0);
        assert_eq!(state.pending_events(), &[GameEvent::Started]);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.emit(GameEvent::Flapped);
        state.emit(GameEvent::Scored { score: 1 });

        let drained: Vec<_> = state.drain_events().collect();
        assert_eq!(drained, vec![GameEvent::Flapped, GameEvent::Scored { score: 1 }]);
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_pipe_geometry() {
        let pipe = Pipe::new(400.0, 100.0, 200.0);
        assert_eq!(pipe.bottom_y, 300.0);
        assert_eq!(pipe.right(80.0), 480.0);
        assert!(!pipe.passed);
    }
}
