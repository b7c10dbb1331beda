//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies (collaborators read events)

pub mod clock;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use physics::{BoundsContact, apply_gravity, apply_impulse, check_pipe_collision, clamp_bounds};
pub use spawner::{advance, maybe_spawn, spawn_pipe_at};
pub use state::{Bird, CrashCause, GameEvent, GamePhase, GameState, Pipe};
pub use tick::{TickInput, on_collision_detected, on_input, on_score_increment, tick};
