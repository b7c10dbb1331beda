//! Sky Flap - a flappy-bird style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipes, game state machine)
//! - `renderer`: 2D canvas painter and the WebGPU sky backdrop
//! - `audio`: Procedural sound cues (Web Audio)
//! - `tuning`: World constants for a session
//! - `settings`: Player preferences

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game loop constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz, the rate the
    /// per-tick physics constants were tuned for)
    pub const SIM_DT_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap fed to the accumulator (tab switches, debugger pauses)
    pub const MAX_FRAME_MS: f64 = 100.0;
}
