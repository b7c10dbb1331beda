//! World tuning
//!
//! Every constant that shapes the playfield and the feel of the bird lives
//! here. Values are per simulation tick (see `consts::SIM_DT_MS`) or in world
//! units (canvas pixels, y grows downward).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a tuning table cannot be used
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("gap of {gap} does not fit between min height {min_height} and the ground at {ground_line}")]
    GapDoesNotFit {
        gap: f32,
        min_height: f32,
        ground_line: f32,
    },

    #[error("bird start y {start_y} is outside the playfield (radius {radius}, ground at {ground_line})")]
    BirdOutOfBounds {
        start_y: f32,
        radius: f32,
        ground_line: f32,
    },
}

/// World constants, fixed for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Playfield width
    pub world_width: f32,
    /// Playfield height (ground strip included)
    pub world_height: f32,
    /// Height of the ground strip at the bottom
    pub ground_height: f32,

    /// Downward acceleration added to velocity every tick
    pub gravity: f32,
    /// Velocity assigned on a flap (negative = upward)
    pub jump_velocity: f32,

    /// Fixed horizontal position of the bird's center
    pub bird_x: f32,
    /// Vertical position the bird is reset to on start
    pub bird_start_y: f32,
    /// Collision radius of the bird
    pub bird_radius: f32,

    /// Leftward pipe movement per tick
    pub pipe_speed: f32,
    /// Pipe width
    pub pipe_width: f32,
    /// Vertical size of the gap between top and bottom pipe
    pub pipe_gap: f32,
    /// Minimum height of either pipe segment
    pub pipe_min_height: f32,
    /// Time between pipe spawns
    pub spawn_interval_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_height: 600.0,
            ground_height: 50.0,

            gravity: 0.5,
            jump_velocity: -10.0,

            bird_x: 150.0,
            bird_start_y: 300.0,
            bird_radius: 20.0,

            pipe_speed: 3.0,
            pipe_width: 80.0,
            pipe_gap: 200.0,
            pipe_min_height: 50.0,
            spawn_interval_ms: 1500.0,
        }
    }
}

impl Tuning {
    /// Y coordinate of the top of the ground strip
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.world_height - self.ground_height
    }

    /// Largest gap-top height a spawned pipe may get
    #[inline]
    pub fn max_gap_top(&self) -> f32 {
        self.ground_line() - self.pipe_gap - self.pipe_min_height
    }

    /// Check that the constants describe a playable world
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("bird_radius", self.bird_radius),
            ("pipe_speed", self.pipe_speed),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("spawn_interval_ms", self.spawn_interval_ms as f32),
        ];
        for (field, value) in positive {
            // Written this way so NaN is rejected too
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        if self.max_gap_top() < self.pipe_min_height {
            return Err(TuningError::GapDoesNotFit {
                gap: self.pipe_gap,
                min_height: self.pipe_min_height,
                ground_line: self.ground_line(),
            });
        }

        let start = self.bird_start_y;
        if start - self.bird_radius < 0.0 || start + self.bird_radius > self.ground_line() {
            return Err(TuningError::BirdOutOfBounds {
                start_y: start,
                radius: self.bird_radius,
                ground_line: self.ground_line(),
            });
        }

        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "sky_flap_tuning";

    /// Load a tuning override from LocalStorage (WASM only)
    ///
    /// Missing, malformed or unplayable overrides fall back to the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());

        let Some(json) = stored else {
            return Self::default();
        };

        match serde_json::from_str::<Tuning>(&json) {
            Ok(tuning) => match tuning.validate() {
                Ok(()) => {
                    log::info!("Loaded tuning override from LocalStorage");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring stored tuning: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Malformed stored tuning: {}", e);
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
