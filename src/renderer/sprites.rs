//! Sprite geometry for the 2D canvas
//!
//! Everything the canvas painter draws is laid out here in world units, so the
//! layout can be checked without a browser.

use crate::sim::{Bird, Pipe};
use crate::tuning::Tuning;

/// Canvas palette
pub mod palette {
    pub const SKY_TOP: &str = "#87CEEB";
    pub const SKY_BOTTOM: &str = "#98D8E8";
    pub const GROUND: &str = "#8B4513";
    pub const GRASS: &str = "#2E8B57";
    pub const BIRD_BODY: &str = "#FFD700";
    pub const BIRD_EYE: &str = "#000000";
    pub const BIRD_BEAK: &str = "#FF8C00";
    pub const BIRD_WING: &str = "#FFA500";
    pub const PIPE: &str = "#228B22";
    pub const PIPE_CAP: &str = "#32CD32";
}

/// Height of the grass band on top of the ground
pub const GRASS_HEIGHT: f32 = 10.0;
/// Pipe caps overhang the pipe body by this much on each side
pub const CAP_OVERHANG: f32 = 5.0;
pub const CAP_HEIGHT: f32 = 20.0;
/// Tilt per unit of vertical velocity
const TILT_PER_VELOCITY: f32 = 0.1;
const MAX_TILT: f32 = 0.5;

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Bird tilt in radians: nose up while rising, down while falling
pub fn bird_rotation(velocity: f32) -> f32 {
    (velocity * TILT_PER_VELOCITY).clamp(-MAX_TILT, MAX_TILT)
}

/// Bird parts relative to the bird center, before rotation
pub mod bird_parts {
    /// Eye center and radius
    pub const EYE: (f32, f32, f32) = (8.0, -5.0, 4.0);
    /// Beak triangle
    pub const BEAK: [(f32, f32); 3] = [(15.0, 0.0), (25.0, -5.0), (25.0, 5.0)];
    /// Wing ellipse center
    pub const WING_CENTER: (f32, f32) = (-5.0, 5.0);
    pub const WING_RADII: (f32, f32) = (12.0, 8.0);
    pub const WING_ROTATION: f32 = std::f32::consts::FRAC_PI_4;
}

/// Where and how the bird is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub rotation: f32,
}

pub fn bird_sprite(bird: &Bird, tilt: bool) -> BirdSprite {
    BirdSprite {
        x: bird.x,
        y: bird.y,
        radius: bird.radius,
        rotation: if tilt { bird_rotation(bird.velocity) } else { 0.0 },
    }
}

/// The four rectangles of one pipe pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSprite {
    pub top: Rect,
    pub top_cap: Rect,
    pub bottom: Rect,
    pub bottom_cap: Rect,
}

/// Lay out a pipe; the bottom segment runs to the bottom of the canvas and is
/// covered by the ground strip wherever they overlap
pub fn pipe_sprite(pipe: &Pipe, width: f32, canvas_height: f32) -> PipeSprite {
    let cap_x = pipe.x - CAP_OVERHANG;
    let cap_w = width + CAP_OVERHANG * 2.0;

    PipeSprite {
        top: Rect::new(pipe.x, 0.0, width, pipe.top_height),
        top_cap: Rect::new(cap_x, pipe.top_height - CAP_HEIGHT, cap_w, CAP_HEIGHT),
        bottom: Rect::new(pipe.x, pipe.bottom_y, width, canvas_height - pipe.bottom_y),
        bottom_cap: Rect::new(cap_x, pipe.bottom_y, cap_w, CAP_HEIGHT),
    }
}

/// Ground strip and the grass band on top of it
pub fn ground_rects(tuning: &Tuning) -> (Rect, Rect) {
    let line = tuning.ground_line();
    (
        Rect::new(0.0, line, tuning.world_width, tuning.ground_height),
        Rect::new(0.0, line, tuning.world_width, GRASS_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rotation_follows_velocity() {
        assert_eq!(bird_rotation(0.0), 0.0);
        assert!((bird_rotation(3.0) - 0.3).abs() < 1e-6);
        assert!((bird_rotation(-2.0) + 0.2).abs() < 1e-6);
        assert_eq!(bird_rotation(-10.0), -0.5);
        assert_eq!(bird_rotation(12.0), 0.5);
    }

    #[test]
    fn test_reduced_motion_keeps_bird_level() {
        let mut bird = Bird::new(&Tuning::default());
        bird.velocity = 8.0;
        assert_eq!(bird_sprite(&bird, false).rotation, 0.0);
        assert_eq!(bird_sprite(&bird, true).rotation, 0.5);
    }

    #[test]
    fn test_pipe_layout() {
        let pipe = Pipe::new(200.0, 100.0, 200.0);
        let sprite = pipe_sprite(&pipe, 80.0, 600.0);

        assert_eq!(sprite.top, Rect::new(200.0, 0.0, 80.0, 100.0));
        assert_eq!(sprite.top_cap, Rect::new(195.0, 80.0, 90.0, 20.0));
        assert_eq!(sprite.bottom, Rect::new(200.0, 300.0, 80.0, 300.0));
        assert_eq!(sprite.bottom_cap, Rect::new(195.0, 300.0, 90.0, 20.0));
        assert_eq!(sprite.bottom.bottom(), 600.0);
    }

    #[test]
    fn test_ground_layout() {
        let (ground, grass) = ground_rects(&Tuning::default());
        assert_eq!(ground, Rect::new(0.0, 550.0, 400.0, 50.0));
        assert_eq!(grass, Rect::new(0.0, 550.0, 400.0, 10.0));
    }

    proptest! {
        #[test]
        fn prop_rotation_is_bounded(v in -100.0f32..100.0) {
            let r = bird_rotation(v);
            prop_assert!((-0.5..=0.5).contains(&r));
            prop_assert!(r == 0.0 || r.signum() == v.signum());
        }

        #[test]
        fn prop_caps_frame_the_gap(top in 50.0f32..300.0) {
            let pipe = Pipe::new(100.0, top, 200.0);
            let sprite = pipe_sprite(&pipe, 80.0, 600.0);
            // The gap between the caps is exactly the pipe gap
            prop_assert!((sprite.top_cap.bottom() - pipe.top_height).abs() < 1e-3);
            prop_assert_eq!(sprite.bottom_cap.y, pipe.bottom_y);
        }
    }
}
