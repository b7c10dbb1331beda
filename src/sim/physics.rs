//! Bird physics and collision tests
//!
//! Everything here works in fixed per-tick increments. Collision is a plain
//! axis-aligned overlap test evaluated once per tick, so a pipe moving far
//! enough in one tick can be skipped (tunneling). At the default speeds the
//! per-tick movement is much smaller than the pipe width and this never
//! happens, so no swept test is done.

use super::state::{Bird, Pipe};

/// Result of clamping the bird to the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsContact {
    /// Bird is fully inside the playfield
    Clear,
    /// Bird touched the ceiling and was stopped (not fatal)
    Ceiling,
    /// Bird reached the ground (fatal)
    Ground,
}

/// Apply one tick of gravity: velocity first, then position with the new velocity
#[inline]
pub fn apply_gravity(bird: &mut Bird, gravity: f32) {
    bird.velocity += gravity;
    bird.y += bird.velocity;
}

/// Flap: velocity is set, not added to
#[inline]
pub fn apply_impulse(bird: &mut Bird, jump_velocity: f32) {
    bird.velocity = jump_velocity;
}

/// Keep the bird between the ceiling (y = 0) and the ground line
pub fn clamp_bounds(bird: &mut Bird, ground_line: f32) -> BoundsContact {
    if bird.bottom() > ground_line {
        bird.y = ground_line - bird.radius;
        return BoundsContact::Ground;
    }

    if bird.top() < 0.0 {
        bird.y = bird.radius;
        bird.velocity = 0.0;
        return BoundsContact::Ceiling;
    }

    BoundsContact::Clear
}

/// Whether the bird overlaps either segment of a pipe
///
/// The bird is treated as its bounding box: horizontal extents must overlap
/// and the bird must stick out of the gap at the top or the bottom.
pub fn check_pipe_collision(bird: &Bird, pipe: &Pipe, pipe_width: f32) -> bool {
    let overlaps_x = bird.x + bird.radius > pipe.x && bird.x - bird.radius < pipe.right(pipe_width);
    if !overlaps_x {
        return false;
    }

    bird.top() < pipe.top_height || bird.bottom() > pipe.bottom_y
}

/// Whether a not-yet-scored pipe has fully moved past the bird's center
#[inline]
pub fn has_passed(bird: &Bird, pipe: &Pipe, pipe_width: f32) -> bool {
    !pipe.passed && pipe.right(pipe_width) < bird.x
}
