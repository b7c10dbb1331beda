//! 2D canvas painter for gameplay sprites
//!
//! Redraws the whole scene from `&GameState` every frame: sky, ground, bird,
//! then pipes on top.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::sprites::{self, Rect, bird_parts, palette};
use crate::settings::Settings;
use crate::sim::GameState;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasPainter {
    /// Grab the 2D context of the game canvas
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn draw(&self, state: &GameState, settings: &Settings) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        self.draw_background();
        self.draw_ground(state);
        self.draw_bird(state, !settings.reduced_motion);
        self.draw_pipes(state);
    }

    fn fill_rect(&self, rect: &Rect) {
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn draw_background(&self) {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, self.height);
        gradient.add_color_stop(0.0, palette::SKY_TOP).ok();
        gradient.add_color_stop(1.0, palette::SKY_BOTTOM).ok();
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_ground(&self, state: &GameState) {
        let (ground, grass) = sprites::ground_rects(&state.tuning);
        self.ctx.set_fill_style_str(palette::GROUND);
        self.fill_rect(&ground);
        self.ctx.set_fill_style_str(palette::GRASS);
        self.fill_rect(&grass);
    }

    fn draw_bird(&self, state: &GameState, tilt: bool) {
        let bird = sprites::bird_sprite(&state.bird, tilt);
        let ctx = &self.ctx;

        ctx.save();
        ctx.translate(bird.x as f64, bird.y as f64).ok();
        ctx.rotate(bird.rotation as f64).ok();

        // Body
        ctx.set_fill_style_str(palette::BIRD_BODY);
        ctx.begin_path();
        ctx.arc(0.0, 0.0, bird.radius as f64, 0.0, TAU).ok();
        ctx.fill();

        // Eye
        let (ex, ey, er) = bird_parts::EYE;
        ctx.set_fill_style_str(palette::BIRD_EYE);
        ctx.begin_path();
        ctx.arc(ex as f64, ey as f64, er as f64, 0.0, TAU).ok();
        ctx.fill();

        // Beak
        let [a, b, c] = bird_parts::BEAK;
        ctx.set_fill_style_str(palette::BIRD_BEAK);
        ctx.begin_path();
        ctx.move_to(a.0 as f64, a.1 as f64);
        ctx.line_to(b.0 as f64, b.1 as f64);
        ctx.line_to(c.0 as f64, c.1 as f64);
        ctx.close_path();
        ctx.fill();

        // Wing
        let (wx, wy) = bird_parts::WING_CENTER;
        let (rx, ry) = bird_parts::WING_RADII;
        ctx.set_fill_style_str(palette::BIRD_WING);
        ctx.begin_path();
        ctx.ellipse(
            wx as f64,
            wy as f64,
            rx as f64,
            ry as f64,
            bird_parts::WING_ROTATION as f64,
            0.0,
            TAU,
        )
        .ok();
        ctx.fill();

        ctx.restore();
    }

    fn draw_pipes(&self, state: &GameState) {
        let width = state.tuning.pipe_width;
        for pipe in &state.pipes {
            let sprite = sprites::pipe_sprite(pipe, width, self.height as f32);

            self.ctx.set_fill_style_str(palette::PIPE);
            self.fill_rect(&sprite.top);
            self.fill_rect(&sprite.bottom);

            self.ctx.set_fill_style_str(palette::PIPE_CAP);
            self.fill_rect(&sprite.top_cap);
            self.fill_rect(&sprite.bottom_cap);
        }
    }
}
