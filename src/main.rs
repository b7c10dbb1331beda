//! Sky Flap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use sky_flap::audio::{AudioManager, SoundEffect};
    use sky_flap::consts::SIM_DT_MS;
    use sky_flap::renderer::{BackdropRenderer, BackdropScene, CanvasPainter, pipeline};
    use sky_flap::sim::{FrameClock, GameEvent, GameState, TickInput, tick};
    use sky_flap::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: FrameClock,
        input: TickInput,
        settings: Settings,
        audio: AudioManager,
        painter: CanvasPainter,
        backdrop: Option<BackdropRenderer>,
        document: Document,
    }

    impl Game {
        /// Run one display refresh: fixed ticks, events, then draw
        fn frame(&mut self, time: f64) {
            let steps = self.clock.advance(time);
            for _ in 0..steps {
                tick(&mut self.state, &self.input, SIM_DT_MS);
                // A tap is consumed by exactly one tick
                self.input.flap = false;
            }

            for event in self.state.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
                update_overlay(&self.document, &event);
            }

            self.painter.draw(&self.state, &self.settings);
            self.render_backdrop();
        }

        fn render_backdrop(&mut self) {
            let Some(ref mut backdrop) = self.backdrop else {
                return;
            };
            match backdrop.render() {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    backdrop.resize(backdrop.size.0, backdrop.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Backdrop out of memory, disabling it");
                    self.backdrop = None;
                }
                Err(e) => log::warn!("Backdrop render error: {:?}", e),
            }
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            self.audio.apply_settings(&self.settings);
            self.settings.save();
            log::info!("Muted: {}", muted);
        }
    }

    /// Reflect a game event in the score and overlay elements
    fn update_overlay(document: &Document, event: &GameEvent) {
        match event {
            GameEvent::Started => {
                log::info!("Run started");
                set_display(document, "startScreen", false);
                set_display(document, "gameOver", false);
                set_text(document, "score", "0");
            }
            GameEvent::Scored { score } => {
                set_text(document, "score", &score.to_string());
            }
            GameEvent::Crashed { score, .. } => {
                set_text(document, "finalScore", &format!("Score: {}", score));
                set_display(document, "gameOver", true);
            }
            GameEvent::Flapped | GameEvent::PipeSpawned => {}
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_display(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let style = if visible { "display: block" } else { "display: none" };
            let _ = el.set_attribute("style", style);
        }
    }

    /// Create the backdrop canvas underneath the game canvas
    fn create_backdrop_canvas(document: &Document, width: u32, height: u32) -> Option<HtmlCanvasElement> {
        let container = document.get_element_by_id("gameContainer")?;
        let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
        canvas.set_width(width);
        canvas.set_height(height);
        let _ = canvas.set_attribute(
            "style",
            "position: absolute; top: 0; left: 0; z-index: 0; pointer-events: none",
        );
        container.prepend_with_node_1(&canvas).ok()?;
        Some(canvas)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sky Flap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::load();
        let settings = Settings::load();

        canvas.set_width(tuning.world_width as u32);
        canvas.set_height(tuning.world_height as u32);

        let painter = CanvasPainter::new(&canvas).expect("no 2d context");

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        let backdrop = if settings.backdrop {
            match create_backdrop_canvas(&document, canvas.width(), canvas.height()) {
                Some(backdrop_canvas) => {
                    match pipeline::init_on_canvas(backdrop_canvas, BackdropScene::new(seed)).await {
                        Ok(renderer) => Some(renderer),
                        Err(e) => {
                            log::warn!("Backdrop unavailable: {}", e);
                            None
                        }
                    }
                }
                None => {
                    log::warn!("No #gameContainer for the backdrop canvas");
                    None
                }
            }
        } else {
            None
        };

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(tuning, seed),
            clock: FrameClock::new(),
            input: TickInput::default(),
            audio: AudioManager::new(&settings),
            settings,
            painter,
            backdrop,
            document: document.clone(),
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_visibility_reset(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Sky Flap running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.flap = true;
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.flap = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " => {
                        event.prevent_default();
                        g.input.flap = true;
                    }
                    "i" | "I" => {
                        g.input.autopilot = !g.input.autopilot;
                        log::info!("Autopilot: {}", g.input.autopilot);
                    }
                    "m" | "M" => g.toggle_mute(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Don't replay the time spent in a background tab
    fn setup_visibility_reset(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Visible {
                game.borrow_mut().clock.reset();
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Headless attract-mode run: the autopilot plays for a number of simulated
/// seconds and every event is logged
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_flap::Tuning;
    use sky_flap::consts::SIM_DT_MS;
    use sky_flap::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seconds: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(30);
    let seed = 0x5EED;

    log::info!("Sky Flap (native) demo: {}s of autopilot, seed {}", seconds, seed);
    log::info!("The playable game is the web build - run it with `trunk serve`");

    let mut state = GameState::new(Tuning::default(), seed);
    let mut input = TickInput {
        flap: false,
        autopilot: true,
    };

    let total_ticks = seconds * 60;
    let mut runs = 0u32;
    let mut best = 0u32;

    for _ in 0..total_ticks {
        // Restart whenever the previous run is over
        input.flap = state.phase != GamePhase::Playing;
        tick(&mut state, &input, SIM_DT_MS);

        for event in state.drain_events() {
            match event {
                GameEvent::Started => runs += 1,
                GameEvent::Scored { score } => log::debug!("Score: {}", score),
                GameEvent::Crashed { score, cause } => {
                    log::info!("Run {} ended by {:?} with score {}", runs, cause, score);
                    best = best.max(score);
                }
                GameEvent::Flapped | GameEvent::PipeSpawned => {}
            }
        }
    }

    best = best.max(state.score);
    log::info!(
        "Demo finished: {} run(s), best score {}, current score {}",
        runs,
        best,
        state.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
