//! Rendering module
//!
//! Gameplay is painted on a 2D canvas; a decorative WebGPU sky sits behind it
//! on its own canvas.

pub mod backdrop;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod pipeline;
pub mod shapes;
pub mod sprites;
pub mod vertex;

pub use backdrop::BackdropScene;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use pipeline::{BackdropError, BackdropRenderer};
