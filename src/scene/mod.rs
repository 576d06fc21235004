//! Scene state for the demo
//!
//! Wraps the generated fractal and the projected wireframe with the
//! per-frame bookkeeping the host needs.

mod fractal_scene;
mod palette;
mod wire_scene;

pub use fractal_scene::FractalScene;
pub use palette::{CellStyle, Pulse};
pub use wire_scene::{Breathing, WireScene};
