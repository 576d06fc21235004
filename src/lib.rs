//! hyperfold - animated 4D wireframes and recursive cube fractals
//!
//! The math lives in [`hyperfold_math`] and the generators in
//! [`hyperfold_fractal`]; this crate adds configuration, the per-frame
//! simulation and the scene wrappers used by the demo binary.

pub mod config;
pub mod scene;
pub mod systems;

pub use hyperfold_fractal as fractal;
pub use hyperfold_math as math;
