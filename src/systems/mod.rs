//! Application systems
//!
//! Per-frame animation state and the loop that drives it.

mod frame_loop;
mod simulation;

pub use frame_loop::{CancelToken, FrameBudget, FrameLoop, StopReason};
pub use simulation::{SimulationState, SimulationSystem, COLOR_STEP};
