//! Animation simulation system
//!
//! Advances the per-frame animation state:
//! - Elapsed time and frame counter
//! - Plane rotation angles from the configured speeds
//! - The cyclic color phase used by the grid pulse

use hyperfold_math::{PlaneSpeeds, RotationSpec};

/// Scaling applied to the color speed on every frame
pub const COLOR_STEP: f64 = 0.345;

/// Everything that changes from one frame to the next
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationState {
    /// Simulated seconds since the start
    pub elapsed: f64,
    /// Frames completed
    pub frame: u64,
    /// Position in the color cycle, in `[0, 1)`
    pub color_phase: f64,
    /// Rotation to apply this frame
    pub rotation: RotationSpec,
}

/// Advances a [`SimulationState`] by one frame
#[derive(Clone, Debug)]
pub struct SimulationSystem {
    speeds: PlaneSpeeds,
    color_speed: f64,
}

impl SimulationSystem {
    /// Create a simulation rotating at the given plane speeds
    pub fn new(speeds: PlaneSpeeds) -> Self {
        Self {
            speeds,
            color_speed: 0.001,
        }
    }

    /// Set the color phase speed (builder style)
    pub fn with_color_speed(mut self, color_speed: f64) -> Self {
        self.color_speed = color_speed;
        self
    }

    /// Plane speeds driving the rotation
    pub fn speeds(&self) -> &PlaneSpeeds {
        &self.speeds
    }

    /// Run one simulation frame
    ///
    /// Returns the next state; the input is left untouched. Negative or
    /// non-finite `dt` is treated as zero so a bad clock never runs time
    /// backwards.
    pub fn update(&self, state: &SimulationState, dt: f64) -> SimulationState {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let elapsed = state.elapsed + dt;

        SimulationState {
            elapsed,
            frame: state.frame + 1,
            color_phase: (state.color_phase + self.color_speed * COLOR_STEP).rem_euclid(1.0),
            rotation: RotationSpec::at_time(&self.speeds, elapsed),
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(PlaneSpeeds::double_xy_zw())
    }
}
