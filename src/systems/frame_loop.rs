//! Headless frame loop
//!
//! Steps a [`SimulationSystem`] at a fixed timestep until a [`FrameBudget`]
//! runs out or a [`CancelToken`] fires.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::simulation::{SimulationState, SimulationSystem};
use crate::config::AnimationConfig;

/// Why the loop stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    FrameLimit,
    TimeLimit,
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::FrameLimit => write!(f, "frame limit reached"),
            StopReason::TimeLimit => write!(f, "time limit reached"),
            StopReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Soft caps on how long an animation runs
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameBudget {
    /// Stop once this many frames have run
    pub max_frames: Option<u64>,
    /// Stop once this many simulated seconds have passed
    pub max_elapsed: Option<f64>,
}

impl FrameBudget {
    /// A budget with no limits
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Cap the number of frames (builder style)
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Cap the simulated time (builder style)
    pub fn with_max_elapsed(mut self, seconds: f64) -> Self {
        self.max_elapsed = Some(seconds);
        self
    }

    /// Budget from config, where zero means no limit
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            max_frames: (config.max_frames > 0).then_some(config.max_frames),
            max_elapsed: (config.max_seconds > 0.0).then_some(config.max_seconds),
        }
    }

    /// Check if `state` has used up the budget
    pub fn exhausted(&self, state: &SimulationState) -> Option<StopReason> {
        if self.max_frames.is_some_and(|max| state.frame >= max) {
            return Some(StopReason::FrameLimit);
        }
        if self.max_elapsed.is_some_and(|max| state.elapsed >= max) {
            return Some(StopReason::TimeLimit);
        }
        None
    }

    /// Check if the loop would run forever without a cancel
    pub fn is_unbounded(&self) -> bool {
        self.max_frames.is_none() && self.max_elapsed.is_none()
    }
}

/// Shared flag that stops a running [`FrameLoop`]
///
/// Clones share the same flag, so a handle can be moved to another thread
/// or into a frame callback.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop; the loop finishes its current frame first
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Fixed-timestep driver for a [`SimulationSystem`]
#[derive(Clone, Debug)]
pub struct FrameLoop {
    budget: FrameBudget,
    cancel: CancelToken,
    dt: f64,
}

impl FrameLoop {
    /// Create a loop stepping `dt` simulated seconds per frame
    pub fn new(budget: FrameBudget, dt: f64) -> Self {
        Self {
            budget,
            cancel: CancelToken::new(),
            dt,
        }
    }

    /// Handle for stopping this loop
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn budget(&self) -> &FrameBudget {
        &self.budget
    }

    /// Run frames until the budget is spent or the token is cancelled
    ///
    /// `on_frame` sees each new state after it is computed. Returns the last
    /// state together with the reason the loop stopped.
    pub fn run<F>(
        &self,
        sim: &SimulationSystem,
        initial: SimulationState,
        mut on_frame: F,
    ) -> (SimulationState, StopReason)
    where
        F: FnMut(&SimulationState),
    {
        if self.budget.is_unbounded() {
            log::warn!("Frame loop has no frame or time limit; it stops only when cancelled");
        }

        let mut state = initial;
        loop {
            if self.cancel.is_cancelled() {
                return (state, StopReason::Cancelled);
            }
            if let Some(reason) = self.budget.exhausted(&state) {
                return (state, reason);
            }

            state = sim.update(&state, self.dt);
            on_frame(&state);
        }
    }
}
