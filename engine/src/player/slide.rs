//! Slide state machine.
//!
//! ```text
//!   Idle --(grounded, sprint + crouch, fast enough)--> Sliding
//!   Sliding --(timer <= 0 or crouch released)--> Idle
//! ```
//!
//! A new slide can only start from `Idle`.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SlideState {
    #[default]
    Idle,
    Sliding {
        /// Unit horizontal direction captured when the slide began
        direction: Vec3,
        /// Seconds remaining
        timer: f32,
    },
}

impl SlideState {
    /// A fresh slide along `direction` lasting `duration` seconds.
    pub fn start(direction: Vec3, duration: f32) -> Self {
        SlideState::Sliding {
            direction,
            timer: duration,
        }
    }

    pub fn is_sliding(&self) -> bool {
        matches!(self, SlideState::Sliding { .. })
    }

    /// Slide direction while sliding.
    pub fn direction(&self) -> Option<Vec3> {
        match self {
            SlideState::Sliding { direction, .. } => Some(*direction),
            SlideState::Idle => None,
        }
    }

    /// Seconds remaining (zero when idle).
    pub fn timer(&self) -> f32 {
        match self {
            SlideState::Sliding { timer, .. } => *timer,
            SlideState::Idle => 0.0,
        }
    }

    /// Count the timer down and drop back to `Idle` when it runs out or the
    /// crouch key is released.
    pub fn tick(&mut self, dt: f32, crouch_held: bool) {
        if let SlideState::Sliding { timer, .. } = self {
            *timer -= dt;
            if *timer <= 0.0 || !crouch_held {
                *self = SlideState::Idle;
            }
        }
    }
}
