//! Player Module
//!
//! Kinematic first-person movement over terrain.
//!
//! # Components
//!
//! - [`KinematicBody`] - Ground/air movement, jumping, gravity and ground snapping
//!   - Quake-style friction and acceleration (see [`motion`])
//!   - Timed sprint-crouch slide (see [`SlideState`])
//! - [`is_walkable`] - Slope limit test used for grounding

pub mod body;
pub mod motion;
pub mod slide;

pub use body::{KinematicBody, is_walkable};
pub use motion::{FRICTION_EPSILON, accelerate, apply_friction, horizontal, horizontal_speed};
pub use slide::SlideState;
