//! Camera Module
//!
//! View pose and projection math for the first-person camera.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod pose;
pub mod projection;

pub use pose::{CameraPose, direction_from_angles, horizontal_basis};
pub use projection::Projection;
