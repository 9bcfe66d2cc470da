//! Display Configuration
//!
//! Window, camera projection and frame timing settings for the shell around
//! the simulation.

use serde::{Deserialize, Serialize};

/// Window creation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Use VSync (true = capped to monitor refresh)
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Minimal FPS Engine".to_string(),
            vsync: true,
        }
    }
}

/// Perspective projection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 500.0,
        }
    }
}

/// Frame pacing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Upper bound on the simulation step after a stall (seconds)
    pub max_dt: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { max_dt: 0.033 }
    }
}
