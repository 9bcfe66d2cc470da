//! Perspective projection.

use glam::Mat4;

use crate::config::CameraConfig;

/// Vertical-FOV perspective projection (right-handed, 0..1 depth for wgpu).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl Projection {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            fov_y_degrees: config.fov_y_degrees,
            near: config.near,
            far: config.far,
        }
    }

    /// Projection matrix for a surface of `width` x `height` pixels.
    ///
    /// A zero-sized (minimized) surface falls back to a square aspect.
    pub fn matrix(&self, width: u32, height: u32) -> Mat4 {
        let aspect = if width == 0 || height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}
