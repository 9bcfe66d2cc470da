//! GPU Uniforms
//!
//! Layout must match `struct Scene` in `shaders/terrain.wgsl`: two matrices
//! followed by two `vec3<f32>` fields, each padded to 16 bytes.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Direction the sunlight travels (pointing down into the terrain).
pub fn light_direction() -> Vec3 {
    Vec3::new(-0.25, -1.0, -0.35).normalize()
}

/// Per-frame scene uniform block.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub light_dir: [f32; 3],
    pub _pad0: f32,
    pub camera_pos: [f32; 3],
    pub _pad1: f32,
}

static_assertions::assert_eq_size!(SceneUniforms, [u8; 160]);

impl SceneUniforms {
    pub fn new(view: Mat4, proj: Mat4, camera_pos: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            light_dir: light_direction().to_array(),
            _pad0: 0.0,
            camera_pos: camera_pos.to_array(),
            _pad1: 0.0,
        }
    }
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO)
    }
}
