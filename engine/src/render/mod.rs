//! Render Module
//!
//! wgpu presentation of the terrain: GPU context setup, the scene uniform
//! block, the checker grass texture and the terrain draw pass.
//!
//! Nothing here feeds back into the simulation; the renderer only reads a
//! [`crate::camera::CameraPose`] and the terrain mesh.

pub mod gpu_context;
pub mod terrain_pass;
pub mod texture;
pub mod uniforms;

use std::fmt;

pub use gpu_context::{GpuContext, GpuContextConfig};
pub use terrain_pass::{CLEAR_COLOR, TerrainRenderer};
pub use texture::{CHECKER_SIZE, CheckerTexture, checker_pixels};
pub use uniforms::{SceneUniforms, light_direction};

/// WGSL source for the terrain pass.
pub const TERRAIN_SHADER: &str = include_str!("../../../shaders/terrain.wgsl");

/// Errors from GPU initialization.
#[derive(Debug)]
pub enum RenderError {
    CreateSurface(wgpu::CreateSurfaceError),
    RequestAdapter(wgpu::RequestAdapterError),
    RequestDevice(wgpu::RequestDeviceError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::CreateSurface(e) => write!(f, "failed to create surface: {e}"),
            RenderError::RequestAdapter(e) => write!(f, "no suitable GPU adapter: {e}"),
            RenderError::RequestDevice(e) => write!(f, "failed to create GPU device: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::CreateSurface(e) => Some(e),
            RenderError::RequestAdapter(e) => Some(e),
            RenderError::RequestDevice(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderError::CreateSurface(e)
    }
}

impl From<wgpu::RequestAdapterError> for RenderError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        RenderError::RequestAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::RequestDevice(e)
    }
}
