//! Terrain Walk Engine Library
//!
//! A small first-person movement engine: a procedural heightfield, a
//! kinematic player body with ground/air movement, jumping, sliding and
//! ground snapping, and a wgpu renderer for the terrain.
//!
//! The simulation (`terrain`, `player`, `camera`, `input`, `frame`) is
//! window-system agnostic and fully testable without a GPU; `render` is the
//! only module that touches wgpu or winit.
//!
//! # Modules
//!
//! - [`config`] - Serde-backed tuning for window, terrain, movement, camera and frame pacing
//! - [`terrain`] - Heightfield mesh generation and surface height/normal queries
//! - [`player`] - Kinematic body, friction/acceleration model, slide state machine
//! - [`camera`] - Yaw/pitch direction math, view pose and projection
//! - [`input`] - Key/cursor sampling into per-frame snapshots
//! - [`frame`] - Delta-time clamping and the per-frame simulation driver
//! - [`render`] - GPU context, terrain pipelines and checker texture
//!
//! # Example
//!
//! ```ignore
//! use terrain_walk_engine::config::DemoConfig;
//! use terrain_walk_engine::frame::{FrameClock, FrameDriver};
//! use terrain_walk_engine::input::{InputSampler, KeyCode};
//!
//! let config = DemoConfig::default();
//! let mut clock = FrameClock::new(config.frame.max_dt);
//! let mut driver = FrameDriver::new(&config);
//! let mut input = InputSampler::new();
//!
//! input.handle_key(KeyCode::W, true);
//! let output = driver.advance(&input.consume(), clock.tick());
//! println!("eye at {:?}", output.camera.position);
//! ```

pub mod camera;
pub mod config;
pub mod frame;
pub mod input;
pub mod player;
pub mod render;
pub mod terrain;

pub use camera::{CameraPose, Projection};
pub use config::{ConfigError, DemoConfig};
pub use frame::{FrameClock, FrameDriver, FrameOutput};
pub use input::{InputSampler, InputSnapshot, KeyCode};
pub use player::KinematicBody;
pub use terrain::{SurfaceHit, TerrainSurface};
