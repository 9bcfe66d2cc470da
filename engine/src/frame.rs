//! Frame Stepping
//!
//! [`FrameClock`] measures wall-clock time between redraws and clamps it so a
//! stall (window drag, breakpoint) never produces a huge simulation step.
//! [`FrameDriver`] owns the simulation state and runs exactly one player tick
//! per frame.
//!
//! ```rust,ignore
//! let mut clock = FrameClock::new(config.frame.max_dt);
//! let mut driver = FrameDriver::new(&config);
//!
//! // On every redraw:
//! let dt = clock.tick();
//! let output = driver.advance(&sampler.consume(), dt);
//! renderer.render(&gpu, &output.camera, output.wireframe)?;
//! ```

use std::time::Instant;

use crate::camera::CameraPose;
use crate::config::{DemoConfig, MovementConfig};
use crate::input::InputSnapshot;
use crate::player::KinematicBody;
use crate::terrain::TerrainSurface;

/// Clamp a measured frame time into `[0, max_dt]`.
pub fn clamp_dt(raw: f32, max_dt: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, max_dt)
}

/// Wall-clock delta time source.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last: Instant::now(),
            max_dt,
        }
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }

    /// Seconds since the previous tick (or construction), clamped.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        clamp_dt(raw, self.max_dt)
    }

    /// Restart timing from now, e.g. after the window was occluded.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

/// What the renderer needs after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub camera: CameraPose,
    pub wireframe: bool,
    pub grounded: bool,
}

/// Terrain, player and view toggles for one running demo.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    terrain: TerrainSurface,
    player: KinematicBody,
    wireframe: bool,
}

impl FrameDriver {
    /// Generate the terrain and spawn the player from a full config.
    pub fn new(config: &DemoConfig) -> Self {
        Self::from_parts(
            TerrainSurface::generate(&config.terrain),
            config.movement.clone(),
        )
    }

    pub fn from_parts(terrain: TerrainSurface, movement: MovementConfig) -> Self {
        Self {
            terrain,
            player: KinematicBody::new(movement),
            wireframe: false,
        }
    }

    pub fn terrain(&self) -> &TerrainSurface {
        &self.terrain
    }

    pub fn player(&self) -> &KinematicBody {
        &self.player
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Apply view toggles, then advance the player by `dt`.
    ///
    /// `dt` is used as given; clamping belongs to [`FrameClock`].
    pub fn advance(&mut self, input: &InputSnapshot, dt: f32) -> FrameOutput {
        if input.toggle_wireframe_pressed {
            self.wireframe = !self.wireframe;
            log::debug!("wireframe {}", if self.wireframe { "on" } else { "off" });
        }

        self.player.update(input, dt, &self.terrain);

        FrameOutput {
            camera: self.player.camera_pose(),
            wireframe: self.wireframe,
            grounded: self.player.is_grounded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_dt() {
        assert_eq!(clamp_dt(0.010, 0.033), 0.010);
        assert_eq!(clamp_dt(0.5, 0.033), 0.033);
        assert_eq!(clamp_dt(-1.0, 0.033), 0.0);
        assert_eq!(clamp_dt(f32::NAN, 0.033), 0.0);
    }

    #[test]
    fn test_clock_never_exceeds_max() {
        let mut clock = FrameClock::new(0.033);
        assert_eq!(clock.max_dt(), 0.033);
        std::thread::sleep(std::time::Duration::from_millis(50));
        let dt = clock.tick();
        assert!(dt <= 0.033);
        assert!(dt >= 0.0);
    }

    #[test]
    fn test_wireframe_toggles_on_press() {
        let mut driver = FrameDriver::new(&DemoConfig::default());
        let press = InputSnapshot {
            toggle_wireframe_pressed: true,
            ..Default::default()
        };

        assert!(driver.advance(&press, 0.016).wireframe);
        assert!(driver.advance(&InputSnapshot::idle(), 0.016).wireframe);
        assert!(driver.wireframe());
        assert!(!driver.advance(&press, 0.016).wireframe);
    }

    #[test]
    fn test_camera_sits_at_head_height() {
        let mut driver = FrameDriver::new(&DemoConfig::default());
        let out = driver.advance(&InputSnapshot::idle(), 0.016);
        let feet = driver.player().position();
        assert!((out.camera.position.y - (feet.y + 1.65)).abs() < 1e-5);
        assert!((out.camera.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_player_settles_after_spawn() {
        let mut driver = FrameDriver::new(&DemoConfig::default());
        let mut out = driver.advance(&InputSnapshot::idle(), 0.016);
        for _ in 0..120 {
            out = driver.advance(&InputSnapshot::idle(), 0.016);
        }
        assert!(out.grounded);
    }
}
