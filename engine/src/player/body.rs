//! Kinematic Player Body
//!
//! A single point-mass player moving over a [`TerrainSurface`]. One call to
//! [`KinematicBody::update`] advances the simulation by one tick.
//!
//! # Tick order
//!
//! The order below is part of the movement feel and must not be shuffled:
//!
//! 1. Look (yaw/pitch from mouse delta, pitch clamped)
//! 2. Wish direction from held keys on the horizontal basis
//! 3. Target speed (sprint multiplier)
//! 4. Slide trigger
//! 5. Slide timer / crouch release
//! 6. Ground branch: friction, acceleration, jump
//! 7. Air branch: weak friction, air acceleration, gravity
//! 8. Explicit Euler integration
//! 9. Terrain resolution (walkable slope, snap, project velocity)
//! 10. Play-area clamp
//!
//! # Usage
//!
//! ```rust,ignore
//! let terrain = TerrainSurface::generate(&TerrainConfig::default());
//! let mut body = KinematicBody::new(MovementConfig::default());
//!
//! // Each frame:
//! body.update(&input, dt, &terrain);
//! let pose = body.camera_pose();
//! ```

use glam::Vec3;

use super::motion::{self, horizontal, horizontal_speed};
use super::slide::SlideState;
use crate::camera::{CameraPose, direction_from_angles, horizontal_basis};
use crate::config::MovementConfig;
use crate::input::InputSnapshot;
use crate::terrain::{SurfaceHit, TerrainSurface};

/// Wish vectors shorter than this are left un-normalized (no input).
const WISH_EPSILON: f32 = 0.01;

/// Below this horizontal speed a slide falls back to the facing direction.
const SLIDE_DIRECTION_EPSILON: f32 = 0.01;

/// Whether a surface normal is within `limit_radians` of world up.
pub fn is_walkable(normal: Vec3, limit_radians: f32) -> bool {
    let slope_cos = normal.dot(Vec3::Y).clamp(-1.0, 1.0);
    slope_cos.acos() < limit_radians
}

/// Player body with quake-style ground/air movement and ground snapping.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    config: MovementConfig,

    /// Feet position in world space
    position: Vec3,
    velocity: Vec3,

    /// Degrees, unrestricted
    yaw: f32,
    /// Degrees, clamped to +-pitch limit
    pitch: f32,

    grounded: bool,
    /// Normal of the last surface snapped to
    ground_normal: Vec3,

    slide: SlideState,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new(MovementConfig::default())
    }
}

impl KinematicBody {
    /// Spawn a body at the configured spawn position and orientation.
    pub fn new(config: MovementConfig) -> Self {
        Self {
            position: config.spawn_position,
            velocity: Vec3::ZERO,
            yaw: config.spawn_yaw,
            pitch: config.spawn_pitch,
            grounded: false,
            ground_normal: Vec3::Y,
            slide: SlideState::Idle,
            config,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn horizontal_speed(&self) -> f32 {
        horizontal_speed(self.velocity)
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Normal of the most recent successful snap; meaningful while grounded.
    pub fn ground_normal(&self) -> Vec3 {
        self.ground_normal
    }

    pub fn slide_state(&self) -> SlideState {
        self.slide
    }

    pub fn is_sliding(&self) -> bool {
        self.slide.is_sliding()
    }

    pub fn slide_direction(&self) -> Option<Vec3> {
        self.slide.direction()
    }

    pub fn slide_timer(&self) -> f32 {
        self.slide.timer()
    }

    /// Eye position: feet plus head height.
    pub fn camera_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, self.config.head_height, 0.0)
    }

    /// Unit look direction from yaw/pitch.
    pub fn view_direction(&self) -> Vec3 {
        direction_from_angles(self.yaw, self.pitch)
    }

    pub fn camera_pose(&self) -> CameraPose {
        CameraPose::new(self.camera_position(), self.view_direction())
    }

    // ========================================================================
    // Setup
    // ========================================================================

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set velocity directly (e.g., for teleportation or knockback).
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Set the grounded state directly. The ground normal is left as is.
    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    /// Set the look angles (degrees); pitch is clamped.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        let limit = self.config.pitch_limit_degrees;
        self.yaw = yaw;
        self.pitch = pitch.clamp(-limit, limit);
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// See [`motion::apply_friction`].
    pub fn apply_friction(&mut self, dt: f32, amount: f32) {
        motion::apply_friction(&mut self.velocity, dt, amount);
    }

    /// See [`motion::accelerate`].
    pub fn accelerate(&mut self, wish_dir: Vec3, wish_speed: f32, accel: f32, dt: f32) {
        motion::accelerate(&mut self.velocity, wish_dir, wish_speed, accel, dt);
    }

    /// Advance one tick. `dt` is expected to be clamped by the caller.
    pub fn update(&mut self, input: &InputSnapshot, dt: f32, terrain: &TerrainSurface) {
        let was_grounded = self.grounded;
        self.step(input, dt, terrain);
        if was_grounded != self.grounded {
            log::trace!(
                "grounded {} -> {} at {:?} (vy {:.3})",
                was_grounded,
                self.grounded,
                self.position,
                self.velocity.y
            );
        }
    }

    fn step(&mut self, input: &InputSnapshot, dt: f32, terrain: &TerrainSurface) {
        // 1. Look
        let sensitivity = self.config.mouse_sensitivity;
        let limit = self.config.pitch_limit_degrees;
        self.yaw += input.mouse_delta_x * sensitivity;
        self.pitch = (self.pitch + input.mouse_delta_y * sensitivity).clamp(-limit, limit);

        // 2. Wish direction (horizontal only)
        let (forward, right) = horizontal_basis(self.yaw, self.pitch);
        let mut wish_dir = Vec3::ZERO;
        if input.move_forward {
            wish_dir += forward;
        }
        if input.move_backward {
            wish_dir -= forward;
        }
        if input.move_right {
            wish_dir += right;
        }
        if input.move_left {
            wish_dir -= right;
        }
        if wish_dir.length() > WISH_EPSILON {
            wish_dir = wish_dir.normalize();
        }

        // 3. Target speed
        let target_speed = self.config.target_speed(input.sprint_held);

        // Sampled before friction/acceleration; the snap test reuses it.
        let speed_at_tick_start = self.horizontal_speed();

        // 4. Slide trigger
        if self.grounded
            && input.sprint_held
            && input.crouch_held
            && speed_at_tick_start > self.config.slide_trigger_speed()
            && !self.slide.is_sliding()
        {
            let direction = if speed_at_tick_start > SLIDE_DIRECTION_EPSILON {
                horizontal(self.velocity).normalize()
            } else {
                forward
            };
            self.slide = SlideState::start(direction, self.config.slide_duration);
        }

        // 5. Slide decay
        self.slide.tick(dt, input.crouch_held);

        if self.grounded {
            // 6. Ground
            match self.slide.direction() {
                Some(slide_dir) => {
                    self.apply_friction(dt, self.config.slide_friction);
                    self.accelerate(
                        slide_dir,
                        target_speed * self.config.slide_speed_ratio,
                        self.config.ground_accel * self.config.slide_accel_ratio,
                        dt,
                    );
                }
                None => {
                    self.apply_friction(dt, self.config.ground_friction);
                    self.accelerate(wish_dir, target_speed, self.config.ground_accel, dt);
                }
            }

            if input.jump_pressed {
                self.launch_jump();
            }
        } else {
            // 7. Air
            self.apply_friction(dt, self.config.air_friction);
            self.accelerate(wish_dir, target_speed, self.config.air_accel, dt);
            self.velocity.y -= self.config.gravity * dt;
        }

        // 8. Integrate
        self.position += self.velocity * dt;

        // 9. Terrain
        let Some(hit) = terrain.sample_surface(self.position.x, self.position.z) else {
            self.grounded = false;
            return;
        };
        self.resolve_ground(hit, speed_at_tick_start);

        // 10. Play area
        let bound = self.config.play_area_half_extent;
        self.position.x = self.position.x.clamp(-bound, bound);
        self.position.z = self.position.z.clamp(-bound, bound);
    }

    /// Start a jump: upward velocity and leave the ground in one step.
    ///
    /// Invariant: after this, `grounded == false` and `velocity.y > 0`, so the
    /// terrain resolution later in the same tick cannot snap the body back
    /// down (its `velocity.y <= 0` condition fails).
    fn launch_jump(&mut self) {
        self.velocity.y = self.config.jump_speed;
        self.grounded = false;
    }

    /// Snap to `hit` when walkable, close enough, not rising and either slow
    /// or already grounded; otherwise become airborne.
    ///
    /// The `|| grounded` clause keeps fast runners glued to rolling terrain
    /// while a fast airborne body still falls onto it cleanly.
    fn resolve_ground(&mut self, hit: SurfaceHit, speed: f32) {
        let walkable = is_walkable(hit.normal, self.config.slope_limit_radians());
        let vertical_gap = self.position.y - hit.height;

        let should_snap = walkable
            && vertical_gap <= self.config.snap_distance
            && self.velocity.y <= 0.0
            && (speed < self.config.max_snap_speed || self.grounded);

        if !should_snap {
            self.grounded = false;
            return;
        }

        self.position.y = hit.height;
        self.velocity.y = 0.0;
        self.grounded = true;
        self.ground_normal = hit.normal;

        // Glide along the slope instead of pushing into it.
        let into_surface = self.velocity.dot(self.ground_normal);
        if into_surface < 0.0 {
            self.velocity -= into_surface * self.ground_normal;
        }
    }
}
