//! Movement Configuration
//!
//! Tuning values for the kinematic player body: look sensitivity, ground/air
//! acceleration and friction, jumping, sliding and the ground snap test.
//! Angles are in degrees, distances in meters, times in seconds.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Player movement tuning.
///
/// `Default` returns the values the demo ships with. The snap-speed ceiling
/// in particular is an empirically tuned constant; change it only together
/// with a play test of landings on rolling terrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    // ========================================================================
    // Look
    // ========================================================================
    /// Degrees of yaw/pitch per unit of mouse delta
    pub mouse_sensitivity: f32,
    /// Pitch limit (symmetric, degrees)
    pub pitch_limit_degrees: f32,

    // ========================================================================
    // Speeds and forces
    // ========================================================================
    /// Walking target speed (m/s)
    pub base_speed: f32,
    /// Multiplier applied to `base_speed` while sprint is held
    pub sprint_multiplier: f32,
    /// Vertical velocity set by a jump (m/s)
    pub jump_speed: f32,
    /// Gravity applied while airborne (m/s^2)
    pub gravity: f32,
    /// Ground acceleration constant
    pub ground_accel: f32,
    /// Air acceleration constant (limits air strafing)
    pub air_accel: f32,
    /// Ground friction coefficient
    pub ground_friction: f32,
    /// Air friction coefficient
    pub air_friction: f32,

    // ========================================================================
    // Sliding
    // ========================================================================
    /// Horizontal speed must exceed `base_speed * slide_trigger_ratio` to start a slide
    pub slide_trigger_ratio: f32,
    /// Maximum slide length (seconds)
    pub slide_duration: f32,
    /// Friction coefficient while sliding
    pub slide_friction: f32,
    /// Slide target speed as a fraction of the current target speed
    pub slide_speed_ratio: f32,
    /// Slide acceleration as a fraction of `ground_accel`
    pub slide_accel_ratio: f32,

    // ========================================================================
    // Ground snapping
    // ========================================================================
    /// Steepest walkable slope (degrees from world up, exclusive)
    pub slope_limit_degrees: f32,
    /// Largest feet-above-surface gap that still snaps (m)
    pub snap_distance: f32,
    /// Horizontal speed above which an airborne body will not snap (m/s)
    pub max_snap_speed: f32,

    // ========================================================================
    // Body and play area
    // ========================================================================
    /// Camera height above the feet (m)
    pub head_height: f32,
    /// Half extent of the square play area on X and Z (m)
    pub play_area_half_extent: f32,
    /// Feet position at spawn
    pub spawn_position: Vec3,
    /// Yaw at spawn (degrees)
    pub spawn_yaw: f32,
    /// Pitch at spawn (degrees)
    pub spawn_pitch: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.11,
            pitch_limit_degrees: 89.0,

            base_speed: 6.0,
            sprint_multiplier: 1.65,
            jump_speed: 6.8,
            gravity: 20.0,
            ground_accel: 40.0,
            air_accel: 8.0,
            ground_friction: 11.0,
            air_friction: 0.6,

            slide_trigger_ratio: 1.2,
            slide_duration: 0.65,
            slide_friction: 2.2,
            slide_speed_ratio: 1.1,
            slide_accel_ratio: 0.45,

            slope_limit_degrees: 45.0,
            snap_distance: 0.3,
            max_snap_speed: 8.0,

            head_height: 1.65,
            play_area_half_extent: 28.0,
            spawn_position: Vec3::new(0.0, 2.0, 0.0),
            spawn_yaw: -90.0,
            spawn_pitch: 0.0,
        }
    }
}

impl MovementConfig {
    /// Target speed for the current sprint state.
    pub fn target_speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.base_speed * self.sprint_multiplier
        } else {
            self.base_speed
        }
    }

    /// Horizontal speed a grounded body must exceed to start sliding.
    pub fn slide_trigger_speed(&self) -> f32 {
        self.base_speed * self.slide_trigger_ratio
    }

    /// Slope limit in radians.
    pub fn slope_limit_radians(&self) -> f32 {
        self.slope_limit_degrees.to_radians()
    }
}
