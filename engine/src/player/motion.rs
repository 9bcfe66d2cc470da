//! Quake-style friction and acceleration on the horizontal velocity.
//!
//! Both functions only touch the X and Z components; vertical velocity is
//! owned by gravity, jumping and ground snapping.

use glam::Vec3;

/// Horizontal speeds below this are treated as standing still by friction.
pub const FRICTION_EPSILON: f32 = 1e-4;

/// Horizontal (XZ) part of a velocity.
#[inline]
pub fn horizontal(velocity: Vec3) -> Vec3 {
    Vec3::new(velocity.x, 0.0, velocity.z)
}

/// Horizontal speed of a velocity.
#[inline]
pub fn horizontal_speed(velocity: Vec3) -> f32 {
    horizontal(velocity).length()
}

/// Scale horizontal speed down by `speed * amount * dt`, never below zero.
///
/// Direction is preserved; friction can stop the body but never reverse it.
pub fn apply_friction(velocity: &mut Vec3, dt: f32, amount: f32) {
    let flat = horizontal(*velocity);
    let speed = flat.length();
    if speed < FRICTION_EPSILON {
        return;
    }

    let drop = speed * amount * dt;
    let new_speed = (speed - drop).max(0.0);
    let scaled = flat * (new_speed / speed);
    velocity.x = scaled.x;
    velocity.z = scaled.z;
}

/// Add speed along `wish_dir` until the projected speed reaches `wish_speed`.
///
/// Never removes speed: if the velocity already exceeds `wish_speed` along
/// `wish_dir` this is a no-op, which is what lets strafing keep momentum
/// through direction changes.
pub fn accelerate(velocity: &mut Vec3, wish_dir: Vec3, wish_speed: f32, accel: f32, dt: f32) {
    let current_speed = horizontal(*velocity).dot(wish_dir);
    let add_speed = wish_speed - current_speed;
    if add_speed <= 0.0 {
        return;
    }

    let accel_speed = (accel * dt * wish_speed).min(add_speed);
    velocity.x += accel_speed * wish_dir.x;
    velocity.z += accel_speed * wish_dir.z;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friction_never_increases_or_reverses() {
        let dirs = [
            Vec3::new(3.0, 0.0, 4.0),
            Vec3::new(-0.2, 5.0, 0.1),
            Vec3::new(12.0, -3.0, -7.5),
        ];
        for v0 in dirs {
            for amount in [0.6, 2.2, 11.0, 500.0] {
                for dt in [0.001, 0.016, 0.033, 1.0] {
                    let mut v = v0;
                    apply_friction(&mut v, dt, amount);
                    let before = horizontal(v0);
                    let after = horizontal(v);
                    assert!(after.length() <= before.length() + 1e-6);
                    assert!(after.dot(before) >= 0.0);
                    assert_eq!(v.y, v0.y);
                }
            }
        }
    }

    #[test]
    fn test_friction_stops_when_drop_exceeds_speed() {
        let mut v = Vec3::new(2.0, 0.0, 0.0);
        apply_friction(&mut v, 1.0, 11.0);
        assert_eq!(horizontal_speed(v), 0.0);
    }

    #[test]
    fn test_friction_below_epsilon_is_noop() {
        let mut v = Vec3::new(1e-5, 1.0, 0.0);
        apply_friction(&mut v, 0.016, 11.0);
        assert_eq!(v, Vec3::new(1e-5, 1.0, 0.0));
    }

    #[test]
    fn test_friction_amount() {
        let mut v = Vec3::new(10.0, 0.0, 0.0);
        apply_friction(&mut v, 0.01, 10.0);
        assert!((v.x - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_accelerate_never_overshoots_wish_speed() {
        let wish = Vec3::new(0.6, 0.0, 0.8);
        for start in [Vec3::ZERO, Vec3::new(-5.0, 0.0, 2.0), Vec3::new(3.0, 0.0, 3.0)] {
            for accel in [8.0, 40.0, 10_000.0] {
                let mut v = start;
                accelerate(&mut v, wish, 6.0, accel, 0.016);
                assert!(horizontal(v).dot(wish) <= 6.0 + 1e-5);
            }
        }
    }

    #[test]
    fn test_accelerate_does_not_slow_fast_body() {
        let mut v = Vec3::new(15.0, 0.0, 0.0);
        accelerate(&mut v, Vec3::X, 6.0, 40.0, 0.016);
        assert_eq!(v, Vec3::new(15.0, 0.0, 0.0));
    }

    #[test]
    fn test_air_strafe_gains_total_speed() {
        // Perpendicular wish direction adds speed without touching the existing component.
        let mut v = Vec3::new(9.0, 0.0, 0.0);
        accelerate(&mut v, Vec3::Z, 6.0, 8.0, 0.016);
        assert_eq!(v.x, 9.0);
        assert!(horizontal_speed(v) > 9.0);
    }

    #[test]
    fn test_accelerate_step_size() {
        let mut v = Vec3::ZERO;
        accelerate(&mut v, Vec3::X, 6.0, 40.0, 0.016);
        assert!((v.x - 40.0 * 0.016 * 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_accelerate_leaves_vertical_alone() {
        let mut v = Vec3::new(0.0, -3.0, 0.0);
        accelerate(&mut v, Vec3::X, 6.0, 40.0, 0.016);
        assert_eq!(v.y, -3.0);
    }
}
