//! First-person camera pose.
//!
//! Yaw/pitch are in degrees. Yaw 0 looks down +X and yaw -90 looks down -Z;
//! positive pitch looks up.

use glam::{Mat4, Vec3};

/// Unit view direction for a yaw/pitch pair (degrees).
pub fn direction_from_angles(yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let (sy, cy) = yaw_degrees.to_radians().sin_cos();
    let (sp, cp) = pitch_degrees.to_radians().sin_cos();
    Vec3::new(cy * cp, sp, sy * cp).normalize()
}

/// Horizontal movement basis `(forward, right)` for a yaw/pitch pair.
///
/// Forward is the view direction with its vertical component removed, so
/// looking up or down never changes walking direction.
pub fn horizontal_basis(yaw_degrees: f32, pitch_degrees: f32) -> (Vec3, Vec3) {
    let (sy, cy) = yaw_degrees.to_radians().sin_cos();
    let cp = pitch_degrees.to_radians().cos();
    let forward = Vec3::new(cy * cp, 0.0, sy * cp).normalize();
    let right = forward.cross(Vec3::Y).normalize();
    (forward, right)
}

/// Where the eye is and where it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// Unit view direction
    pub direction: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Right-handed look-at view matrix with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.direction, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_spawn_orientation_looks_down_negative_z() {
        assert!(approx(direction_from_angles(-90.0, 0.0), Vec3::NEG_Z));
    }

    #[test]
    fn test_yaw_zero_looks_down_positive_x() {
        assert!(approx(direction_from_angles(0.0, 0.0), Vec3::X));
    }

    #[test]
    fn test_pitch_up() {
        let dir = direction_from_angles(0.0, 45.0);
        assert!(dir.y > 0.7);
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_horizontal_basis_ignores_pitch() {
        let (flat_f, flat_r) = horizontal_basis(-90.0, 0.0);
        let (up_f, up_r) = horizontal_basis(-90.0, 80.0);
        assert!(approx(flat_f, up_f));
        assert!(approx(flat_r, up_r));
        assert_eq!(up_f.y, 0.0);
    }

    #[test]
    fn test_right_is_clockwise_from_forward() {
        let (forward, right) = horizontal_basis(-90.0, 0.0);
        assert!(approx(forward, Vec3::NEG_Z));
        assert!(approx(right, Vec3::X));
    }

    #[test]
    fn test_view_matrix_maps_eye_to_origin() {
        let pose = CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z);
        let eye = pose.view_matrix().transform_point3(pose.position);
        assert!(eye.length() < 1e-5);
        let ahead = pose.view_matrix().transform_point3(pose.position + Vec3::NEG_Z);
        assert!(approx(ahead, Vec3::NEG_Z));
    }
}
