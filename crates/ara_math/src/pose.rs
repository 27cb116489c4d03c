//! Pose construction helpers for surface hits.

use crate::{Mat4, Vec3};

/// Build a gravity-aligned pose at `point`.
///
/// The resulting basis has +Y as the world up axis and -Z facing back along
/// `forward_hint` projected onto the horizontal plane, so a flat marker
/// placed with this transform lies on the surface and faces the viewer.
/// Falls back to world -Z when the hint is (near) vertical.
pub fn gravity_aligned_pose(point: Vec3, forward_hint: Vec3) -> Mat4 {
    const EPSILON: f32 = 1e-6;

    let up = Vec3::Y;
    let mut flat = Vec3::new(forward_hint.x, 0.0, forward_hint.z);
    if flat.length_squared() < EPSILON {
        flat = Vec3::NEG_Z;
    }
    let forward = flat.normalize();
    let right = forward.cross(up).normalize();

    Mat4::from_cols(
        right.extend(0.0),
        up.extend(0.0),
        (-forward).extend(0.0),
        point.extend(1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_translation() {
        let p = Vec3::new(1.0, 0.0, -2.0);
        let m = gravity_aligned_pose(p, Vec3::NEG_Z);
        assert_eq!(m.w_axis.truncate(), p);
    }

    #[test]
    fn test_pose_up_is_world_up() {
        let m = gravity_aligned_pose(Vec3::ZERO, Vec3::new(0.3, -0.8, -0.5));
        assert!((m.y_axis.truncate() - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_pose_orthonormal() {
        let m = gravity_aligned_pose(Vec3::ZERO, Vec3::new(0.7, -0.2, -0.7));
        let x = m.x_axis.truncate();
        let y = m.y_axis.truncate();
        let z = m.z_axis.truncate();
        assert!((x.length() - 1.0).abs() < 1e-5);
        assert!((y.length() - 1.0).abs() < 1e-5);
        assert!((z.length() - 1.0).abs() < 1e-5);
        assert!(x.dot(y).abs() < 1e-5);
        assert!(x.dot(z).abs() < 1e-5);
        assert!(y.dot(z).abs() < 1e-5);
    }

    #[test]
    fn test_pose_vertical_hint_falls_back() {
        let m = gravity_aligned_pose(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        // -Z column faces world +Z (marker faces the default viewer direction)
        assert!((m.z_axis.truncate() - Vec3::Z).length() < 1e-5);
    }
}
