//! Vector rotation about the coordinate axes and by yaw/pitch
//!
//! Axis rotations take radians. Each axis rotation updates the two affected
//! components in sequence: the second one is computed from the already
//! rotated first one. Stored results depend on this order.

use crate::{FacingSource, Vec3};

/// One of the three coordinate axes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotate around the X axis. `y` is rotated first, then `z` from the new `y`.
pub fn rotate_around_x(v: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    let y = v.y * cos - v.z * sin;
    let z = y * sin + v.z * cos;
    Vec3::new(v.x, y, z)
}

/// Rotate around the Y axis. `x` is rotated first, then `z` from the new `x`.
pub fn rotate_around_y(v: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    let x = v.x * cos + v.z * sin;
    let z = x * -sin + v.z * cos;
    Vec3::new(x, v.y, z)
}

/// Rotate around the Z axis. `x` is rotated first, then `y` from the new `x`.
pub fn rotate_around_z(v: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    let x = v.x * cos - v.y * sin;
    let y = x * sin + v.y * cos;
    Vec3::new(x, y, v.z)
}

/// Rotate around a single axis
#[inline]
pub fn rotate_around(v: Vec3, axis: Axis, angle: f64) -> Vec3 {
    match axis {
        Axis::X => rotate_around_x(v, angle),
        Axis::Y => rotate_around_y(v, angle),
        Axis::Z => rotate_around_z(v, angle),
    }
}

/// Rotate around X, then Y, then Z
///
/// Rotations do not commute; the order is fixed.
pub fn rotate_xyz(v: Vec3, angle_x: f64, angle_y: f64, angle_z: f64) -> Vec3 {
    [(Axis::X, angle_x), (Axis::Y, angle_y), (Axis::Z, angle_z)]
        .into_iter()
        .fold(v, |acc, (axis, angle)| rotate_around(acc, axis, angle))
}

/// Reorient a local-space vector to face along a yaw/pitch given in degrees
///
/// Yaw 0 faces the reference axis of the host's convention: the working
/// angles are `yaw = -(yaw_deg + 90)` and `pitch = -pitch_deg`. Pitch is
/// applied twice to the x component before the yaw turn in the XZ plane.
pub fn rotate_by_orientation(v: Vec3, yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let yaw = (-(f64::from(yaw_degrees) + 90.0)).to_radians();
    let pitch = (-f64::from(pitch_degrees)).to_radians();
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();

    let initial_x = v.x * cos_pitch - v.y * sin_pitch;
    let initial_y = v.y;
    let initial_z = v.z;
    let x = initial_x * cos_pitch - initial_y * sin_pitch;

    Vec3::new(
        initial_z * sin_yaw + x * cos_yaw,
        initial_x * sin_pitch + initial_y * cos_pitch,
        initial_z * cos_yaw - x * sin_yaw,
    )
}

/// Reorient a vector to the facing of any [`FacingSource`]
pub fn rotate_by_facing(v: Vec3, facing: &impl FacingSource) -> Vec3 {
    let o = facing.orientation();
    rotate_by_orientation(v, o.yaw, o.pitch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Orientation;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    const TEN: Vec3 = Vec3::new(10.0, 10.0, 10.0);

    #[test]
    fn test_rotate_around_x_fixture() {
        // 180 radians, not degrees
        let v = rotate_around_x(TEN, 180.0);
        assert_eq!(v.block(), [10, 2, -8]);
    }

    #[test]
    fn test_rotate_around_y_fixture() {
        let v = rotate_around_y(TEN, 180.0);
        assert_eq!(v.block(), [-14, 10, -18]);
    }

    #[test]
    fn test_rotate_around_z_fixture() {
        let v = rotate_around_z(TEN, 180.0);
        assert_eq!(v.block(), [2, -8, 10]);
    }

    #[test]
    fn test_rotate_xyz_fixture() {
        let v = rotate_xyz(TEN, 10.0, 20.0, 30.0);
        assert_eq!(v.block(), [-4, 2, -1]);
        assert_relative_eq!(v.x, -3.2412853674258506, epsilon = 1e-9);
        assert_relative_eq!(v.y, 2.7473728977732366, epsilon = 1e-9);
        assert_relative_eq!(v.z, -0.8390690342702278, epsilon = 1e-9);
    }

    #[test]
    fn test_rotate_xyz_applies_x_then_y_then_z() {
        let expected = rotate_around_z(rotate_around_y(rotate_around_x(TEN, 0.3), 0.2), 0.1);
        assert_eq!(rotate_xyz(TEN, 0.3, 0.2, 0.1), expected);
    }

    #[test]
    fn test_zero_angle_is_identity() {
        assert_eq!(rotate_around_x(TEN, 0.0), TEN);
        assert_eq!(rotate_around_y(TEN, 0.0), TEN);
        assert_eq!(rotate_around_z(TEN, 0.0), TEN);
    }

    #[test]
    fn test_second_component_uses_rotated_first() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let (sin, cos) = 0.5f64.sin_cos();
        let y = 2.0 * cos - 3.0 * sin;
        let r = rotate_around_x(v, 0.5);
        assert_eq!(r.x, 1.0);
        assert_relative_eq!(r.y, y, epsilon = 1e-12);
        assert_relative_eq!(r.z, y * sin + 3.0 * cos, epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_turn_moves_leading_component() {
        let v = rotate_around_y(Vec3::Z, FRAC_PI_2);
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-12);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_rotate_around_dispatch() {
        assert_eq!(rotate_around(TEN, Axis::Y, 1.0), rotate_around_y(TEN, 1.0));
    }

    #[test]
    fn test_rotate_by_orientation_fixture() {
        let v = rotate_by_orientation(TEN, 180.0, 90.0);
        // cos(-90 deg) and cos(-270 deg) are a few 1e-16 off zero, which
        // leaves x just under 10 and z just under -10
        assert_eq!(v.block(), [9, -10, -11]);
        assert_relative_eq!(v.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(v.y, -10.0, epsilon = 1e-9);
        assert_relative_eq!(v.z, -10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotate_by_zero_facing() {
        let v = rotate_by_facing(TEN, &Orientation::ZERO);
        assert_relative_eq!(v.x, -10.0, epsilon = 1e-9);
        assert_relative_eq!(v.y, 10.0, epsilon = 1e-9);
        assert_relative_eq!(v.z, 10.0, epsilon = 1e-9);
    }
}
