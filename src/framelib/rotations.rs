//! Elementary frame rotations
//!
//! Each matrix rotates the coordinate *frame* by `angle` (radians) about one
//! axis, so applying it to a vector expresses that vector in the rotated
//! frame. A positive angle is counter-clockwise seen from the positive axis.

use nalgebra::Matrix3;

/// Frame rotation about the x axis
pub fn rot_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, s, //
        0.0, -s, c,
    )
}

/// Frame rotation about the y axis
pub fn rot_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, 0.0, -s, //
        0.0, 1.0, 0.0, //
        s, 0.0, c,
    )
}

/// Frame rotation about the z axis
pub fn rot_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, s, 0.0, //
        -s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_quarter_turns() {
        // Rotating the frame +90° about z moves the old y axis onto the new x axis
        let v = rot_z(FRAC_PI_2) * Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(v, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-15);

        let v = rot_x(FRAC_PI_2) * Vector3::new(0.0, 0.0, 1.0);
        assert_relative_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);

        let v = rot_y(FRAC_PI_2) * Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(v, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_inverse_is_transpose() {
        for angle in [-2.1, -0.3, 0.0, 0.7, 3.0] {
            for m in [rot_x(angle), rot_y(angle), rot_z(angle)] {
                assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-15);
            }
            assert_relative_eq!(rot_z(-angle), rot_z(angle).transpose(), epsilon = 1e-15);
        }
    }
}
