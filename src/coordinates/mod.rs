//! Coordinate representations shared across frames
//!
//! Positions are carried as [`Cartesian3`](cartesian::Cartesian3) vectors in
//! AU; the spherical types of each inertial frame live in
//! [`framelib::inertial`](crate::framelib::inertial).

pub mod cartesian;

pub use crate::framelib::inertial::{Ecliptic, Equatorial, Galactic};
pub use cartesian::Cartesian3;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framelib::inertial::InertialFrame;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_spherical_types_share_vectors() {
        let coord = Equatorial::new(1.5, 0.5);
        let v = coord.to_cartesian();
        let (lon, lat, distance) = v.to_spherical();

        assert_abs_diff_eq!(lon, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(lat, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(distance, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_antipodes() {
        let p1 = Equatorial::new(1.0, 0.5);
        assert_abs_diff_eq!(p1.angle_between(&p1), 0.0, epsilon = 1e-10);

        let p2 = Equatorial::new(1.0 + PI, -0.5);
        assert_abs_diff_eq!(p1.angle_between(&p2), PI, epsilon = 1e-7);
    }
}
