//! Low-order nutation and apparent sidereal time
//!
//! Nutation uses the four largest terms of the IAU 1980 series, driven by the
//! longitude of the Moon's ascending node (Ω) and the mean longitudes of the
//! Sun (L) and Moon (L′). Accuracy is about 0.5″ in Δψ and 0.1″ in Δε.

use super::precession::mean_obliquity;
use super::rotations::{rot_x, rot_z};
use crate::constants::{ASEC2RAD, DAYS_PER_CENTURY, DEG2RAD, J2000, TAU};
use crate::time::Instant;
use nalgebra::Matrix3;

/// Nutation in longitude and obliquity, radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ
    pub longitude: f64,
    /// Δε
    pub obliquity: f64,
}

impl Nutation {
    /// Nutation at `t` Julian centuries of TT since J2000.0
    pub fn at(t: f64) -> Self {
        let omega = (125.044_52 - 1934.136_261 * t) * DEG2RAD;
        let sun = (280.4665 + 36_000.7698 * t) * DEG2RAD;
        let moon = (218.3165 + 481_267.8813 * t) * DEG2RAD;

        let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
            + 0.21 * (2.0 * omega).sin();
        let deps = 9.20 * omega.cos() + 0.57 * (2.0 * sun).cos() + 0.10 * (2.0 * moon).cos()
            - 0.09 * (2.0 * omega).cos();

        Nutation {
            longitude: dpsi * ASEC2RAD,
            obliquity: deps * ASEC2RAD,
        }
    }
}

/// True obliquity ε₀ + Δε, radians
pub fn true_obliquity(t: f64) -> f64 {
    mean_obliquity(t) + Nutation::at(t).obliquity
}

/// Rotation from the mean equator and equinox of date to the true ones:
/// `Rx(−(ε+Δε)) · Rz(−Δψ) · Rx(ε)`
pub fn nutation_matrix(t: f64) -> Matrix3<f64> {
    let eps = mean_obliquity(t);
    let nutation = Nutation::at(t);
    rot_x(-(eps + nutation.obliquity)) * rot_z(-nutation.longitude) * rot_x(eps)
}

/// Greenwich mean sidereal time (IAU 1982), radians in [0, 2π)
pub fn gmst(instant: &Instant) -> f64 {
    let d = instant.jd() - J2000;
    let t = d / DAYS_PER_CENTURY;
    let degrees =
        280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t - t * t * t / 38_710_000.0;
    (degrees.rem_euclid(360.0)) * DEG2RAD
}

/// Greenwich apparent sidereal time, radians
///
/// GMST plus the equation of the equinoxes `Δψ cos(ε+Δε)`. Not wrapped, so
/// it may exceed 2π by a few milliarcseconds.
pub fn gast(instant: &Instant) -> f64 {
    let t = instant.centuries_since_j2000();
    let nutation = Nutation::at(t);
    let eps = mean_obliquity(t) + nutation.obliquity;
    gmst(instant) + nutation.longitude * eps.cos()
}

/// Local apparent sidereal time for an east-positive longitude in radians,
/// wrapped to [0, 2π)
pub fn local_sidereal_time(instant: &Instant, longitude: f64) -> f64 {
    (gast(instant) + longitude).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAD2DEG;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nutation_1987_april_10() {
        // Meeus example 22.a, JDE 2446895.5: Δψ = −3.788″, Δε = +9.443″
        let t = (2446895.5 - J2000) / DAYS_PER_CENTURY;
        let nutation = Nutation::at(t);
        assert_abs_diff_eq!(nutation.longitude / ASEC2RAD, -3.788, epsilon = 0.5);
        assert_abs_diff_eq!(nutation.obliquity / ASEC2RAD, 9.443, epsilon = 0.1);
        assert_abs_diff_eq!(true_obliquity(t) * RAD2DEG, 23.443_56, epsilon = 1e-4);
    }

    #[test]
    fn test_sidereal_time_1987_april_10() {
        // Meeus example 12.a: 0h UT, GMST 13h10m46.3668s, GAST 13h10m46.1351s
        let instant = Instant::from_jd(2446895.5);
        let gmst_hours = gmst(&instant) * RAD2DEG / 15.0;
        assert_abs_diff_eq!(gmst_hours, 13.0 + 10.0 / 60.0 + 46.3668 / 3600.0, epsilon = 1e-8);

        let gast_hours = gast(&instant) * RAD2DEG / 15.0;
        assert_abs_diff_eq!(gast_hours, 13.0 + 10.0 / 60.0 + 46.1351 / 3600.0, epsilon = 0.01 / 3600.0);
    }

    #[test]
    fn test_nutation_matrix_is_small_rotation() {
        let m = nutation_matrix(0.03);
        assert_abs_diff_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-14);
        assert_abs_diff_eq!(m, Matrix3::identity(), epsilon = 1e-4);
    }

    #[test]
    fn test_local_sidereal_time_wraps() {
        let instant = Instant::from_jd(2446895.5);
        let lst = local_sidereal_time(&instant, 300.0 * DEG2RAD);
        assert!((0.0..TAU).contains(&lst));
    }
}
