//! IAU 1976 precession and mean obliquity
//!
//! All functions take `t`, Julian centuries of TT since J2000.0.

use super::rotations::{rot_y, rot_z};
use crate::constants::ASEC2RAD;
use nalgebra::Matrix3;

/// Mean obliquity of the ecliptic (IAU 1976), radians
pub fn mean_obliquity(t: f64) -> f64 {
    let t2 = t * t;
    (84_381.448 - 46.8150 * t - 0.000_59 * t2 + 0.001_813 * t2 * t) * ASEC2RAD
}

/// Equatorial precession angles ζ, z, θ in radians
pub fn precession_angles(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let zeta = (2306.2181 * t + 0.301_88 * t2 + 0.017_998 * t3) * ASEC2RAD;
    let z = (2306.2181 * t + 1.094_68 * t2 + 0.018_203 * t3) * ASEC2RAD;
    let theta = (2004.3109 * t - 0.426_65 * t2 - 0.041_833 * t3) * ASEC2RAD;
    (zeta, z, theta)
}

/// Rotation from the J2000 mean equator and equinox to the mean equator and
/// equinox of date: `Rz(−z) · Ry(θ) · Rz(−ζ)`
///
/// The transpose maps mean-of-date back to J2000.
pub fn precession_matrix(t: f64) -> Matrix3<f64> {
    let (zeta, z, theta) = precession_angles(t);
    rot_z(-z) * rot_y(theta) * rot_z(-zeta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{B1950, DAYS_PER_CENTURY, J2000, RAD2DEG};
    use crate::coordinates::cartesian::Cartesian3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_obliquity_at_j2000() {
        assert_abs_diff_eq!(mean_obliquity(0.0) * RAD2DEG, 23.439_291_1, epsilon = 1e-7);
    }

    #[test]
    fn test_identity_at_j2000() {
        assert_abs_diff_eq!(precession_matrix(0.0), Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_theta_persei_2028() {
        // Meeus example 21.b: θ Persei from J2000.0 to 2028 November 13.19 TD,
        // proper motion already applied
        let t = (2462088.69 - J2000) / DAYS_PER_CENTURY;
        let start = Cartesian3::from_spherical(
            41.054_063_f64.to_radians(),
            49.227_750_f64.to_radians(),
            1.0,
        );
        let (ra, dec, _) = start.rotate(&precession_matrix(t)).to_spherical();

        assert_abs_diff_eq!(ra * RAD2DEG, 41.547_214, epsilon = 1e-5);
        assert_abs_diff_eq!(dec * RAD2DEG, 49.348_483, epsilon = 1e-5);
    }

    #[test]
    fn test_b1950_precession_size() {
        // General precession over 50 years is close to 0.7°
        let t = (B1950 - J2000) / DAYS_PER_CENTURY;
        let (zeta, z, theta) = precession_angles(t);
        assert!(zeta < 0.0 && z < 0.0 && theta < 0.0);
        assert_abs_diff_eq!(theta * RAD2DEG, -0.2783, epsilon = 1e-3);
    }
}
