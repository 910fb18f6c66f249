//! Annual aberration in vector form
//!
//! The Earth's orbital velocity shifts every apparent direction by up to κ =
//! 20.49552″. The velocity is taken from the Sun's low-precision geometric
//! longitude plus the eccentricity term of the Earth's orbit, then expressed
//! in the true equator and equinox of date.

use super::nutation::true_obliquity;
use super::rotations::rot_x;
use crate::constants::{ABERRATION_ASEC, ASEC2RAD, DEG2RAD};
use crate::coordinates::cartesian::Cartesian3;

/// Geometric longitude of the Sun (mean equinox of date), radians
fn sun_true_longitude(t: f64) -> f64 {
    let l0 = 280.466_46 + 36_000.769_83 * t;
    let m = (357.529_11 + 35_999.050_29 * t) * DEG2RAD;
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    (l0 + c) * DEG2RAD
}

/// Aberration offset to add to a unit direction vector, true equator of date
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn annual_aberration(t: f64) -> Cartesian3 {
    let sun = sun_true_longitude(t);
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;
    let perihelion = (102.937_35 + 1.719_46 * t + 0.000_46 * t * t) * DEG2RAD;
    let kappa = ABERRATION_ASEC * ASEC2RAD;

    let ecliptic = Cartesian3::new(
        kappa * (sun.sin() - e * perihelion.sin()),
        kappa * (-sun.cos() + e * perihelion.cos()),
        0.0,
    );
    ecliptic.rotate(&rot_x(-true_obliquity(t)))
}

/// Apply annual aberration to a position, keeping its distance
pub fn apply_aberration(position: Cartesian3, t: f64) -> Cartesian3 {
    let distance = position.magnitude();
    let Some(direction) = position.normalize() else {
        return position;
    };
    match (direction + annual_aberration(t)).normalize() {
        Some(shifted) => shifted * distance,
        None => position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DAYS_PER_CENTURY, J2000};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_magnitude_near_constant() {
        for k in 0..24 {
            let t = k as f64 / 24.0 / 100.0;
            let shift = annual_aberration(t).magnitude() / ASEC2RAD;
            assert!(shift > 20.1 && shift < 20.9, "{} arcsec", shift);
        }
    }

    #[test]
    fn test_preserves_distance() {
        let t = (2452805.0 - J2000) / DAYS_PER_CENTURY;
        let position = Cartesian3::new(3.0, -4.0, 1.5);
        let shifted = apply_aberration(position, t);
        assert_abs_diff_eq!(shifted.magnitude(), position.magnitude(), epsilon = 1e-12);
        let angle = shifted.angle_between(&position) / ASEC2RAD;
        assert!(angle < 21.0);
    }

    #[test]
    fn test_zero_vector_unchanged() {
        assert_eq!(apply_aberration(Cartesian3::zero(), 0.1), Cartesian3::zero());
    }
}
