//! Fixed inertial frames: J2000 equatorial, J2000 ecliptic and galactic
//!
//! The rotations between these frames do not depend on time, so they are
//! built once and shared.

use super::rotations::rot_x;
use crate::constants::{DEG2RAD, OBLIQUITY_J2000_DEG, RAD2DEG, TAU};
use crate::coordinates::cartesian::Cartesian3;
use lazy_static::lazy_static;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// J2000 equatorial to J2000 ecliptic
    pub static ref EQ_TO_EC: Matrix3<f64> = rot_x(OBLIQUITY_J2000_DEG * DEG2RAD);

    /// J2000 ecliptic to J2000 equatorial
    pub static ref EC_TO_EQ: Matrix3<f64> = EQ_TO_EC.transpose();

    /// J2000 equatorial to galactic (IAU 1958 system, Hipparcos realisation)
    pub static ref EQ_TO_GAL: Matrix3<f64> = Matrix3::new(
        -0.054_875_560_4, -0.873_437_090_2, -0.483_835_015_5,
        0.494_109_427_9, -0.444_829_630_0, 0.746_982_244_5,
        -0.867_666_149_0, -0.198_076_373_4, 0.455_983_776_2,
    );

    /// Galactic to J2000 equatorial
    pub static ref GAL_TO_EQ: Matrix3<f64> = EQ_TO_GAL.transpose();
}

/// Spherical direction in a fixed frame
pub trait InertialFrame: Sized {
    fn to_cartesian(&self) -> Cartesian3;
    fn from_cartesian(cart: Cartesian3) -> Self;

    fn angle_between(&self, other: &Self) -> f64 {
        self.to_cartesian().angle_between(&other.to_cartesian())
    }
}

// Equatorial coordinates (RA/Dec)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    pub ra: f64,  // Right ascension in radians
    pub dec: f64, // Declination in radians
}

impl Equatorial {
    pub fn new(ra: f64, dec: f64) -> Self {
        Equatorial {
            ra: ra.rem_euclid(TAU),
            dec,
        }
    }

    /// Create a new Equatorial coordinate with values in degrees
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(ra_deg * DEG2RAD, dec_deg * DEG2RAD)
    }

    /// Right ascension in hours
    pub fn ra_hours(&self) -> f64 {
        self.ra * RAD2DEG / 15.0
    }

    /// Declination in degrees
    pub fn dec_degrees(&self) -> f64 {
        self.dec * RAD2DEG
    }
}

// Ecliptic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    pub lon: f64, // Ecliptic longitude in radians
    pub lat: f64, // Ecliptic latitude in radians
}

// Galactic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Galactic {
    pub lon: f64, // Galactic longitude in radians
    pub lat: f64, // Galactic latitude in radians
}

impl InertialFrame for Equatorial {
    fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_spherical(self.ra, self.dec, 1.0)
    }

    fn from_cartesian(cart: Cartesian3) -> Self {
        let (ra, dec, _) = cart.to_spherical();
        Equatorial::new(ra, dec)
    }
}

impl InertialFrame for Ecliptic {
    fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_spherical(self.lon, self.lat, 1.0)
    }

    fn from_cartesian(cart: Cartesian3) -> Self {
        let (lon, lat, _) = cart.to_spherical();
        Ecliptic { lon, lat }
    }
}

impl InertialFrame for Galactic {
    fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_spherical(self.lon, self.lat, 1.0)
    }

    fn from_cartesian(cart: Cartesian3) -> Self {
        let (lon, lat, _) = cart.to_spherical();
        Galactic { lon, lat }
    }
}

impl From<Equatorial> for Ecliptic {
    fn from(eq: Equatorial) -> Self {
        Ecliptic::from_cartesian(eq.to_cartesian().rotate(&EQ_TO_EC))
    }
}

impl From<Equatorial> for Galactic {
    fn from(eq: Equatorial) -> Self {
        Galactic::from_cartesian(eq.to_cartesian().rotate(&EQ_TO_GAL))
    }
}

impl From<Ecliptic> for Equatorial {
    fn from(ec: Ecliptic) -> Self {
        Equatorial::from_cartesian(ec.to_cartesian().rotate(&EC_TO_EQ))
    }
}

impl From<Galactic> for Equatorial {
    fn from(gal: Galactic) -> Self {
        Equatorial::from_cartesian(gal.to_cartesian().rotate(&GAL_TO_EQ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    #[test]
    fn test_matrices_are_rotations() {
        for m in [*EQ_TO_EC, *EQ_TO_GAL] {
            assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-9);
            assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_galactic_center_and_pole() {
        // Galactic centre: RA 266.405°, Dec −28.936°
        let center: Galactic = Equatorial::from_degrees(266.405_1, -28.936_2).into();
        let lon = if center.lon > PI { center.lon - 2.0 * PI } else { center.lon };
        assert_relative_eq!(lon * RAD2DEG, 0.0, epsilon = 1e-3);
        assert_relative_eq!(center.lat * RAD2DEG, 0.0, epsilon = 1e-3);

        // North galactic pole: RA 192.8595°, Dec +27.1283°
        let pole: Galactic = Equatorial::from_degrees(192.859_48, 27.128_25).into();
        assert_relative_eq!(pole.lat * RAD2DEG, 90.0, epsilon = 1e-3);
    }

    #[test]
    fn test_equinox_and_solstice() {
        // The vernal equinox lies on both planes
        let ec: Ecliptic = Equatorial::new(0.0, 0.0).into();
        assert_relative_eq!(ec.lon, 0.0, epsilon = 1e-12);
        assert_relative_eq!(ec.lat, 0.0, epsilon = 1e-12);

        // Ecliptic longitude 90° sits at the obliquity in declination
        let eq: Equatorial = Ecliptic { lon: PI / 2.0, lat: 0.0 }.into();
        assert_relative_eq!(eq.ra_hours(), 6.0, epsilon = 1e-10);
        assert_relative_eq!(eq.dec_degrees(), OBLIQUITY_J2000_DEG, epsilon = 1e-10);
    }

    #[test]
    fn test_round_trips() {
        let mut rng = StdRng::seed_from_u64(424242);
        for _ in 0..100 {
            let original = Equatorial::new(
                rng.gen::<f64>() * 2.0 * PI,
                (rng.gen::<f64>() * PI - PI / 2.0) * 0.99,
            );

            let via_ecliptic: Equatorial = Ecliptic::from(original).into();
            let via_galactic: Equatorial = Galactic::from(original).into();

            assert_relative_eq!(original.angle_between(&via_ecliptic), 0.0, epsilon = 1e-7);
            assert_relative_eq!(original.angle_between(&via_galactic), 0.0, epsilon = 1e-7);
        }
    }
}
