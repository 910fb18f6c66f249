//! Heliocentric and geocentric position vectors
//!
//! Both types wrap a [`Cartesian3`] in the J2000 equatorial frame, in AU.
//! They are kept as distinct types so a heliocentric vector can never be
//! passed where a geocentric one is expected; moving between the two always
//! goes through the Sun's geocentric position explicitly.

use crate::constants::{C_AUDAY, RAD2DEG};
use crate::coordinates::cartesian::Cartesian3;
use serde::{Deserialize, Serialize};

/// Position of a body relative to the Sun, J2000 equatorial, AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeliocentricPosition(Cartesian3);

/// Position of a body relative to the Earth's centre, J2000 equatorial, AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeocentricPosition(Cartesian3);

impl HeliocentricPosition {
    pub fn new(vector: Cartesian3) -> Self {
        HeliocentricPosition(vector)
    }

    /// The Sun itself
    pub fn origin() -> Self {
        HeliocentricPosition(Cartesian3::zero())
    }

    pub fn vector(&self) -> Cartesian3 {
        self.0
    }

    /// Distance from the Sun in AU
    pub fn distance(&self) -> f64 {
        self.0.magnitude()
    }

    /// Shift to the Earth's centre: `helio + sun_geo`
    pub fn to_geocentric(&self, sun: &GeocentricPosition) -> GeocentricPosition {
        GeocentricPosition(self.0 + sun.0)
    }
}

impl GeocentricPosition {
    pub fn new(vector: Cartesian3) -> Self {
        GeocentricPosition(vector)
    }

    pub fn vector(&self) -> Cartesian3 {
        self.0
    }

    /// Distance from the Earth's centre in AU
    pub fn distance(&self) -> f64 {
        self.0.magnitude()
    }

    /// Shift to the Sun: `geo − sun_geo`
    pub fn to_heliocentric(&self, sun: &GeocentricPosition) -> HeliocentricPosition {
        HeliocentricPosition(self.0 - sun.0)
    }

    /// One-way light time in days, negative (the light left in the past)
    pub fn light_time(&self) -> f64 {
        -self.distance() / C_AUDAY
    }

    /// J2000 right ascension and declination in radians, RA in [0, 2π)
    pub fn radec(&self) -> (f64, f64) {
        let (ra, dec, _) = self.0.to_spherical();
        (ra, dec)
    }

    /// J2000 right ascension in hours and declination in degrees
    pub fn radec_hours_degrees(&self) -> (f64, f64) {
        let (ra, dec) = self.radec();
        (ra * RAD2DEG / 15.0, dec * RAD2DEG)
    }
}

impl From<GeocentricPosition> for Cartesian3 {
    fn from(position: GeocentricPosition) -> Self {
        position.0
    }
}

impl From<HeliocentricPosition> for Cartesian3 {
    fn from(position: HeliocentricPosition) -> Self {
        position.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_round_trip_is_exact() {
        // Dyadic components keep every sum exactly representable
        let helio = HeliocentricPosition::new(Cartesian3::new(1.25, -0.5, 0.03125));
        let sun = GeocentricPosition::new(Cartesian3::new(-0.75, 0.625, -0.0078125));

        let geo = helio.to_geocentric(&sun);
        assert_eq!(geo.vector(), Cartesian3::new(0.5, 0.125, 0.0234375));
        assert_eq!(geo.to_heliocentric(&sun), helio);
    }

    #[test]
    fn test_random_round_trips() {
        let mut rng = StdRng::seed_from_u64(1950);
        for _ in 0..200 {
            let helio = HeliocentricPosition::new(Cartesian3::new(
                rng.gen_range(-40.0..40.0),
                rng.gen_range(-40.0..40.0),
                rng.gen_range(-15.0..15.0),
            ));
            let sun = GeocentricPosition::new(Cartesian3::new(
                rng.gen_range(-1.02..1.02),
                rng.gen_range(-1.02..1.02),
                rng.gen_range(-0.44..0.44),
            ));

            let back = helio.to_geocentric(&sun).to_heliocentric(&sun).vector();
            let v = helio.vector();
            assert_relative_eq!(back.x, v.x, epsilon = 1e-13, max_relative = 1e-14);
            assert_relative_eq!(back.y, v.y, epsilon = 1e-13, max_relative = 1e-14);
            assert_relative_eq!(back.z, v.z, epsilon = 1e-13, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_light_time_one_au() {
        let geo = GeocentricPosition::new(Cartesian3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(geo.light_time() * 86_400.0, -499.004_783_8, epsilon = 1e-6);
    }

    #[test]
    fn test_radec() {
        let geo = GeocentricPosition::new(Cartesian3::from_spherical(
            (82.5f64).to_radians(),
            (23.25f64).to_radians(),
            1.0158,
        ));
        let (ra_h, dec_d) = geo.radec_hours_degrees();
        assert_relative_eq!(ra_h, 5.5, epsilon = 1e-12);
        assert_relative_eq!(dec_d, 23.25, epsilon = 1e-12);
    }

    #[test]
    fn test_origin() {
        assert_eq!(HeliocentricPosition::origin().distance(), 0.0);
    }
}
