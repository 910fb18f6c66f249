//! Observers on the Earth's surface
//!
//! An [`Observer`] pairs an instant with a [`GeodeticLocation`]. Solvers that
//! search in time work on copies made with [`Observer::at`], so the caller's
//! observer is never moved.

use crate::constants::{AU_KM, DEG2RAD, EARTH_INVERSE_FLATTENING, EARTH_RADIUS_KM};
use crate::coordinates::cartesian::Cartesian3;
use crate::time::Instant;
use serde::{Deserialize, Serialize};

/// Geodetic position on the IAU 1976 reference ellipsoid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticLocation {
    /// Geodetic latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
    /// Height above the ellipsoid in metres
    pub elevation_m: f64,
}

impl GeodeticLocation {
    pub fn new(latitude: f64, longitude: f64, elevation_m: f64) -> Self {
        GeodeticLocation {
            latitude,
            longitude,
            elevation_m,
        }
    }

    pub fn from_radians(latitude: f64, longitude: f64, elevation_m: f64) -> Self {
        Self::new(latitude / DEG2RAD, longitude / DEG2RAD, elevation_m)
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude * DEG2RAD
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude * DEG2RAD
    }

    /// Geocentric parallax factors `(ρ sinφ′, ρ cosφ′)` in Earth radii
    pub fn parallax_factors(&self) -> (f64, f64) {
        let phi = self.latitude_rad();
        let f = 1.0 / EARTH_INVERSE_FLATTENING;
        let u = ((1.0 - f) * phi.tan()).atan();
        let h = self.elevation_m / 1000.0 / EARTH_RADIUS_KM;

        let rho_sin = (1.0 - f) * u.sin() + h * phi.sin();
        let rho_cos = u.cos() + h * phi.cos();
        (rho_sin, rho_cos)
    }

    /// Geocentric position of the site in the true equator and equinox of
    /// date, AU, given Greenwich apparent sidereal time in radians
    pub fn geocentric_position(&self, gast: f64) -> Cartesian3 {
        let (rho_sin, rho_cos) = self.parallax_factors();
        let theta = gast + self.longitude_rad();
        let radius = EARTH_RADIUS_KM / AU_KM;
        Cartesian3::new(
            radius * rho_cos * theta.cos(),
            radius * rho_cos * theta.sin(),
            radius * rho_sin,
        )
    }
}

/// A location at an instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub time: Instant,
    pub location: GeodeticLocation,
}

impl Observer {
    pub fn new(time: Instant, location: GeodeticLocation) -> Self {
        Observer { time, location }
    }

    /// The same site at another instant
    pub fn at(&self, time: Instant) -> Observer {
        Observer {
            time,
            location: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_palomar_parallax_factors() {
        // Meeus example 11.a: Palomar, 33°21′22″ N, 1706 m
        let palomar = GeodeticLocation::new(33.0 + 21.0 / 60.0 + 22.0 / 3600.0, -116.8625, 1706.0);
        let (rho_sin, rho_cos) = palomar.parallax_factors();
        assert_abs_diff_eq!(rho_sin, 0.546_861, epsilon = 1e-6);
        assert_abs_diff_eq!(rho_cos, 0.836_339, epsilon = 1e-6);
    }

    #[test]
    fn test_pole_and_equator_radii() {
        let equator = GeodeticLocation::new(0.0, 0.0, 0.0);
        let pole = GeodeticLocation::new(90.0, 0.0, 0.0);

        let r_eq = equator.geocentric_position(0.0).magnitude() * AU_KM;
        let r_pole = pole.geocentric_position(0.0).magnitude() * AU_KM;
        assert_abs_diff_eq!(r_eq, EARTH_RADIUS_KM, epsilon = 1e-6);
        assert_abs_diff_eq!(r_pole, EARTH_RADIUS_KM * (1.0 - 1.0 / EARTH_INVERSE_FLATTENING), epsilon = 1e-6);
    }

    #[test]
    fn test_site_rotates_with_sidereal_time() {
        let site = GeodeticLocation::new(0.0, 90.0, 0.0);
        let p = site.geocentric_position(0.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-15);
        assert!(p.y > 0.0);
    }

    #[test]
    fn test_at_keeps_location() {
        let edinburgh = GeodeticLocation::new(55.925, -3.1825, 0.0);
        let observer = Observer::new(Instant::from_jd(2452805.0), edinburgh);
        let later = observer.at(observer.time + 0.25);

        assert_eq!(later.location, edinburgh);
        assert_abs_diff_eq!(later.time - observer.time, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(observer.time.jd(), 2452805.0, epsilon = 0.0);
    }

    #[test]
    fn test_radian_constructor() {
        let site = GeodeticLocation::from_radians(0.5, -1.0, 12.0);
        assert_abs_diff_eq!(site.latitude_rad(), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(site.longitude_rad(), -1.0, epsilon = 1e-15);
    }
}
