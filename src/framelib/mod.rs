//! Reference frames and the transforms between them
//!
//! Body positions leave the series in the ecliptic and equinox of date and are
//! carried in J2000 equatorial coordinates everywhere else. [`FrameTransform`]
//! collects every conversion the rest of the crate needs; [`StandardFrames`]
//! implements it with IAU 1976 precession, low-order nutation, vector annual
//! aberration and the IAU 1976 Earth ellipsoid.

pub mod aberration;
pub mod inertial;
pub mod nutation;
pub mod precession;
pub mod rotations;

use crate::constants::{B1950, DAYS_PER_CENTURY, J2000, RAD2DEG, TAU};
use crate::coordinates::cartesian::Cartesian3;
use crate::observer::Observer;
use crate::positions::GeocentricPosition;
use crate::time::Instant;
use serde::Serialize;
use std::f64::consts::PI;

use aberration::apply_aberration;
use inertial::{EC_TO_EQ, EQ_TO_EC, EQ_TO_GAL, GAL_TO_EQ};
use nutation::{gast, nutation_matrix};
use precession::{mean_obliquity, precession_matrix};
use rotations::rot_x;

/// Apparent place of a body as seen from an observer, true equator of date
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TopocentricCoords {
    /// Local hour angle in radians, (−π, π]
    pub hour_angle: f64,
    /// Declination in radians
    pub declination: f64,
    /// Right ascension in radians, [0, 2π)
    pub right_ascension: f64,
    /// Distance from the observer in AU
    pub distance: f64,
}

/// Altitude above the horizon and azimuth from north through east, radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Horizontal {
    pub altitude: f64,
    pub azimuth: f64,
}

impl Horizontal {
    pub fn altitude_degrees(&self) -> f64 {
        self.altitude * RAD2DEG
    }

    pub fn azimuth_degrees(&self) -> f64 {
        self.azimuth * RAD2DEG
    }
}

/// Conversions between the frames a body position passes through
///
/// Vectors are in AU. Time-dependent conversions read TT from the instant;
/// sidereal time reads UT.
pub trait FrameTransform: std::fmt::Debug + Send + Sync {
    /// Ecliptic and equinox of date to mean equator and equinox of date
    fn ecliptic_of_date_to_mean_of_date(&self, v: Cartesian3, instant: &Instant) -> Cartesian3;

    /// Mean equator and equinox of date to J2000
    fn mean_of_date_to_j2000(&self, v: Cartesian3, instant: &Instant) -> Cartesian3;

    /// J2000 to mean equator and equinox of date
    fn j2000_to_mean_of_date(&self, v: Cartesian3, instant: &Instant) -> Cartesian3;

    /// J2000 to true equator and equinox of date (precession then nutation)
    fn j2000_to_true_of_date(&self, v: Cartesian3, instant: &Instant) -> Cartesian3;

    fn j2000_to_galactic(&self, v: Cartesian3) -> Cartesian3;

    fn galactic_to_j2000(&self, v: Cartesian3) -> Cartesian3;

    /// J2000 to the mean equator and equinox of B1950.0
    fn j2000_to_b1950(&self, v: Cartesian3) -> Cartesian3;

    fn j2000_to_ecliptic_j2000(&self, v: Cartesian3) -> Cartesian3;

    fn ecliptic_j2000_to_j2000(&self, v: Cartesian3) -> Cartesian3;

    /// Apparent topocentric place for the observer at its own instant
    fn topocentric(&self, geo: &GeocentricPosition, observer: &Observer) -> TopocentricCoords;

    /// Horizontal coordinates of a topocentric place, no refraction
    fn horizontal(&self, topo: &TopocentricCoords, observer: &Observer) -> Horizontal;
}

/// The standard frame chain
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFrames;

impl StandardFrames {
    pub fn new() -> Self {
        StandardFrames
    }
}

impl FrameTransform for StandardFrames {
    fn ecliptic_of_date_to_mean_of_date(&self, v: Cartesian3, instant: &Instant) -> Cartesian3 {
        v.rotate(&rot_x(-mean_obliquity(instant.centuries_since_j2000())))
    }

    fn mean_of_date_to_j2000(&self, v: Cartesian3, instant: &Instant) -> Cartesian3 {
        v.rotate(&precession_matrix(instant.centuries_since_j2000()).transpose())
    }

    fn j2000_to_mean_of_date(&self, v: Cartesian3, instant: &Instant) -> Cartesian3 {
        v.rotate(&precession_matrix(instant.centuries_since_j2000()))
    }

    fn j2000_to_true_of_date(&self, v: Cartesian3, instant: &Instant) -> Cartesian3 {
        let t = instant.centuries_since_j2000();
        v.rotate(&(nutation_matrix(t) * precession_matrix(t)))
    }

    fn j2000_to_galactic(&self, v: Cartesian3) -> Cartesian3 {
        v.rotate(&EQ_TO_GAL)
    }

    fn galactic_to_j2000(&self, v: Cartesian3) -> Cartesian3 {
        v.rotate(&GAL_TO_EQ)
    }

    fn j2000_to_b1950(&self, v: Cartesian3) -> Cartesian3 {
        v.rotate(&precession_matrix((B1950 - J2000) / DAYS_PER_CENTURY))
    }

    fn j2000_to_ecliptic_j2000(&self, v: Cartesian3) -> Cartesian3 {
        v.rotate(&EQ_TO_EC)
    }

    fn ecliptic_j2000_to_j2000(&self, v: Cartesian3) -> Cartesian3 {
        v.rotate(&EC_TO_EQ)
    }

    fn topocentric(&self, geo: &GeocentricPosition, observer: &Observer) -> TopocentricCoords {
        let instant = &observer.time;
        let t = instant.centuries_since_j2000();

        let apparent = apply_aberration(self.j2000_to_true_of_date(geo.vector(), instant), t);

        let sidereal = gast(instant);
        let site = observer.location.geocentric_position(sidereal);
        let (ra, dec, distance) = (apparent - site).to_spherical();

        let hour_angle = (sidereal + observer.location.longitude_rad() - ra).rem_euclid(TAU);
        let hour_angle = if hour_angle > PI {
            hour_angle - TAU
        } else {
            hour_angle
        };

        TopocentricCoords {
            hour_angle,
            declination: dec,
            right_ascension: ra,
            distance,
        }
    }

    fn horizontal(&self, topo: &TopocentricCoords, observer: &Observer) -> Horizontal {
        let phi = observer.location.latitude_rad();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_dec, cos_dec) = topo.declination.sin_cos();
        let (sin_h, cos_h) = topo.hour_angle.sin_cos();

        let altitude = (sin_phi * sin_dec + cos_phi * cos_dec * cos_h)
            .clamp(-1.0, 1.0)
            .asin();
        let azimuth = (-cos_dec * sin_h)
            .atan2(sin_dec * cos_phi - cos_dec * cos_h * sin_phi)
            .rem_euclid(TAU);

        Horizontal { altitude, azimuth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEG2RAD;
    use crate::observer::GeodeticLocation;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ecliptic_of_date_round_trip() {
        let frames = StandardFrames::new();
        let instant = Instant::from_jd(2460000.5);
        let v = Cartesian3::new(0.3, -1.2, 0.01);

        let j2000 = frames.mean_of_date_to_j2000(
            frames.ecliptic_of_date_to_mean_of_date(v, &instant),
            &instant,
        );
        let back = frames.j2000_to_mean_of_date(j2000, &instant);
        let ecl = back.rotate(&rot_x(mean_obliquity(instant.centuries_since_j2000())));

        assert_abs_diff_eq!(ecl.x, v.x, epsilon = 1e-14);
        assert_abs_diff_eq!(ecl.y, v.y, epsilon = 1e-14);
        assert_abs_diff_eq!(ecl.z, v.z, epsilon = 1e-14);
    }

    #[test]
    fn test_galactic_round_trip() {
        let frames = StandardFrames::new();
        let v = Cartesian3::new(-2.0, 0.5, 0.75);
        let back = frames.galactic_to_j2000(frames.j2000_to_galactic(v));
        assert_abs_diff_eq!((back - v).magnitude(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_b1950_shifts_equinox() {
        let frames = StandardFrames::new();
        let (ra, dec, _) = frames
            .j2000_to_b1950(Cartesian3::new(1.0, 0.0, 0.0))
            .to_spherical();
        // The equinox drifts west, so the J2000 one sits 0.64° west of B1950
        assert_abs_diff_eq!(ra * RAD2DEG, 359.359_5, epsilon = 1e-3);
        assert_abs_diff_eq!(dec * RAD2DEG, -0.278_4, epsilon = 1e-3);
    }

    #[test]
    fn test_horizontal_meridian_transit() {
        let frames = StandardFrames::new();
        let observer = Observer::new(
            Instant::from_jd(2452805.0),
            GeodeticLocation::new(55.925, -3.1825, 0.0),
        );
        let topo = TopocentricCoords {
            hour_angle: 0.0,
            declination: 20.0 * DEG2RAD,
            right_ascension: 0.0,
            distance: 1.0,
        };
        let horizontal = frames.horizontal(&topo, &observer);
        assert_abs_diff_eq!(horizontal.altitude_degrees(), 90.0 - 55.925 + 20.0, epsilon = 1e-10);
        assert_abs_diff_eq!(horizontal.azimuth_degrees(), 180.0, epsilon = 1e-10);

        // Six hours west of the meridian, at the equator, a body on the
        // celestial equator sets due west
        let equator = Observer::new(observer.time, GeodeticLocation::new(0.0, 0.0, 0.0));
        let setting = TopocentricCoords {
            hour_angle: PI / 2.0,
            declination: 0.0,
            ..topo
        };
        let horizontal = frames.horizontal(&setting, &equator);
        assert_abs_diff_eq!(horizontal.altitude, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(horizontal.azimuth_degrees(), 270.0, epsilon = 1e-10);
    }

    #[test]
    fn test_topocentric_parallax_is_small_for_distant_bodies() {
        let frames = StandardFrames::new();
        let observer = Observer::new(
            Instant::from_jd(2452805.143_055_555),
            GeodeticLocation::new(55.925, -3.1825, 0.0),
        );
        let geo = GeocentricPosition::new(Cartesian3::from_spherical(1.4, 0.4, 30.0));
        let topo = frames.topocentric(&geo, &observer);

        assert_abs_diff_eq!(topo.distance, 30.0, epsilon = 1e-4);
        assert!(topo.hour_angle > -PI && topo.hour_angle <= PI);
        assert!((0.0..TAU).contains(&topo.right_ascension));
    }
}
