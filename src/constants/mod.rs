//! Constants module for solar-system position calculations

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in meters (per IAU 2012 Resolution B2)
pub const AU_M: f64 = 149_597_870_700.0;
/// Astronomical Unit in kilometers
pub const AU_KM: f64 = 149_597_870.700;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// B1950 epoch as Julian date
pub const B1950: f64 = 2_433_282.423_5;
/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// Days in a Julian millennium, the time unit of the VSOP87 series
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;
/// Length of the mean sidereal day in solar days
pub const SIDEREAL_DAY: f64 = 0.997_269_566_34;

// Angles
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = 4.848_136_811_095_36e-6;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Physics
/// Speed of light in m/s
pub const C: f64 = 299_792_458.0;
/// Speed of light in AU/day
pub const C_AUDAY: f64 = C * DAY_S / AU_M;
/// Constant of annual aberration in arcseconds
pub const ABERRATION_ASEC: f64 = 20.495_52;

// Earth constants (IAU 1976 reference ellipsoid)
/// Earth's equatorial radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6_378.140;
/// Inverse flattening of the Earth ellipsoid
pub const EARTH_INVERSE_FLATTENING: f64 = 298.257;
/// Obliquity of the ecliptic at J2000 in degrees
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_light_speed_in_au_per_day() {
        // Light crosses one AU in about 499 seconds
        assert_relative_eq!(DAY_S / C_AUDAY, 499.004_783_8, epsilon = 1e-6);
    }

    #[test]
    fn test_sidereal_day_seconds() {
        assert_relative_eq!(SIDEREAL_DAY * DAY_S, 86_164.090_5, epsilon = 1e-3);
    }
}
