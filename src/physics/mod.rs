//! Physical ephemeris: apparent size, phase, brightness and orientation
//!
//! Everything here is derived from a body's light-time corrected geocentric
//! vector, the Sun's geocentric vector and the body's fixed constants.
//! Orientation angles follow the standard spherical-trigonometry reductions
//! (Meeus, Astronomical Algorithms, ch. 42 and 43) applied to the IAU pole and
//! prime-meridian models.

use crate::constants::{AU_KM, RAD2DEG, TAU};
use crate::coordinates::cartesian::Cartesian3;
use crate::planetlib::{Body, Photometry, PhysicalConstants, RotationSense};
use crate::positions::GeocentricPosition;
use crate::time::Instant;
use serde::Serialize;

/// Appearance of a body at one instant
///
/// Angles are radians unless noted. Elongation and phase angle carry the sign
/// of `sun.y·geo.x − sun.x·geo.y`, which in the J2000 frame is negative when
/// the body is east of the Sun (an evening object).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalEphemeris {
    pub body: &'static str,
    /// Visual magnitude
    pub magnitude: f64,
    /// Apparent equatorial semi-diameter
    pub angular_radius: f64,
    pub elongation: f64,
    pub phase_angle: f64,
    /// Illuminated fraction of the disk, 0 to 1
    pub illuminated_fraction: f64,
    /// Planetocentric declination of the Earth
    pub axis_inclination: f64,
    /// Position angle of the north pole, [0, 2π)
    pub position_angle: f64,
    /// Central meridian longitude in degrees for rotation systems I, II and
    /// III; `None` where the body has no such system
    pub central_meridian: [Option<f64>; 3],
    /// AU
    pub geocentric_distance: f64,
    /// AU
    pub heliocentric_distance: f64,
}

impl PhysicalEphemeris {
    pub fn angular_diameter_arcsec(&self) -> f64 {
        2.0 * self.angular_radius * RAD2DEG * 3600.0
    }
}

/// Elongation and phase angle, both negative when `sun.y·geo.x − sun.x·geo.y`
/// is negative, i.e. when the body lies east of the Sun in right ascension
pub fn elongation_and_phase(geo: &Cartesian3, sun: &Cartesian3) -> (f64, f64) {
    let heliocentric = *geo - *sun;
    let elongation = geo.angle_between(sun);
    let phase = geo.angle_between(&heliocentric);

    if sun.y * geo.x - sun.x * geo.y < 0.0 {
        (-elongation, -phase)
    } else {
        (elongation, phase)
    }
}

/// Orientation of a rotating body relative to the line of sight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Planetocentric declination of the Earth, radians
    pub inclination: f64,
    /// Position angle of the pole, radians in [0, 2π)
    pub position_angle: f64,
    /// Auxiliary angle K (longitude of the sub-Earth point relative to the
    /// node of the equator on the sky plane), radians
    pub k: f64,
}

/// Orientation from the pole (α₀, δ₀) and the body's apparent (α, δ),
/// all in radians
pub fn orientation(pole_ra: f64, pole_dec: f64, ra: f64, dec: f64) -> Orientation {
    let (sin_d0, cos_d0) = pole_dec.sin_cos();
    let (sin_d, cos_d) = dec.sin_cos();
    let (sin_da, cos_da) = (pole_ra - ra).sin_cos();

    let inclination = (-sin_d0 * sin_d - cos_d0 * cos_d * cos_da)
        .clamp(-1.0, 1.0)
        .asin();
    let position_angle = (cos_d0 * sin_da)
        .atan2(sin_d0 * cos_d - cos_d0 * sin_d * cos_da)
        .rem_euclid(TAU);
    let k = (-cos_d0 * sin_d + sin_d0 * cos_d * cos_da).atan2(cos_d * sin_da);

    Orientation {
        inclination,
        position_angle,
        k,
    }
}

/// Central meridian in degrees, [0°, 360°)
pub fn central_meridian(w_deg: f64, k: f64, sense: RotationSense) -> f64 {
    let k_deg = k * RAD2DEG;
    match sense {
        RotationSense::Direct => (w_deg - k_deg).rem_euclid(360.0),
        RotationSense::Retrograde => (k_deg - w_deg).rem_euclid(360.0),
    }
}

/// Visual magnitude from a photometric law
///
/// `r` and `delta` are heliocentric and geocentric distances in AU, `phase`
/// and `inclination` radians, `k` the illuminated fraction.
pub fn magnitude(
    photometry: &Photometry,
    r: f64,
    delta: f64,
    phase: f64,
    k: f64,
    inclination: f64,
) -> f64 {
    let x = phase.abs() * RAD2DEG / 100.0;
    match *photometry {
        Photometry::PhasePolynomial { base, coefficients } => {
            let [c1, c2, c3] = coefficients;
            base + 5.0 * (r * delta).log10() + x * (c1 + x * (c2 + x * c3))
        }
        Photometry::Ringed { base } => {
            let sin_b = inclination.sin();
            base + 5.0 * (r * delta).log10() - 2.60 * sin_b.abs() + 1.25 * sin_b * sin_b
        }
        Photometry::IlluminatedFraction { base } => {
            base + 5.0 * (r * delta).log10() - 2.5 * k.log10()
        }
        Photometry::Solar { base } => base + 5.0 * delta.log10() - 2.5 * k.log10(),
    }
}

/// Physical ephemeris from the state left by the body's last update
///
/// `instant` must be the instant of that update; the prime meridian is taken
/// at the retarded time `d + light_time`.
pub fn physical_ephemeris(
    body: &Body,
    instant: &Instant,
    sun: &GeocentricPosition,
) -> PhysicalEphemeris {
    let constants: &PhysicalConstants = body.constants();
    let geo = body.geocentric().vector();
    let delta = geo.magnitude();
    let r = body.heliocentric().distance();

    let (elongation, phase_angle) = elongation_and_phase(&geo, &sun.vector());
    let illuminated_fraction = (1.0 + phase_angle.cos()) / 2.0;
    let angular_radius = (constants.radius_km / AU_KM / delta).min(1.0).asin();

    let t = instant.centuries_since_j2000();
    let d = instant.days_since_j2000() + body.light_time();

    let (pole_ra, pole_dec) = constants.pole.pole(t);
    let (ra, dec) = body.geocentric().radec();
    let orient = orientation(pole_ra.to_radians(), pole_dec.to_radians(), ra, dec);

    let mut meridians = [None; 3];
    for model in constants.rotation {
        let w = model.meridian(d, t);
        meridians[model.system.index()] = Some(central_meridian(w, orient.k, constants.sense));
    }

    PhysicalEphemeris {
        body: body.name(),
        magnitude: magnitude(
            &constants.photometry,
            r,
            delta,
            phase_angle,
            illuminated_fraction,
            orient.inclination,
        ),
        angular_radius,
        elongation,
        phase_angle,
        illuminated_fraction,
        axis_inclination: orient.inclination,
        position_angle: orient.position_angle,
        central_meridian: meridians,
        geocentric_distance: delta,
        heliocentric_distance: r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEG2RAD;
    use crate::planetlib::{Ephemeris, Planet, SunProvider};
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_elongation_sign() {
        // Sun at RA 0h
        let sun = Cartesian3::new(1.0, 0.0, 0.0);

        // RA 18h, west of the Sun
        let west = Cartesian3::new(0.0, -1.0, 0.0);
        let (elong, phase) = elongation_and_phase(&west, &sun);
        assert_abs_diff_eq!(elong, 90.0 * DEG2RAD, epsilon = 1e-12);
        assert_abs_diff_eq!(phase, 45.0 * DEG2RAD, epsilon = 1e-12);

        // RA 6h, east of the Sun
        let east = Cartesian3::new(0.0, 1.0, 0.0);
        let (elong, phase) = elongation_and_phase(&east, &sun);
        assert_abs_diff_eq!(elong, -90.0 * DEG2RAD, epsilon = 1e-12);
        assert_abs_diff_eq!(phase, -45.0 * DEG2RAD, epsilon = 1e-12);
    }

    #[test]
    fn test_venus_evening_elongation_is_negative() {
        // 1992 December 20: Venus an evening object, 44.8° east of the Sun
        let ephemeris = Ephemeris::new();
        let mut venus = ephemeris.body(Planet::Venus);
        let physics = ephemeris.physics(&mut venus, Instant::from_jde(2448976.5));

        assert_abs_diff_eq!(physics.elongation * RAD2DEG, -44.76, epsilon = 0.05);
        assert_abs_diff_eq!(physics.phase_angle * RAD2DEG, -72.96, epsilon = 0.05);
        assert_abs_diff_eq!(physics.illuminated_fraction, 0.647, epsilon = 0.002);
    }

    #[test]
    fn test_full_phase_at_superior_conjunction() {
        let sun = Cartesian3::new(1.0, 0.0, 0.0);
        let behind = Cartesian3::new(1.4, 0.0, 0.0);
        let (elong, phase) = elongation_and_phase(&behind, &sun);
        assert_eq!(elong, 0.0);
        assert_eq!(phase, 0.0);
    }

    #[test]
    fn test_mercury_magnitude_at_zero_phase() {
        let mercury = PhysicalConstants::of(Planet::Mercury);
        let (r, delta) = (0.4, 1.3);
        let m = magnitude(&mercury.photometry, r, delta, 0.0, 1.0, 0.0);
        assert_abs_diff_eq!(m, -0.42 + 5.0 * r.log10() + 5.0 * delta.log10(), epsilon = 1e-12);
    }

    #[rstest]
    #[case(Planet::Venus, 0.7, 0.5, 50.0)]
    #[case(Planet::Mars, 1.5, 0.8, 30.0)]
    #[case(Planet::Jupiter, 5.2, 4.5, 10.0)]
    fn test_magnitude_fades_with_phase(
        #[case] planet: Planet,
        #[case] r: f64,
        #[case] delta: f64,
        #[case] phase_deg: f64,
    ) {
        let law = PhysicalConstants::of(planet).photometry;
        let full = magnitude(&law, r, delta, 0.0, 1.0, 0.0);
        let partial = magnitude(&law, r, delta, phase_deg * DEG2RAD, 0.9, 0.0);
        assert!(partial > full);
    }

    #[test]
    fn test_sun_at_one_au() {
        let law = PhysicalConstants::of(Planet::Sun).photometry;
        assert_abs_diff_eq!(magnitude(&law, 0.0, 1.0, 0.0, 1.0, 0.0), -26.74, epsilon = 1e-12);
    }

    #[test]
    fn test_saturn_rings_brighten() {
        let law = PhysicalConstants::of(Planet::Saturn).photometry;
        let edge_on = magnitude(&law, 9.5, 8.5, 0.0, 1.0, 0.0);
        let open = magnitude(&law, 9.5, 8.5, 0.0, 1.0, 26.0 * DEG2RAD);
        assert!(open < edge_on);
    }

    #[test]
    fn test_orientation_pole_on() {
        // Body seen opposite its own pole: the Earth lies over the north pole
        let o = orientation(0.3, 0.2, 0.3 + std::f64::consts::PI, -0.2);
        assert_abs_diff_eq!(o.inclination, std::f64::consts::FRAC_PI_2, epsilon = 1e-7);
    }

    #[test]
    fn test_central_meridian_sense() {
        assert_abs_diff_eq!(central_meridian(100.0, 30.0 * DEG2RAD, RotationSense::Direct), 70.0, epsilon = 1e-12);
        assert_abs_diff_eq!(central_meridian(100.0, 30.0 * DEG2RAD, RotationSense::Retrograde), 290.0, epsilon = 1e-12);
        assert_abs_diff_eq!(central_meridian(-170.0, 30.0 * DEG2RAD, RotationSense::Direct), 160.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sun_physics() {
        let ephemeris = Ephemeris::new();
        let instant = Instant::from_calendar(2003, 6, 14, 15, 26, 0.0);
        let mut sun_body = ephemeris.body(Planet::Sun);
        let sun = ephemeris.sun_position(&instant);
        let physics = sun_body.physics(instant, &sun);

        assert_eq!(physics.phase_angle, 0.0);
        assert_abs_diff_eq!(physics.elongation, 0.0, epsilon = 1e-6);
        assert_eq!(physics.illuminated_fraction, 1.0);
        // Semi-diameter near aphelion is about 15.8′
        assert_abs_diff_eq!(physics.angular_radius * RAD2DEG * 60.0, 15.75, epsilon = 0.1);
        assert!(physics.central_meridian[0].is_some());
        assert_eq!(physics.central_meridian[1], None);
    }

    #[test]
    fn test_jupiter_has_three_systems() {
        let ephemeris = Ephemeris::new();
        let mut jupiter = ephemeris.body(Planet::Jupiter);
        let physics = ephemeris.physics(&mut jupiter, Instant::from_jd(2452805.0));
        for cm in physics.central_meridian {
            let cm = cm.expect("Jupiter reports systems I, II and III");
            assert!((0.0..360.0).contains(&cm));
        }
        assert!(physics.illuminated_fraction > 0.98);
    }
}
