//! Light-time corrected positions and physical ephemerides of the planets

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstest::rstest;

use planetfield::physics::magnitude;
use planetfield::planetlib::PhysicalConstants;
use planetfield::{Ephemeris, Instant, Planet, SunProvider};

fn edinburgh_instant() -> Instant {
    Instant::from_calendar(2003, 6, 14, 15, 26, 0.0)
}

#[rstest]
#[case(Planet::Mercury, 1.036_898, -0.005_989_5)]
#[case(Planet::Venus, 1.621_54, -0.009_365_7)]
#[case(Planet::Mars, 0.661_37, -0.003_819_9)]
#[case(Planet::Jupiter, 5.921_61, -0.034_200_2)]
#[case(Planet::Saturn, 10.035_1, -0.057_958)]
#[case(Planet::Uranus, 19.649_3, -0.113_485)]
#[case(Planet::Neptune, 29.414_4, -0.169_883)]
fn test_light_time_reference(#[case] planet: Planet, #[case] distance: f64, #[case] light_time: f64) {
    let ephemeris = Ephemeris::new();
    let mut body = ephemeris.body(planet);
    ephemeris.update(&mut body, edinburgh_instant());

    assert_relative_eq!(body.geocentric().distance(), distance, max_relative = 1e-5);
    assert_relative_eq!(body.light_time(), light_time, max_relative = 1e-4);
}

#[test]
fn test_light_time_is_single_pass_for_every_body() {
    let ephemeris = Ephemeris::new();
    let instant = edinburgh_instant();
    let sun = ephemeris.sun_position(&instant);

    for planet in Planet::all_targets() {
        let mut body = ephemeris.body(*planet);
        body.update(instant, &sun);

        let first = body.heliocentric_at(&instant).to_geocentric(&sun);
        assert_eq!(body.light_time(), first.light_time(), "{}", planet);

        let retarded = body.heliocentric_at(&(instant + first.light_time()));
        assert_eq!(body.heliocentric(), retarded, "{}", planet);
        assert_eq!(body.geocentric(), retarded.to_geocentric(&sun), "{}", planet);
    }
}

#[test]
fn test_mars_physical_ephemeris() {
    // Meeus example 42.a: 1992 November 9, 0h TD
    let ephemeris = Ephemeris::new();
    let instant = Instant::from_jd(2448935.5 - 59.0 / 86400.0);
    let mut mars = ephemeris.body(Planet::Mars);
    let physics = ephemeris.physics(&mut mars, instant);

    assert_abs_diff_eq!(physics.axis_inclination.to_degrees(), 12.44, epsilon = 0.02);
    assert_abs_diff_eq!(physics.position_angle.to_degrees(), 347.66, epsilon = 0.08);
    assert_abs_diff_eq!(physics.illuminated_fraction, 0.9012, epsilon = 3e-4);
    assert_abs_diff_eq!(physics.angular_diameter_arcsec(), 10.76, epsilon = 0.03);

    let cm = physics.central_meridian[0].unwrap();
    assert_abs_diff_eq!(cm, 111.4, epsilon = 0.3);
    assert_eq!(physics.central_meridian[1], None);
}

#[test]
fn test_mercury_magnitude_at_full_phase() {
    let ephemeris = Ephemeris::new();
    let mut mercury = ephemeris.body(Planet::Mercury);
    let physics = ephemeris.physics(&mut mercury, edinburgh_instant());

    let r = physics.heliocentric_distance;
    let delta = physics.geocentric_distance;
    let law = PhysicalConstants::of(Planet::Mercury).photometry;

    assert_abs_diff_eq!(
        magnitude(&law, r, delta, 0.0, 1.0, 0.0),
        -0.42 + 5.0 * r.log10() + 5.0 * delta.log10(),
        epsilon = 1e-12
    );
    // Any phase angle dims Mercury
    assert!(physics.magnitude > magnitude(&law, r, delta, 0.0, 1.0, 0.0));
}

#[rstest]
#[case(Planet::Venus)]
#[case(Planet::Uranus)]
#[case(Planet::Pluto)]
fn test_central_meridian_in_range(#[case] planet: Planet) {
    let ephemeris = Ephemeris::new();
    let mut body = ephemeris.body(planet);
    let physics = ephemeris.physics(&mut body, edinburgh_instant());

    let slots: Vec<_> = physics.central_meridian.iter().flatten().collect();
    assert_eq!(slots.len(), 1);
    assert!((0.0..360.0).contains(slots[0]));
    assert!(physics.magnitude.is_finite());
}
