//! The Sun over Edinburgh on 2003-06-14 at 15:26 UT

use approx::assert_abs_diff_eq;
use planetfield::constants::DAY_S;
use planetfield::{
    AlmanacError, Ephemeris, GeodeticLocation, Instant, Observer, Planet, RiseSet, SunProvider,
};

const TARGET: f64 = -0.8333;

fn edinburgh() -> Observer {
    Observer::new(
        Instant::from_calendar(2003, 6, 14, 15, 26, 0.0),
        GeodeticLocation::new(55.925, -3.1825, 0.0),
    )
}

#[test]
fn test_apparent_place() {
    let ephemeris = Ephemeris::new();
    let observer = edinburgh();
    let mut sun = ephemeris.body(Planet::Sun);
    ephemeris.update(&mut sun, observer.time);

    let frames = ephemeris.frames();
    let topo = frames.topocentric(&sun.geocentric(), &observer);
    let horizontal = frames.horizontal(&topo, &observer);

    assert_abs_diff_eq!(topo.right_ascension.to_degrees() / 15.0, 5.504_07, epsilon = 2e-5);
    assert_abs_diff_eq!(topo.declination.to_degrees(), 23.262_3, epsilon = 2e-4);
    assert_abs_diff_eq!(horizontal.altitude_degrees(), 42.047_58, epsilon = 5e-4);
    assert_abs_diff_eq!(horizontal.azimuth_degrees(), 247.411_09, epsilon = 5e-4);
}

#[test]
fn test_sunset_and_sunrise() {
    let ephemeris = Ephemeris::new();
    let observer = edinburgh();
    let sun = ephemeris.body(Planet::Sun);

    let set = ephemeris
        .next_rise_set(&sun, &observer, TARGET, RiseSet::Set)
        .unwrap();
    // 20:59:26 UT
    assert_abs_diff_eq!(set.jd(), 2452805.374_602, epsilon = 2.0 / DAY_S);

    let rise = ephemeris
        .next_rise_set(&sun, &observer, TARGET, RiseSet::Rise)
        .unwrap();
    // 03:26:27 UT on the 15th
    assert_abs_diff_eq!(rise.jd(), 2452805.643_373, epsilon = 2.0 / DAY_S);

    assert!(set >= observer.time && rise > set);
    // The search leaves the caller's body alone
    assert_eq!(sun.epoch(), None);
}

#[test]
fn test_scan_matches_iteration() {
    let ephemeris = Ephemeris::new();
    let observer = edinburgh();
    let sun = ephemeris.body(Planet::Sun);
    let solver = ephemeris.solver();

    let iterated = solver
        .iterate(&mut sun.clone(), &observer, TARGET, RiseSet::Set)
        .unwrap();
    let scanned = solver
        .scan(&mut sun.clone(), &observer, TARGET, RiseSet::Set)
        .unwrap();

    assert_abs_diff_eq!(scanned.jd(), 2452805.374_602_4, epsilon = 0.5 / DAY_S);
    assert_abs_diff_eq!(scanned.jd(), iterated.jd(), epsilon = 0.5 / DAY_S);
}

#[test]
fn test_midnight_sun_is_circumpolar() {
    let ephemeris = Ephemeris::new();
    let observer = Observer::new(edinburgh().time, GeodeticLocation::new(80.0, -3.1825, 0.0));
    let sun = ephemeris.body(Planet::Sun);

    for event in [RiseSet::Rise, RiseSet::Set] {
        let err = ephemeris
            .next_rise_set(&sun, &observer, TARGET, event)
            .unwrap_err();
        let AlmanacError::Circumpolar { body, latitude, .. } = err;
        assert_eq!(body, "Sun");
        assert_eq!(latitude, 80.0);
    }
}

#[test]
fn test_sun_geocentric_distance() {
    let ephemeris = Ephemeris::new();
    let sun = ephemeris.sun_position(&edinburgh().time);
    assert_abs_diff_eq!(sun.distance(), 1.015_662_3, epsilon = 1e-6);
}
