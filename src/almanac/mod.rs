//! Rise and set times
//!
//! [`RiseSetSolver`] finds the next instant a body crosses a given altitude.
//! It first iterates the spherical hour-angle formula, treating the body's
//! place as fixed at each guess. If the hour-angle formula has no solution it
//! scans forward in one-minute steps and interpolates the first crossing.
//!
//! The solver works on a clone of the body and copies of the observer, so
//! neither is disturbed by the search.

use crate::constants::{DEG2RAD, DAY_S, SIDEREAL_DAY, TAU};
use crate::framelib::{FrameTransform, TopocentricCoords};
use crate::observer::Observer;
use crate::planetlib::{Body, SunProvider};
use crate::positions::GeocentricPosition;
use crate::time::Instant;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlmanacError {
    /// The body never reaches the target altitude at this latitude
    #[error("{body} is circumpolar at latitude {latitude}° for altitude {target}°")]
    Circumpolar {
        body: String,
        latitude: f64,
        target: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiseSet {
    Rise,
    Set,
}

impl fmt::Display for RiseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiseSet::Rise => f.write_str("rise"),
            RiseSet::Set => f.write_str("set"),
        }
    }
}

/// Iteration limits of the solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Refinements of the hour-angle guess
    pub max_refinements: usize,
    /// Change between guesses, in days, below which the guess is accepted
    pub convergence_days: f64,
    /// Step of the fallback scan in days
    pub scan_step_days: f64,
    pub max_scan_steps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_refinements: 100,
            convergence_days: 0.01 / DAY_S,
            scan_step_days: 1.0 / 1440.0,
            max_scan_steps: 1999,
        }
    }
}

/// Anything that can be moved to an instant and placed in the sky
pub trait RiseSetTarget {
    fn name(&self) -> &str;

    /// Move to `instant`, given the Sun's geocentric position there
    fn update(&mut self, instant: Instant, sun: &GeocentricPosition);

    /// Geocentric J2000 position from the last update
    fn geocentric(&self) -> GeocentricPosition;

    /// Altitude in degrees of the last update as seen by `observer`
    fn horizontal_elevation(&self, frames: &dyn FrameTransform, observer: &Observer) -> f64 {
        let topo = frames.topocentric(&self.geocentric(), observer);
        frames.horizontal(&topo, observer).altitude_degrees()
    }
}

impl RiseSetTarget for Body {
    fn name(&self) -> &str {
        Body::name(self)
    }

    fn update(&mut self, instant: Instant, sun: &GeocentricPosition) {
        Body::update(self, instant, sun)
    }

    fn geocentric(&self) -> GeocentricPosition {
        Body::geocentric(self)
    }
}

/// Julian date at which a body with a fixed place reaches `target_deg`
///
/// `hour_angle` and `declination` are the body's topocentric place at `jd`,
/// in radians. The result is moved forward by whole sidereal days until it
/// is no earlier than `not_before`. Returns `None` when the altitude is never
/// reached.
pub fn naive_crossing(
    hour_angle: f64,
    declination: f64,
    latitude_deg: f64,
    target_deg: f64,
    event: RiseSet,
    jd: f64,
    not_before: f64,
) -> Option<f64> {
    let phi = latitude_deg * DEG2RAD;
    let denominator = phi.cos() * declination.cos();
    if denominator == 0.0 {
        return None;
    }

    let cos_h0 = ((target_deg * DEG2RAD).sin() - phi.sin() * declination.sin()) / denominator;
    if cos_h0.abs() >= 1.0 {
        return None;
    }

    let h0 = cos_h0.acos();
    let wanted = match event {
        RiseSet::Rise => -h0,
        RiseSet::Set => h0,
    };

    let mut delta = (wanted - hour_angle).rem_euclid(TAU);
    if delta > PI {
        delta -= TAU;
    }

    let mut guess = jd + delta / TAU * SIDEREAL_DAY;
    while guess < not_before {
        guess += SIDEREAL_DAY;
    }
    Some(guess)
}

/// Time at which the line through `(t0, h0)` and `(t1, h1)` reaches `target`
pub fn interpolate_crossing(t0: f64, h0: f64, t1: f64, h1: f64, target: f64) -> f64 {
    (t0 * (h1 - target) + t1 * (target - h0)) / (h1 - h0)
}

fn crosses(event: RiseSet, h0: f64, h1: f64, target: f64) -> bool {
    match event {
        RiseSet::Rise => h0 <= target && target < h1,
        RiseSet::Set => h0 >= target && target > h1,
    }
}

/// Rise and set search against a frame chain and a source of Sun positions
pub struct RiseSetSolver<'a> {
    frames: &'a dyn FrameTransform,
    sun: &'a dyn SunProvider,
    config: SolverConfig,
}

impl<'a> RiseSetSolver<'a> {
    pub fn new(frames: &'a dyn FrameTransform, sun: &'a dyn SunProvider) -> Self {
        RiseSetSolver {
            frames,
            sun,
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Next instant at or after `observer.time` when `body` crosses
    /// `target_deg` of altitude, rising or setting
    pub fn next_rise_set<B: RiseSetTarget + Clone>(
        &self,
        body: &B,
        observer: &Observer,
        target_deg: f64,
        event: RiseSet,
    ) -> Result<Instant, AlmanacError> {
        let mut scratch = body.clone();

        match self.iterate(&mut scratch, observer, target_deg, event) {
            Ok(found) => Ok(found),
            Err(_) => {
                debug!(
                    "{} {}: hour-angle iteration has no solution, scanning",
                    scratch.name(),
                    event
                );
                self.scan(&mut scratch, observer, target_deg, event)
            }
        }
    }

    /// Hour-angle iteration alone
    pub fn iterate<B: RiseSetTarget>(
        &self,
        scratch: &mut B,
        observer: &Observer,
        target_deg: f64,
        event: RiseSet,
    ) -> Result<Instant, AlmanacError> {
        let query = observer.time.jd();
        let mut guess = self.naive_step(scratch, observer, query, target_deg, event)?;

        for iteration in 1..=self.config.max_refinements {
            let at_guess = observer.at(Instant::from_jd(guess));
            let next = self.naive_step(scratch, &at_guess, query, target_deg, event)?;
            let change = (next - guess).abs();
            guess = next;
            if change < self.config.convergence_days {
                debug!(
                    "{} {} converged after {} refinements at JD {:.8}",
                    scratch.name(),
                    event,
                    iteration,
                    guess
                );
                return Ok(Instant::from_jd(guess));
            }
        }

        debug!(
            "{} {} not converged after {} refinements, using JD {:.8}",
            scratch.name(),
            event,
            self.config.max_refinements,
            guess
        );
        Ok(Instant::from_jd(guess))
    }

    /// Fixed-step scan alone, interpolating the first crossing found
    pub fn scan<B: RiseSetTarget>(
        &self,
        scratch: &mut B,
        observer: &Observer,
        target_deg: f64,
        event: RiseSet,
    ) -> Result<Instant, AlmanacError> {
        let step = self.config.scan_step_days;
        let mut t0 = observer.time;
        let mut h0 = self.elevation(scratch, &observer.at(t0));

        for index in 0..self.config.max_scan_steps {
            let t1 = t0 + step;
            let h1 = self.elevation(scratch, &observer.at(t1));
            if crosses(event, h0, h1, target_deg) {
                let jd = interpolate_crossing(t0.jd(), h0, t1.jd(), h1, target_deg);
                debug!("{} {} bracketed at scan step {}", scratch.name(), event, index);
                return Ok(Instant::from_jd(jd));
            }
            t0 = t1;
            h0 = h1;
        }

        debug!(
            "{} {}: no crossing in {} scan steps",
            scratch.name(),
            event,
            self.config.max_scan_steps
        );
        Err(self.circumpolar(scratch, observer, target_deg))
    }

    fn place<B: RiseSetTarget>(&self, scratch: &mut B, observer: &Observer) -> TopocentricCoords {
        let sun = self.sun.sun_position(&observer.time);
        scratch.update(observer.time, &sun);
        self.frames.topocentric(&scratch.geocentric(), observer)
    }

    fn elevation<B: RiseSetTarget>(&self, scratch: &mut B, observer: &Observer) -> f64 {
        let sun = self.sun.sun_position(&observer.time);
        scratch.update(observer.time, &sun);
        scratch.horizontal_elevation(self.frames, observer)
    }

    fn naive_step<B: RiseSetTarget>(
        &self,
        scratch: &mut B,
        observer: &Observer,
        not_before: f64,
        target_deg: f64,
        event: RiseSet,
    ) -> Result<f64, AlmanacError> {
        let topo = self.place(scratch, observer);
        naive_crossing(
            topo.hour_angle,
            topo.declination,
            observer.location.latitude,
            target_deg,
            event,
            observer.time.jd(),
            not_before,
        )
        .ok_or_else(|| self.circumpolar(scratch, observer, target_deg))
    }

    fn circumpolar<B: RiseSetTarget>(&self, body: &B, observer: &Observer, target_deg: f64) -> AlmanacError {
        AlmanacError::Circumpolar {
            body: body.name().to_string(),
            latitude: observer.location.latitude,
            target: target_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::cartesian::Cartesian3;
    use crate::framelib::StandardFrames;
    use crate::observer::GeodeticLocation;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    /// A body that never moves, far enough away to have no parallax
    #[derive(Debug, Clone)]
    struct FixedStar {
        geocentric: GeocentricPosition,
        updates: usize,
    }

    impl FixedStar {
        fn new(ra_deg: f64, dec_deg: f64) -> Self {
            FixedStar {
                geocentric: GeocentricPosition::new(Cartesian3::from_spherical(
                    ra_deg * DEG2RAD,
                    dec_deg * DEG2RAD,
                    1.0e6,
                )),
                updates: 0,
            }
        }
    }

    impl RiseSetTarget for FixedStar {
        fn name(&self) -> &str {
            "star"
        }

        fn update(&mut self, _instant: Instant, _sun: &GeocentricPosition) {
            self.updates += 1;
        }

        fn geocentric(&self) -> GeocentricPosition {
            self.geocentric
        }
    }

    /// A star whose place changes on every update: its right ascension
    /// advances by `ra_step` degrees, and on update number `polar_on` its
    /// declination jumps from 20° to 89°
    #[derive(Debug, Clone)]
    struct WanderingStar {
        ra_deg: f64,
        ra_step: f64,
        polar_on: Option<usize>,
        geocentric: GeocentricPosition,
        updates: usize,
    }

    impl WanderingStar {
        fn new(ra_deg: f64, ra_step: f64, polar_on: Option<usize>) -> Self {
            WanderingStar {
                ra_deg,
                ra_step,
                polar_on,
                geocentric: FixedStar::new(ra_deg, 20.0).geocentric,
                updates: 0,
            }
        }
    }

    impl RiseSetTarget for WanderingStar {
        fn name(&self) -> &str {
            "wanderer"
        }

        fn update(&mut self, _instant: Instant, _sun: &GeocentricPosition) {
            self.updates += 1;
            let dec = if self.polar_on == Some(self.updates) { 89.0 } else { 20.0 };
            let ra = self.ra_deg + self.ra_step * self.updates as f64;
            self.geocentric = FixedStar::new(ra, dec).geocentric;
        }

        fn geocentric(&self) -> GeocentricPosition {
            self.geocentric
        }
    }

    struct NoSun;

    impl SunProvider for NoSun {
        fn sun_position(&self, _instant: &Instant) -> GeocentricPosition {
            GeocentricPosition::new(Cartesian3::new(1.0, 0.0, 0.0))
        }
    }

    fn edinburgh(jd: f64) -> Observer {
        Observer::new(Instant::from_jd(jd), GeodeticLocation::new(55.925, -3.1825, 0.0))
    }

    #[test]
    fn test_naive_crossing_on_the_equator() {
        // A body on the celestial equator at the meridian sets a quarter of a
        // sidereal day later and rose a quarter day before
        let set = naive_crossing(0.0, 0.0, 0.0, 0.0, RiseSet::Set, 100.0, 100.0).unwrap();
        assert_abs_diff_eq!(set, 100.0 + SIDEREAL_DAY / 4.0, epsilon = 1e-12);

        let rise = naive_crossing(0.0, 0.0, 0.0, 0.0, RiseSet::Rise, 100.0, 100.0).unwrap();
        assert_abs_diff_eq!(rise, 100.0 + 0.75 * SIDEREAL_DAY, epsilon = 1e-12);
    }

    #[test]
    fn test_naive_crossing_circumpolar() {
        assert_eq!(naive_crossing(0.0, 80.0 * DEG2RAD, 60.0, 0.0, RiseSet::Set, 0.0, 0.0), None);
        assert_eq!(naive_crossing(0.0, -80.0 * DEG2RAD, 60.0, 0.0, RiseSet::Rise, 0.0, 0.0), None);
    }

    #[test]
    fn test_interpolate_crossing() {
        assert_abs_diff_eq!(interpolate_crossing(10.0, -1.0, 11.0, 3.0, 0.0), 10.25, epsilon = 1e-12);
        assert_abs_diff_eq!(interpolate_crossing(10.0, 2.0, 11.0, -2.0, 1.0), 10.25, epsilon = 1e-12);
    }

    #[test]
    fn test_solver_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.max_refinements, 100);
        assert_eq!(config.max_scan_steps, 1999);
        assert_abs_diff_eq!(config.convergence_days * DAY_S, 0.01, epsilon = 1e-15);
        assert_abs_diff_eq!(config.scan_step_days * 1440.0, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{"max_scan_steps": 10}"#).unwrap();
        assert_eq!(config.max_scan_steps, 10);
        assert_eq!(config.max_refinements, 100);
    }

    #[rstest]
    #[case(RiseSet::Rise)]
    #[case(RiseSet::Set)]
    fn test_fixed_star_reaches_target(#[case] event: RiseSet) {
        let frames = StandardFrames::new();
        let solver = RiseSetSolver::new(&frames, &NoSun);
        let star = FixedStar::new(101.0, 20.0);
        let observer = edinburgh(2452805.143_055_555);

        let found = solver.next_rise_set(&star, &observer, -0.5667, event).unwrap();
        assert!(found >= observer.time);
        assert!(found - observer.time < SIDEREAL_DAY + 1e-6);

        let mut scratch = star.clone();
        let elevation = solver.elevation(&mut scratch, &observer.at(found));
        assert_abs_diff_eq!(elevation, -0.5667, epsilon = 1e-5);
        // The caller's body is untouched
        assert_eq!(star.updates, 0);
    }

    #[test]
    fn test_scan_agrees_with_iteration() {
        let frames = StandardFrames::new();
        let solver = RiseSetSolver::new(&frames, &NoSun);
        let star = FixedStar::new(250.0, -10.0);
        let observer = edinburgh(2452805.0);

        let iterated = solver.iterate(&mut star.clone(), &observer, 0.0, RiseSet::Set).unwrap();
        let scanned = solver.scan(&mut star.clone(), &observer, 0.0, RiseSet::Set).unwrap();
        assert_abs_diff_eq!(iterated.jd(), scanned.jd(), epsilon = 1.0 / DAY_S);
    }

    #[test]
    fn test_circumpolar_star() {
        let frames = StandardFrames::new();
        let solver = RiseSetSolver::new(&frames, &NoSun);
        let star = FixedStar::new(30.0, 80.0);
        let observer = edinburgh(2452805.0);

        let result = solver.next_rise_set(&star, &observer, -0.8333, RiseSet::Set);
        assert!(matches!(
            result,
            Err(AlmanacError::Circumpolar { ref body, .. }) if body == "star"
        ));
    }

    #[test]
    fn test_circumpolar_refinement_falls_back_to_scan() {
        let frames = StandardFrames::new();
        let solver = RiseSetSolver::new(&frames, &NoSun);
        let observer = edinburgh(2452805.143_055_555);
        let star = WanderingStar::new(101.0, 0.0, Some(2));

        // The first guess has a solution, the first refinement does not
        let mut scratch = star.clone();
        let iterated = solver.iterate(&mut scratch, &observer, -0.8333, RiseSet::Rise);
        assert!(matches!(iterated, Err(AlmanacError::Circumpolar { .. })));
        assert_eq!(scratch.updates, 2);

        // From the third update on the star sits at declination 20° again
        let found = solver.next_rise_set(&star, &observer, -0.8333, RiseSet::Rise).unwrap();
        let scanned = solver
            .scan(&mut FixedStar::new(101.0, 20.0), &observer, -0.8333, RiseSet::Rise)
            .unwrap();
        assert_abs_diff_eq!(found.jd(), scanned.jd(), epsilon = 1e-9);
        assert!(found >= observer.time);
        assert_eq!(star.updates, 0);
    }

    #[test]
    fn test_unconverged_iteration_returns_last_guess() {
        let frames = StandardFrames::new();
        let observer = edinburgh(2452805.0);

        // A zero tolerance never converges; one refinement means two updates
        let strict = SolverConfig {
            max_refinements: 1,
            convergence_days: 0.0,
            ..SolverConfig::default()
        };
        let solver = RiseSetSolver::new(&frames, &NoSun).with_config(strict);
        let mut star = FixedStar::new(101.0, 20.0);
        let found = solver.iterate(&mut star, &observer, -0.8333, RiseSet::Rise).unwrap();
        assert_eq!(star.updates, 2);
        assert!(found >= observer.time);
        let elevation = solver.elevation(&mut star, &observer.at(found));
        assert_abs_diff_eq!(elevation, -0.8333, epsilon = 1e-5);

        // A degree of drift per update moves each guess by about four
        // minutes, so the last guess is the rise of the final place
        let limited = SolverConfig {
            max_refinements: 3,
            ..SolverConfig::default()
        };
        let solver = RiseSetSolver::new(&frames, &NoSun).with_config(limited);
        let mut drifting = WanderingStar::new(101.0, 1.0, None);
        let found = solver.iterate(&mut drifting, &observer, -0.8333, RiseSet::Rise).unwrap();
        assert_eq!(drifting.updates, 4);

        let settled = solver
            .iterate(&mut FixedStar::new(105.0, 20.0), &observer, -0.8333, RiseSet::Rise)
            .unwrap();
        assert_abs_diff_eq!(found.jd(), settled.jd(), epsilon = 1.0 / DAY_S);
    }

    #[test]
    fn test_short_scan_exhausts() {
        let frames = StandardFrames::new();
        let config = SolverConfig {
            max_scan_steps: 3,
            ..SolverConfig::default()
        };
        let solver = RiseSetSolver::new(&frames, &NoSun).with_config(config);
        let star = FixedStar::new(0.0, 0.0);
        let observer = edinburgh(2452805.0);

        // 89° is out of reach at this latitude
        assert!(solver.scan(&mut star.clone(), &observer, 89.0, RiseSet::Rise).is_err());
    }
}
