//! Solar-system bodies and their positions
//!
//! A [`Body`] couples a position model (VSOP87 series, Pluto's perturbation
//! series, or the Sun at the heliocentric origin) with its physical constants
//! and the state left behind by its last [`Body::update`].

pub mod ephemeris;
pub mod physical;

pub use ephemeris::{Ephemeris, SunProvider};
pub use physical::{
    Photometry, PhysicalConstants, PoleModel, RotationModel, RotationSense, RotationSystem,
};

use crate::almanac::{AlmanacError, RiseSet, RiseSetSolver};
use crate::coordinates::cartesian::Cartesian3;
use crate::framelib::inertial::EC_TO_EQ;
use crate::framelib::{FrameTransform, StandardFrames};
use crate::observer::Observer;
use crate::physics::{physical_ephemeris, PhysicalEphemeris};
use crate::positions::{GeocentricPosition, HeliocentricPosition};
use crate::series::pluto::pluto_ecliptic_j2000;
use crate::series::{self, VsopSeries};
use crate::time::Instant;
use log::trace;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Error type for planetary calculations
#[derive(Debug, Error)]
pub enum PlanetError {
    #[error("Planet not found: {0}")]
    NotFound(String),
}

/// The bodies a position can be computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

const ALL_TARGETS: [Planet; 9] = [
    Planet::Sun,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

impl Planet {
    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    pub fn all_targets() -> &'static [Planet] {
        &ALL_TARGETS
    }

    /// How this body's heliocentric position is computed
    pub fn position_model(&self) -> PositionModel {
        match self {
            Planet::Sun => PositionModel::Solar,
            Planet::Mercury => PositionModel::Series(&series::MERCURY),
            Planet::Venus => PositionModel::Series(&series::VENUS),
            Planet::Mars => PositionModel::Series(&series::MARS),
            Planet::Jupiter => PositionModel::Series(&series::JUPITER),
            Planet::Saturn => PositionModel::Series(&series::SATURN),
            Planet::Uranus => PositionModel::Series(&series::URANUS),
            Planet::Neptune => PositionModel::Series(&series::NEPTUNE),
            Planet::Pluto => PositionModel::Perturbation,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = PlanetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_TARGETS
            .iter()
            .copied()
            .find(|planet| planet.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlanetError::NotFound(wanted.to_string()))
    }
}

/// Source of a body's heliocentric position
#[derive(Debug, Clone, Copy)]
pub enum PositionModel {
    /// The Sun, at the heliocentric origin
    Solar,
    /// VSOP87 series in the ecliptic of date
    Series(&'static VsopSeries),
    /// Pluto's perturbation series in the ecliptic of J2000
    Perturbation,
}

impl PositionModel {
    /// Heliocentric J2000 equatorial position at an instant (evaluated on TT)
    pub fn heliocentric(&self, frames: &dyn FrameTransform, instant: &Instant) -> HeliocentricPosition {
        match self {
            PositionModel::Solar => HeliocentricPosition::origin(),
            PositionModel::Series(series) => {
                let ecliptic = series.ecliptic_of_date(instant.millennia_since_j2000());
                let mean_of_date = frames.ecliptic_of_date_to_mean_of_date(ecliptic, instant);
                HeliocentricPosition::new(frames.mean_of_date_to_j2000(mean_of_date, instant))
            }
            PositionModel::Perturbation => {
                let ecliptic = pluto_ecliptic_j2000(instant.centuries_since_j2000());
                HeliocentricPosition::new(ecliptic.rotate(&EC_TO_EQ))
            }
        }
    }
}

/// A solar-system body and its most recent position
///
/// The position fields are scratch state: every call to [`Body::update`]
/// overwrites them. Clone a body to search in time without disturbing it.
#[derive(Debug, Clone)]
pub struct Body {
    planet: Planet,
    model: PositionModel,
    constants: PhysicalConstants,
    frames: Arc<dyn FrameTransform>,
    geocentric: GeocentricPosition,
    heliocentric: HeliocentricPosition,
    light_time: f64,
    epoch: Option<Instant>,
}

impl Body {
    /// A body using the standard frame chain
    pub fn new(planet: Planet) -> Self {
        Self::with_frames(planet, Arc::new(StandardFrames::new()))
    }

    pub fn with_frames(planet: Planet, frames: Arc<dyn FrameTransform>) -> Self {
        Body {
            planet,
            model: planet.position_model(),
            constants: PhysicalConstants::of(planet),
            frames,
            geocentric: GeocentricPosition::new(Cartesian3::zero()),
            heliocentric: HeliocentricPosition::origin(),
            light_time: 0.0,
            epoch: None,
        }
    }

    pub fn planet(&self) -> Planet {
        self.planet
    }

    pub fn name(&self) -> &'static str {
        self.planet.name()
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn frames(&self) -> &dyn FrameTransform {
        self.frames.as_ref()
    }

    /// Geometric heliocentric position at an instant, no light time
    pub fn heliocentric_at(&self, instant: &Instant) -> HeliocentricPosition {
        self.model.heliocentric(self.frames.as_ref(), instant)
    }

    /// Recompute the light-time corrected geocentric position
    ///
    /// The body is placed at `instant`, shifted by the Sun's geocentric
    /// position, and the resulting distance gives the light time. The body is
    /// then placed again at the retarded instant and shifted by the same,
    /// unretarded Sun vector. One pass only; the retarded time is not refined.
    pub fn update(&mut self, instant: Instant, sun: &GeocentricPosition) {
        let first_pass = self.heliocentric_at(&instant).to_geocentric(sun);
        let light_time = first_pass.light_time();

        let retarded = self.heliocentric_at(&(instant + light_time));

        self.heliocentric = retarded;
        self.geocentric = retarded.to_geocentric(sun);
        self.light_time = light_time;
        self.epoch = Some(instant);

        trace!(
            "{} updated at JDE {:.6}: distance {:.9} AU, light time {:.9} d",
            self.name(),
            instant.jde(),
            self.geocentric.distance(),
            light_time
        );
    }

    /// Light-time corrected geocentric position from the last update
    pub fn geocentric(&self) -> GeocentricPosition {
        self.geocentric
    }

    /// Heliocentric position at the retarded time of the last update
    pub fn heliocentric(&self) -> HeliocentricPosition {
        self.heliocentric
    }

    /// Light time of the last update in days (negative)
    pub fn light_time(&self) -> f64 {
        self.light_time
    }

    /// Instant of the last update
    pub fn epoch(&self) -> Option<Instant> {
        self.epoch
    }

    /// Update to `instant` and derive the physical ephemeris
    pub fn physics(&mut self, instant: Instant, sun: &GeocentricPosition) -> PhysicalEphemeris {
        self.update(instant, sun);
        physical_ephemeris(self, &instant, sun)
    }

    /// Next time after the observer's instant that this body crosses
    /// `target_deg` of altitude
    pub fn next_rise_set(
        &self,
        solver: &RiseSetSolver<'_>,
        observer: &Observer,
        target_deg: f64,
        event: RiseSet,
    ) -> Result<Instant, AlmanacError> {
        solver.next_rise_set(self, observer, target_deg, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::C_AUDAY;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_planet_from_str() {
        assert_eq!("mars".parse::<Planet>().unwrap(), Planet::Mars);
        assert_eq!(" JUPITER ".parse::<Planet>().unwrap(), Planet::Jupiter);
        assert_eq!("Sun".parse::<Planet>().unwrap(), Planet::Sun);
        assert!(matches!("Vulcan".parse::<Planet>(), Err(PlanetError::NotFound(_))));
    }

    #[test]
    fn test_all_targets_unique() {
        let names: Vec<_> = Planet::all_targets().iter().map(|p| p.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
    }

    #[test]
    fn test_sun_is_at_heliocentric_origin() {
        let mut sun_body = Body::new(Planet::Sun);
        let sun = GeocentricPosition::new(Cartesian3::new(0.25, -0.875, -0.375));
        sun_body.update(Instant::from_jd(2452805.0), &sun);

        assert_eq!(sun_body.heliocentric(), HeliocentricPosition::origin());
        assert_eq!(sun_body.geocentric(), sun);
        assert_relative_eq!(sun_body.light_time(), -sun.distance() / C_AUDAY, epsilon = 1e-15);
    }

    #[rstest]
    #[case(Planet::Mercury)]
    #[case(Planet::Mars)]
    #[case(Planet::Saturn)]
    #[case(Planet::Pluto)]
    fn test_update_is_single_pass(#[case] planet: Planet) {
        let ephemeris = Ephemeris::new();
        let instant = Instant::from_jd(2452805.143_055_555);
        let sun = ephemeris.sun_position(&instant);
        let mut body = ephemeris.body(planet);
        body.update(instant, &sun);

        let first = body.heliocentric_at(&instant).to_geocentric(&sun);
        assert_eq!(body.light_time(), first.light_time());

        let expected = body
            .heliocentric_at(&(instant + first.light_time()))
            .to_geocentric(&sun);
        assert_eq!(body.geocentric(), expected);
        assert_eq!(body.epoch(), Some(instant));
    }

    #[test]
    fn test_update_overwrites_state() {
        let ephemeris = Ephemeris::new();
        let mut body = ephemeris.body(Planet::Venus);
        let t1 = Instant::from_jd(2452805.0);
        let t2 = t1 + 40.0;

        ephemeris.update(&mut body, t1);
        let first = body.geocentric();
        ephemeris.update(&mut body, t2);

        assert_ne!(body.geocentric(), first);
        assert_eq!(body.epoch(), Some(t2));
    }

    #[test]
    fn test_pluto_uses_fixed_obliquity() {
        let body = Body::new(Planet::Pluto);
        let instant = Instant::from_jde(2448908.5);
        let helio = body.heliocentric_at(&instant).vector();
        let ecliptic = pluto_ecliptic_j2000(instant.centuries_since_j2000());

        assert_relative_eq!(helio.magnitude(), ecliptic.magnitude(), epsilon = 1e-12);
        assert_relative_eq!(helio.x, ecliptic.x, epsilon = 1e-12);
    }
}
