//! Sun position provider and convenience facade

use super::{Body, Planet, PositionModel};
use crate::almanac::{AlmanacError, RiseSet, RiseSetSolver};
use crate::framelib::{FrameTransform, StandardFrames};
use crate::observer::Observer;
use crate::physics::PhysicalEphemeris;
use crate::positions::{GeocentricPosition, HeliocentricPosition};
use crate::series::EARTH;
use crate::time::Instant;
use std::sync::Arc;

/// Supplies the Sun's geocentric position, J2000 equatorial, AU
pub trait SunProvider {
    fn sun_position(&self, instant: &Instant) -> GeocentricPosition;
}

/// Positions from the analytic series, sharing one frame chain
///
/// The Sun's geocentric position is the negated heliocentric position of the
/// Earth, taken from the Earth series without light-time correction.
#[derive(Debug, Clone)]
pub struct Ephemeris {
    frames: Arc<dyn FrameTransform>,
}

impl Ephemeris {
    pub fn new() -> Self {
        Self::with_frames(Arc::new(StandardFrames::new()))
    }

    pub fn with_frames(frames: Arc<dyn FrameTransform>) -> Self {
        Ephemeris { frames }
    }

    pub fn frames(&self) -> &dyn FrameTransform {
        self.frames.as_ref()
    }

    /// A fresh body sharing this ephemeris' frame chain
    pub fn body(&self, planet: Planet) -> Body {
        Body::with_frames(planet, Arc::clone(&self.frames))
    }

    /// Heliocentric position of the Earth's centre
    pub fn earth_heliocentric(&self, instant: &Instant) -> HeliocentricPosition {
        PositionModel::Series(&EARTH).heliocentric(self.frames.as_ref(), instant)
    }

    /// Update a body to `instant` using this ephemeris' Sun
    pub fn update(&self, body: &mut Body, instant: Instant) {
        let sun = self.sun_position(&instant);
        body.update(instant, &sun);
    }

    pub fn physics(&self, body: &mut Body, instant: Instant) -> PhysicalEphemeris {
        let sun = self.sun_position(&instant);
        body.physics(instant, &sun)
    }

    /// A rise/set solver over this ephemeris with the default configuration
    pub fn solver(&self) -> RiseSetSolver<'_> {
        RiseSetSolver::new(self.frames.as_ref(), self)
    }

    pub fn next_rise_set(
        &self,
        body: &Body,
        observer: &Observer,
        target_deg: f64,
        event: RiseSet,
    ) -> Result<Instant, AlmanacError> {
        body.next_rise_set(&self.solver(), observer, target_deg, event)
    }
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl SunProvider for Ephemeris {
    fn sun_position(&self, instant: &Instant) -> GeocentricPosition {
        GeocentricPosition::new(-self.earth_heliocentric(instant).vector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAD2DEG;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sun_distance_through_the_year() {
        let ephemeris = Ephemeris::new();
        let start = Instant::from_calendar(2003, 1, 1, 0, 0, 0.0);
        for day in (0..365).step_by(5) {
            let distance = ephemeris.sun_position(&(start + day as f64)).distance();
            assert!(distance > 0.982 && distance < 1.018, "{} AU on day {}", distance, day);
        }
    }

    #[test]
    fn test_sun_edinburgh_reference() {
        // 2003-06-14T15:26 UT
        let ephemeris = Ephemeris::new();
        let instant = Instant::from_calendar(2003, 6, 14, 15, 26, 0.0);
        let (ra_hours, dec) = ephemeris.sun_position(&instant).radec_hours_degrees();

        // Geometric J2000 place; the apparent place of date is 5.5041h, 23.262°
        assert_abs_diff_eq!(ra_hours, 5.501_36, epsilon = 1e-4);
        assert_abs_diff_eq!(dec, 23.260_62, epsilon = 1e-3);
        assert_abs_diff_eq!(ephemeris.sun_position(&instant).distance(), 1.015_662, epsilon = 1e-5);
    }

    #[test]
    fn test_sun_ecliptic_latitude_is_tiny() {
        let ephemeris = Ephemeris::new();
        let instant = Instant::from_jd(2448908.5);
        let ecliptic = ephemeris
            .frames()
            .j2000_to_ecliptic_j2000(ephemeris.sun_position(&instant).vector());
        let (_, lat, _) = ecliptic.to_spherical();
        assert!((lat * RAD2DEG).abs() < 0.01);
    }

    #[test]
    fn test_bodies_share_frames() {
        let ephemeris = Ephemeris::new();
        let mut mars = ephemeris.body(Planet::Mars);
        let instant = Instant::from_jd(2452805.0);
        ephemeris.update(&mut mars, instant);
        assert!(mars.geocentric().distance() > 0.3);
        assert_eq!(mars.epoch(), Some(instant));
    }
}
