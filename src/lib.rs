//! Planetfield: positions, rise/set times and physical ephemerides of the Sun,
//! the major planets and Pluto
//!
//! Heliocentric positions come from the VSOP87D series (Pluto from its own
//! perturbation series) and are carried in J2000 equatorial coordinates.
//! Every [`Body`] is updated with a single light-time pass; the
//! [`almanac`] solver and the [`physics`] calculator build on that update.
//!
//! ```no_run
//! use planetfield::{Ephemeris, GeodeticLocation, Instant, Observer, Planet, RiseSet};
//!
//! let ephemeris = Ephemeris::new();
//! let instant = Instant::parse("2003-06-14T15:26:00").unwrap();
//! let observer = Observer::new(instant, GeodeticLocation::new(55.925, -3.1825, 0.0));
//!
//! let sun = ephemeris.body(Planet::Sun);
//! let set = ephemeris.next_rise_set(&sun, &observer, -0.8333, RiseSet::Set).unwrap();
//! println!("sunset at {}", set);
//! ```

use thiserror::Error;

pub mod almanac;
pub mod constants;
pub mod coordinates;
pub mod framelib;
pub mod observer;
pub mod physics;
pub mod planetlib;
pub mod positions;
pub mod series;
pub mod time;

// Re-export commonly used types
pub use almanac::{AlmanacError, RiseSet, RiseSetSolver, SolverConfig};
pub use framelib::{FrameTransform, StandardFrames};
pub use observer::{GeodeticLocation, Observer};
pub use physics::PhysicalEphemeris;
pub use planetlib::{Body, Ephemeris, Planet, PlanetError, SunProvider};
pub use positions::{GeocentricPosition, HeliocentricPosition};
pub use time::{CalendarTuple, Instant, TimeError};

/// Main error type for the planetfield library
#[derive(Debug, Error)]
pub enum PlanetfieldError {
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    #[error("Almanac error: {0}")]
    Almanac(#[from] AlmanacError),

    #[error("{0}")]
    Planet(#[from] PlanetError),
}

/// Result type for planetfield operations
pub type Result<T> = std::result::Result<T, PlanetfieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_convert() {
        fn lookup(name: &str) -> Result<Planet> {
            Ok(name.parse::<Planet>()?)
        }

        let err = lookup("Vulcan").unwrap_err();
        assert!(matches!(err, PlanetfieldError::Planet(PlanetError::NotFound(_))));
        assert_eq!(err.to_string(), "Planet not found: Vulcan");

        let err: PlanetfieldError = Instant::parse("not a date").unwrap_err().into();
        assert!(err.to_string().starts_with("Time error"));
    }
}
