//! Physical constants of the Sun, planets and Pluto
//!
//! Radii, pole directions and prime-meridian rates follow the IAU working
//! group on cartographic coordinates and rotational elements (2000 report).
//! Pole right ascension and declination are J2000 equatorial, in degrees, as
//! functions of Julian centuries `t` since J2000.0; prime-meridian angles are
//! in degrees as functions of days `d` since J2000.0.

use super::Planet;
use crate::constants::DEG2RAD;

/// Direction of the north pole of rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoleModel {
    /// Right ascension and declination linear in `t`
    Linear {
        ra: [f64; 2],
        dec: [f64; 2],
    },
    /// Neptune's pole, which circles with the argument N = 357.85° + 52.316° t
    Neptune,
}

/// Neptune's auxiliary pole argument N in radians
pub fn neptune_argument(t: f64) -> f64 {
    (357.85 + 52.316 * t) * DEG2RAD
}

impl PoleModel {
    const fn fixed(ra: f64, dec: f64) -> Self {
        PoleModel::Linear {
            ra: [ra, 0.0],
            dec: [dec, 0.0],
        }
    }

    /// Pole right ascension and declination in degrees
    pub fn pole(&self, t: f64) -> (f64, f64) {
        match self {
            PoleModel::Linear { ra, dec } => (ra[0] + ra[1] * t, dec[0] + dec[1] * t),
            PoleModel::Neptune => {
                let n = neptune_argument(t);
                (299.36 + 0.70 * n.sin(), 43.46 - 0.51 * n.cos())
            }
        }
    }
}

/// Sense of rotation as seen from the north pole of the invariable plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationSense {
    Direct,
    Retrograde,
}

/// Longitude systems for bodies whose surface features rotate at
/// different rates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationSystem {
    I,
    II,
    III,
}

impl RotationSystem {
    pub fn index(&self) -> usize {
        match self {
            RotationSystem::I => 0,
            RotationSystem::II => 1,
            RotationSystem::III => 2,
        }
    }
}

/// Prime meridian `W = w0 + rate·d + sin_n·sin N` in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationModel {
    pub system: RotationSystem,
    pub w0: f64,
    /// Degrees per day, negative for retrograde rotators
    pub rate: f64,
    /// Coefficient of sin N (Neptune only)
    pub sin_n: f64,
}

impl RotationModel {
    const fn new(system: RotationSystem, w0: f64, rate: f64) -> Self {
        RotationModel {
            system,
            w0,
            rate,
            sin_n: 0.0,
        }
    }

    /// Prime-meridian angle in degrees, normalized to (−180°, 180°]
    pub fn meridian(&self, d: f64, t: f64) -> f64 {
        let w = self.w0 + self.rate * d + self.sin_n * neptune_argument(t).sin();
        let w = w.rem_euclid(360.0);
        if w > 180.0 {
            w - 360.0
        } else {
            w
        }
    }
}

/// Visual magnitude law
///
/// Every law adds `5 log₁₀(rΔ)` to its base except [`Photometry::Solar`],
/// which has no heliocentric distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Photometry {
    /// `V(1,0) + c₁x + c₂x² + c₃x³` with x the phase angle in units of 100°
    PhasePolynomial { base: f64, coefficients: [f64; 3] },
    /// Saturn with its rings: `V(1,0) − 2.60 sin|B| + 1.25 sin²B`, B the
    /// planetocentric declination of the Earth
    Ringed { base: f64 },
    /// `V(1,0) − 2.5 log₁₀ k` with k the illuminated fraction
    IlluminatedFraction { base: f64 },
    /// The Sun: `V + 5 log₁₀Δ − 2.5 log₁₀ k`
    Solar { base: f64 },
}

/// Everything about a body that does not change with time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Equatorial radius in km
    pub radius_km: f64,
    pub pole: PoleModel,
    pub sense: RotationSense,
    pub rotation: &'static [RotationModel],
    pub photometry: Photometry,
}

use RotationSystem::{I, II, III};

static SUN_ROTATION: [RotationModel; 1] = [RotationModel::new(I, 84.176, 14.184_400_0)];
static MERCURY_ROTATION: [RotationModel; 1] = [RotationModel::new(I, 329.5469, 6.138_502_5)];
static VENUS_ROTATION: [RotationModel; 1] = [RotationModel::new(I, 160.20, -1.481_368_8)];
static MARS_ROTATION: [RotationModel; 1] = [RotationModel::new(I, 176.630, 350.891_982_26)];
static JUPITER_ROTATION: [RotationModel; 3] = [
    RotationModel::new(I, 67.1, 877.900),
    RotationModel::new(II, 43.3, 870.270),
    RotationModel::new(III, 284.95, 870.536_642_0),
];
static SATURN_ROTATION: [RotationModel; 2] = [
    RotationModel::new(I, 227.2037, 844.3),
    RotationModel::new(III, 38.90, 810.793_902_4),
];
static URANUS_ROTATION: [RotationModel; 1] = [RotationModel::new(III, 203.81, -501.160_092_8)];
static NEPTUNE_ROTATION: [RotationModel; 1] = [RotationModel {
    system: III,
    w0: 253.18,
    rate: 536.312_849_2,
    sin_n: -0.48,
}];
static PLUTO_ROTATION: [RotationModel; 1] = [RotationModel::new(I, 236.77, -56.362_319_5)];

impl PhysicalConstants {
    /// Constants for a body
    pub fn of(planet: Planet) -> PhysicalConstants {
        match planet {
            Planet::Sun => PhysicalConstants {
                radius_km: 696_000.0,
                pole: PoleModel::fixed(286.13, 63.87),
                sense: RotationSense::Direct,
                rotation: &SUN_ROTATION,
                photometry: Photometry::Solar { base: -26.74 },
            },
            Planet::Mercury => PhysicalConstants {
                radius_km: 2_439.7,
                pole: PoleModel::Linear {
                    ra: [281.0097, -0.0328],
                    dec: [61.4143, -0.0049],
                },
                sense: RotationSense::Direct,
                rotation: &MERCURY_ROTATION,
                photometry: Photometry::PhasePolynomial {
                    base: -0.42,
                    coefficients: [3.80, -2.73, 2.00],
                },
            },
            Planet::Venus => PhysicalConstants {
                radius_km: 6_051.8,
                pole: PoleModel::fixed(272.76, 67.16),
                sense: RotationSense::Retrograde,
                rotation: &VENUS_ROTATION,
                photometry: Photometry::PhasePolynomial {
                    base: -4.40,
                    coefficients: [0.09, 2.39, -0.65],
                },
            },
            Planet::Mars => PhysicalConstants {
                radius_km: 3_396.19,
                pole: PoleModel::Linear {
                    ra: [317.681_43, -0.1061],
                    dec: [52.886_50, -0.0609],
                },
                sense: RotationSense::Direct,
                rotation: &MARS_ROTATION,
                photometry: Photometry::PhasePolynomial {
                    base: -1.52,
                    coefficients: [1.60, 0.0, 0.0],
                },
            },
            Planet::Jupiter => PhysicalConstants {
                radius_km: 71_492.0,
                pole: PoleModel::Linear {
                    ra: [268.05, -0.009],
                    dec: [64.49, 0.003],
                },
                sense: RotationSense::Direct,
                rotation: &JUPITER_ROTATION,
                photometry: Photometry::PhasePolynomial {
                    base: -9.40,
                    coefficients: [0.50, 0.0, 0.0],
                },
            },
            Planet::Saturn => PhysicalConstants {
                radius_km: 60_268.0,
                pole: PoleModel::Linear {
                    ra: [40.589, -0.036],
                    dec: [83.537, -0.004],
                },
                sense: RotationSense::Direct,
                rotation: &SATURN_ROTATION,
                photometry: Photometry::Ringed { base: -8.88 },
            },
            Planet::Uranus => PhysicalConstants {
                radius_km: 25_559.0,
                pole: PoleModel::fixed(257.311, -15.175),
                sense: RotationSense::Retrograde,
                rotation: &URANUS_ROTATION,
                photometry: Photometry::PhasePolynomial {
                    base: -7.19,
                    coefficients: [0.28, 0.0, 0.0],
                },
            },
            Planet::Neptune => PhysicalConstants {
                radius_km: 24_764.0,
                pole: PoleModel::Neptune,
                sense: RotationSense::Direct,
                rotation: &NEPTUNE_ROTATION,
                photometry: Photometry::IlluminatedFraction { base: -6.87 },
            },
            Planet::Pluto => PhysicalConstants {
                radius_km: 1_195.0,
                pole: PoleModel::fixed(313.02, 9.09),
                sense: RotationSense::Retrograde,
                rotation: &PLUTO_ROTATION,
                photometry: Photometry::PhasePolynomial {
                    base: -1.00,
                    coefficients: [4.1, 0.0, 0.0],
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Planet::Venus)]
    #[case(Planet::Uranus)]
    #[case(Planet::Pluto)]
    fn test_retrograde_rotators_spin_backwards(#[case] planet: Planet) {
        let constants = PhysicalConstants::of(planet);
        assert_eq!(constants.sense, RotationSense::Retrograde);
        assert!(constants.rotation.iter().all(|r| r.rate < 0.0));
    }

    #[test]
    fn test_meridian_range() {
        for planet in Planet::all_targets() {
            for model in PhysicalConstants::of(*planet).rotation {
                let mut d = -5000.0;
                while d < 5000.0 {
                    let w = model.meridian(d, d / 36525.0);
                    assert!(w > -180.0 && w <= 180.0, "{:?} W = {}", planet, w);
                    d += 123.456;
                }
            }
        }
    }

    #[test]
    fn test_neptune_pole_at_j2000() {
        let (ra, dec) = PoleModel::Neptune.pole(0.0);
        let n = 357.85f64.to_radians();
        assert_abs_diff_eq!(ra, 299.36 + 0.70 * n.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(dec, 43.46 - 0.51 * n.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_system_slots_are_distinct() {
        for planet in Planet::all_targets() {
            let rotation = PhysicalConstants::of(*planet).rotation;
            let mut seen = [false; 3];
            for model in rotation {
                assert!(!seen[model.system.index()], "{:?}", planet);
                seen[model.system.index()] = true;
            }
        }
        assert_eq!(PhysicalConstants::of(Planet::Jupiter).rotation.len(), 3);
    }
}
