//! Periodic series evaluation for heliocentric planetary positions
//!
//! Each heliocentric quantity (longitude L, latitude B, radius vector R) is a
//! polynomial of degree five in τ, the Julian millennia of TT since J2000.0.
//! The coefficient of τʲ is itself a sum of periodic terms
//!
//! ```text
//! Sⱼ(τ) = Σ Aᵢ cos(Bᵢ + Cᵢ τ)
//! ```
//!
//! so that `L = (S₀ + S₁τ + S₂τ² + ... + S₅τ⁵) / 1e8`. Coefficients are stored
//! as the published VSOP87D tables (heliocentric, ecliptic and equinox of
//! date), truncated per body, in [`data`].

pub mod data;
pub mod pluto;

pub use data::earth::EARTH;
pub use data::jupiter::JUPITER;
pub use data::mars::MARS;
pub use data::mercury::MERCURY;
pub use data::neptune::NEPTUNE;
pub use data::saturn::SATURN;
pub use data::uranus::URANUS;
pub use data::venus::VENUS;

use crate::coordinates::cartesian::Cartesian3;
use std::f64::consts::PI;

/// Scale of the tabulated amplitudes
const AMPLITUDE_SCALE: f64 = 1.0e8;

/// A single periodic term `A cos(B + C τ)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// Amplitude, in 1e-8 radian or 1e-8 AU
    pub amplitude: f64,
    /// Phase in radians
    pub phase: f64,
    /// Frequency in radians per Julian millennium
    pub frequency: f64,
}

impl Term {
    pub const fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Term {
            amplitude,
            phase,
            frequency,
        }
    }

    /// Value of the term at τ
    #[inline]
    pub fn value(&self, tau: f64) -> f64 {
        self.amplitude * (self.phase + self.frequency * tau).cos()
    }
}

/// The three heliocentric quantities a series yields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Longitude,
    Latitude,
    Radius,
}

/// Periodic terms of one polynomial order, largest amplitude first
pub type TermSet = &'static [Term];

/// Full series for one body: six term sets per quantity, orders 0 through 5
///
/// Empty sets are allowed and contribute nothing.
#[derive(Debug)]
pub struct VsopSeries {
    pub name: &'static str,
    pub longitude: [TermSet; 6],
    pub latitude: [TermSet; 6],
    pub radius: [TermSet; 6],
}

/// Heliocentric spherical coordinates, ecliptic and equinox of date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalEcliptic {
    /// Longitude in radians, in (−π, π]
    pub longitude: f64,
    /// Latitude in radians
    pub latitude: f64,
    /// Radius vector in AU
    pub radius: f64,
}

impl SphericalEcliptic {
    /// Rectangular coordinates: `(R cosL cosB, R sinL cosB, R sinB)`
    pub fn to_rectangular(&self) -> Cartesian3 {
        Cartesian3::from_spherical(self.longitude, self.latitude, self.radius)
    }
}

/// Sum a term set at τ, smallest terms first
///
/// Tables list terms by descending amplitude; they are accumulated in
/// reverse.
pub fn evaluate_term_set(terms: &[Term], tau: f64) -> f64 {
    terms.iter().rev().map(|term| term.value(tau)).sum()
}

/// Evaluate the polynomial `Σ τʲ Sⱼ(τ)` by Horner's method, unscaled
pub fn evaluate_polynomial(orders: &[&[Term]; 6], tau: f64) -> f64 {
    orders
        .iter()
        .rev()
        .fold(0.0, |acc, terms| acc * tau + evaluate_term_set(terms, tau))
}

/// Normalize an angle in radians to (−π, π]
pub fn normalize_longitude(angle: f64) -> f64 {
    let wrapped = angle.sin().atan2(angle.cos());
    // atan2 returns −π for a negative-zero sine; fold it onto +π
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}

impl VsopSeries {
    fn orders(&self, quantity: Quantity) -> &[TermSet; 6] {
        match quantity {
            Quantity::Longitude => &self.longitude,
            Quantity::Latitude => &self.latitude,
            Quantity::Radius => &self.radius,
        }
    }

    /// Scaled value of one quantity at τ, before any normalization
    ///
    /// Radians for longitude and latitude, AU for the radius vector.
    pub fn evaluate(&self, quantity: Quantity, tau: f64) -> f64 {
        evaluate_polynomial(self.orders(quantity), tau) / AMPLITUDE_SCALE
    }

    /// Heliocentric L, B, R at τ with the longitude normalized to (−π, π]
    pub fn lbr(&self, tau: f64) -> SphericalEcliptic {
        SphericalEcliptic {
            longitude: normalize_longitude(self.evaluate(Quantity::Longitude, tau)),
            latitude: self.evaluate(Quantity::Latitude, tau),
            radius: self.evaluate(Quantity::Radius, tau),
        }
    }

    /// Rectangular heliocentric position in the ecliptic of date, AU
    pub fn ecliptic_of_date(&self, tau: f64) -> Cartesian3 {
        self.lbr(tau).to_rectangular()
    }

    /// Total number of periodic terms carried
    pub fn term_count(&self) -> usize {
        [&self.longitude, &self.latitude, &self.radius]
            .iter()
            .flat_map(|orders| orders.iter())
            .map(|terms| terms.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rstest::rstest;

    const RAD2DEG: f64 = 180.0 / PI;

    // 1992 October 13.0 TD
    const TAU_1992_OCT_13: f64 = (2448908.5 - 2451545.0) / 365250.0;

    #[test]
    fn test_earth_reference_values() {
        let tau = TAU_1992_OCT_13;
        let l = EARTH.evaluate(Quantity::Longitude, tau);
        let b = EARTH.evaluate(Quantity::Latitude, tau);
        let r = EARTH.evaluate(Quantity::Radius, tau);

        assert_relative_eq!(l, -43.634_847_96, epsilon = 1e-7);
        assert_relative_eq!(b, -0.000_003_12, epsilon = 1e-7);
        assert_relative_eq!(r, 0.997_607_75, epsilon = 1e-7);

        let lbr = EARTH.lbr(tau);
        assert_relative_eq!(lbr.longitude.to_degrees().rem_euclid(360.0), 19.907_372, epsilon = 1e-5);
    }

    #[test]
    fn test_venus_reference_values() {
        // 1992 December 20.0 TD
        let tau = (2448976.5 - 2451545.0) / 365250.0;
        let lbr = VENUS.lbr(tau);

        assert_relative_eq!(lbr.longitude * RAD2DEG, 26.114_28, epsilon = 1e-3);
        assert_relative_eq!(lbr.latitude * RAD2DEG, -2.620_70, epsilon = 1e-3);
        assert_relative_eq!(lbr.radius, 0.724_603, epsilon = 1e-5);
    }

    #[rstest]
    #[case(&MERCURY, 0.30, 0.47)]
    #[case(&VENUS, 0.717, 0.73)]
    #[case(&EARTH, 0.98, 1.02)]
    #[case(&MARS, 1.37, 1.67)]
    #[case(&JUPITER, 4.9, 5.5)]
    #[case(&SATURN, 8.9, 10.2)]
    #[case(&URANUS, 18.2, 20.2)]
    #[case(&NEPTUNE, 29.7, 30.5)]
    fn test_radius_stays_within_orbit(
        #[case] series: &VsopSeries,
        #[case] perihelion: f64,
        #[case] aphelion: f64,
    ) {
        for year in (1900..=2100).step_by(7) {
            let tau = (year as f64 - 2000.0) / 1000.0;
            let lbr = series.lbr(tau);
            assert!(
                lbr.radius > perihelion && lbr.radius < aphelion,
                "{} radius {} out of range in {}",
                series.name,
                lbr.radius,
                year
            );
        }
    }

    #[test]
    fn test_longitude_normalized() {
        let mut tau = -0.3;
        while tau < 0.3 {
            for series in [&MERCURY, &EARTH, &JUPITER, &NEPTUNE] {
                let l = series.lbr(tau).longitude;
                assert!(l > -PI && l <= PI, "{} longitude {} at {}", series.name, l, tau);
            }
            tau += 0.0137;
        }
        assert_eq!(normalize_longitude(PI), PI);
        assert_eq!(normalize_longitude(-PI), PI);
        assert_relative_eq!(normalize_longitude(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_summation_order_invariant() {
        let tau = 0.0123;
        let mut rng = StdRng::seed_from_u64(87);

        for terms in EARTH.longitude.iter().chain(JUPITER.radius.iter()) {
            let reference = evaluate_term_set(terms, tau);
            let mut shuffled = terms.to_vec();
            for _ in 0..5 {
                shuffled.shuffle(&mut rng);
                let value = evaluate_term_set(&shuffled, tau);
                assert_relative_eq!(value, reference, epsilon = 1e-6, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_terminating_zero_term_contributes_nothing() {
        static ZERO: [Term; 1] = [Term::new(0.0, 0.0, 0.0)];
        assert_eq!(evaluate_term_set(&ZERO, 0.5), 0.0);
        assert_eq!(evaluate_term_set(&[], 0.5), 0.0);

        let empty = VsopSeries {
            name: "Empty",
            longitude: [&ZERO, &[], &[], &[], &[], &[]],
            latitude: [&[], &[], &[], &[], &[], &[]],
            radius: [&ZERO; 6],
        };
        assert_eq!(empty.evaluate(Quantity::Longitude, 0.2), 0.0);
        assert_eq!(empty.evaluate(Quantity::Radius, -0.7), 0.0);
    }

    #[test]
    fn test_horner_matches_power_sum() {
        let tau: f64 = -0.0721;
        let direct: f64 = MARS
            .longitude
            .iter()
            .enumerate()
            .map(|(j, terms)| tau.powi(j as i32) * evaluate_term_set(terms, tau))
            .sum();
        assert_relative_eq!(
            evaluate_polynomial(&MARS.longitude, tau),
            direct,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_rectangular_conversion() {
        let lbr = EARTH.lbr(TAU_1992_OCT_13);
        let rect = lbr.to_rectangular();
        assert_relative_eq!(rect.magnitude(), lbr.radius, epsilon = 1e-14);
        assert_relative_eq!(rect.z, lbr.radius * lbr.latitude.sin(), epsilon = 1e-15);
    }

    #[test]
    fn test_every_body_has_terms() {
        for series in [&MERCURY, &VENUS, &EARTH, &MARS, &JUPITER, &SATURN, &URANUS, &NEPTUNE] {
            assert!(series.term_count() > 50, "{}", series.name);
            assert!(!series.longitude[0].is_empty());
            assert!(!series.radius[0].is_empty());
        }
    }
}
