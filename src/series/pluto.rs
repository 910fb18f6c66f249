//! Pluto perturbation series
//!
//! Pluto has no VSOP87 solution. Its heliocentric position is instead a linear
//! motion plus 43 periodic terms in three fundamental arguments, the mean
//! longitudes of Jupiter (J), Saturn (S) and Pluto (P), each linear in Julian
//! centuries since J2000.0. The result is referred directly to the ecliptic
//! and equinox of J2000.0. Valid from 1885 to 2099.

use super::data::pluto::PLUTO_TERMS;
use super::SphericalEcliptic;
use crate::constants::DEG2RAD;
use crate::coordinates::cartesian::Cartesian3;

/// One periodic term: integer multipliers of (J, S, P) and a sine/cosine
/// coefficient pair for each of longitude, latitude and radius vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlutoTerm {
    pub multipliers: [i32; 3],
    /// 1e-6 degree
    pub longitude: [f64; 2],
    /// 1e-6 degree
    pub latitude: [f64; 2],
    /// 1e-7 AU
    pub radius: [f64; 2],
}

impl PlutoTerm {
    pub const fn new(
        multipliers: [i32; 3],
        longitude: [f64; 2],
        latitude: [f64; 2],
        radius: [f64; 2],
    ) -> Self {
        PlutoTerm {
            multipliers,
            longitude,
            latitude,
            radius,
        }
    }

    /// Argument `jJ + sS + pP` in degrees
    fn argument(&self, args: &FundamentalArguments) -> f64 {
        self.multipliers[0] as f64 * args.jupiter
            + self.multipliers[1] as f64 * args.saturn
            + self.multipliers[2] as f64 * args.pluto
    }
}

/// Mean longitudes in degrees
#[derive(Debug, Clone, Copy)]
struct FundamentalArguments {
    jupiter: f64,
    saturn: f64,
    pluto: f64,
}

impl FundamentalArguments {
    fn at(t: f64) -> Self {
        FundamentalArguments {
            jupiter: 34.35 + 3034.9057 * t,
            saturn: 50.08 + 1222.1138 * t,
            pluto: 238.96 + 144.96 * t,
        }
    }
}

#[inline]
fn periodic(coefficients: &[f64; 2], sin_a: f64, cos_a: f64) -> f64 {
    coefficients[0] * sin_a + coefficients[1] * cos_a
}

/// Heliocentric longitude, latitude (radians) and distance (AU) of Pluto,
/// ecliptic and equinox of J2000.0
///
/// `t` is Julian centuries of TT since J2000.0. The longitude is left in
/// [0, 2π) modulo whole turns of the linear term, not normalized.
pub fn pluto_lbr(t: f64) -> SphericalEcliptic {
    let args = FundamentalArguments::at(t);

    let (mut lon, mut lat, mut rad) = (0.0, 0.0, 0.0);
    for term in PLUTO_TERMS.iter() {
        let (sin_a, cos_a) = (term.argument(&args) * DEG2RAD).sin_cos();
        lon += periodic(&term.longitude, sin_a, cos_a);
        lat += periodic(&term.latitude, sin_a, cos_a);
        rad += periodic(&term.radius, sin_a, cos_a);
    }

    let longitude_deg = 238.958_116 + 144.96 * t + lon * 1e-6;
    let latitude_deg = -3.908_239 + lat * 1e-6;
    let radius = 40.724_134_6 + rad * 1e-7;

    SphericalEcliptic {
        longitude: longitude_deg.rem_euclid(360.0) * DEG2RAD,
        latitude: latitude_deg * DEG2RAD,
        radius,
    }
}

/// Rectangular heliocentric position of Pluto, ecliptic J2000, AU
pub fn pluto_ecliptic_j2000(t: f64) -> Cartesian3 {
    pluto_lbr(t).to_rectangular()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAD2DEG;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pluto_1992_october_13() {
        // Meeus, Astronomical Algorithms, example 37.a: 1992 October 13.0 TD
        let t = (2448908.5 - 2451545.0) / 36525.0;
        let lbr = pluto_lbr(t);

        assert_abs_diff_eq!(lbr.longitude * RAD2DEG, 232.740_09, epsilon = 2e-3);
        assert_abs_diff_eq!(lbr.latitude * RAD2DEG, 14.587_69, epsilon = 1e-3);
        assert_abs_diff_eq!(lbr.radius, 29.711_383, epsilon = 1e-3);
    }

    #[test]
    fn test_term_table_shape() {
        assert_eq!(PLUTO_TERMS.len(), 43);
        assert_eq!(PLUTO_TERMS[0].multipliers, [0, 0, 1]);
        assert!(PLUTO_TERMS.iter().all(|t| t.multipliers.iter().any(|&m| m != 0)));
    }

    #[test]
    fn test_distance_range_over_validity() {
        let mut t = -1.15;
        while t < 0.99 {
            let r = pluto_ecliptic_j2000(t).magnitude();
            assert!(r > 29.5 && r < 49.5, "r = {} at T = {}", r, t);
            t += 0.05;
        }
    }
}
