//! # Cartesian Coordinate System Module
//!
//! This module provides the 3D Cartesian vector that every position in the
//! crate is carried in. Heliocentric and geocentric positions, observer
//! offsets and aberration corrections are all `Cartesian3` values measured in
//! astronomical units.
//!
//! ## Coordinate System Convention
//!
//! The axes follow whichever frame the vector is expressed in:
//! - **Ecliptic frames**: X toward the equinox, Z toward the ecliptic pole
//! - **Equatorial frames**: X toward the equinox, Z toward the celestial pole
//!
//! The vector itself carries no frame tag; the position newtypes in
//! [`crate::positions`] document which frame their vectors live in.
//!
//! ## Examples
//!
//! ```rust
//! use planetfield::coordinates::cartesian::Cartesian3;
//!
//! let earth_to_sun = Cartesian3::new(-0.98, 0.17, 0.0);
//! let sun_to_earth = -earth_to_sun;
//! assert_eq!(sun_to_earth.x, 0.98);
//! assert!((earth_to_sun.magnitude() - sun_to_earth.magnitude()).abs() < 1e-15);
//! ```

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Three-dimensional Cartesian vector
///
/// Represents a point or direction in 3D space. Components are stored as
/// given, with no implicit normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component (toward the equinox)
    pub x: f64,
    /// Y-component (90° east of the equinox in the fundamental plane)
    pub y: f64,
    /// Z-component (toward the pole of the fundamental plane)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planetfield::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 0.0, 0.0);
    /// assert_eq!(coord.x, 1.0);
    /// assert_eq!(coord.y, 0.0);
    /// assert_eq!(coord.z, 0.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Cartesian3::new(0.0, 0.0, 0.0)
    }

    /// Creates a Cartesian vector from spherical coordinates
    ///
    /// # Arguments
    ///
    /// * `lon` - Longitude (or right ascension) in radians
    /// * `lat` - Latitude (or declination) in radians
    /// * `distance` - Distance from origin
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = distance * cos(lat) * cos(lon)`
    /// - `y = distance * cos(lat) * sin(lon)`
    /// - `z = distance * sin(lat)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planetfield::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// let pole = Cartesian3::from_spherical(0.0, PI / 2.0, 2.0);
    /// assert!(pole.x.abs() < 1e-15);
    /// assert!(pole.y.abs() < 1e-15);
    /// assert!((pole.z - 2.0).abs() < 1e-15);
    /// ```
    pub fn from_spherical(lon: f64, lat: f64, distance: f64) -> Self {
        let cos_lat = lat.cos();
        Cartesian3 {
            x: distance * cos_lat * lon.cos(),
            y: distance * cos_lat * lon.sin(),
            z: distance * lat.sin(),
        }
    }

    /// Converts to spherical coordinates
    ///
    /// Returns `(lon, lat, distance)` with `lon` in [0, 2π) and `lat` in
    /// [-π/2, π/2]. The zero vector maps to `(0, 0, 0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planetfield::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// let (lon, lat, dist) = Cartesian3::new(0.0, -3.0, 0.0).to_spherical();
    /// assert!((lon - 1.5 * PI).abs() < 1e-15);
    /// assert_eq!(lat, 0.0);
    /// assert_eq!(dist, 3.0);
    /// ```
    pub fn to_spherical(&self) -> (f64, f64, f64) {
        let distance = self.magnitude();

        if distance == 0.0 {
            return (0.0, 0.0, 0.0);
        }

        let lat = (self.z / distance).clamp(-1.0, 1.0).asin();
        let lon = if self.x == 0.0 && self.y == 0.0 {
            0.0 // Arbitrary choice at poles
        } else {
            let lon = self.y.atan2(self.x);
            if lon < 0.0 {
                lon + 2.0 * PI
            } else {
                lon
            }
        };

        (lon, lat, distance)
    }

    /// Euclidean length of the vector
    ///
    /// ```rust
    /// use planetfield::coordinates::cartesian::Cartesian3;
    ///
    /// assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction, or None for the zero vector
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angle between two vectors in radians, in [0, π]
    ///
    /// Returns 0 when either vector has zero length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planetfield::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
    /// let y_axis = Cartesian3::new(0.0, 5.0, 0.0);
    /// assert!((x_axis.angle_between(&y_axis) - PI / 2.0).abs() < 1e-15);
    /// ```
    pub fn angle_between(&self, other: &Cartesian3) -> f64 {
        if self.magnitude() == 0.0 || other.magnitude() == 0.0 {
            return 0.0;
        }

        // atan2 keeps full precision near 0 and π, where acos does not
        self.cross(other).magnitude().atan2(self.dot(other))
    }

    /// Applies a rotation (or any linear map) to this vector
    pub fn rotate(&self, matrix: &Matrix3<f64>) -> Cartesian3 {
        Cartesian3::from_vector3(&(matrix * self.to_vector3()))
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: &Vector3<f64>) -> Self {
        Cartesian3::new(vec.x, vec.y, vec.z)
    }
}

impl Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        Cartesian3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(&vec)
    }
}

impl From<Cartesian3> for Vector3<f64> {
    fn from(coord: Cartesian3) -> Self {
        coord.to_vector3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_spherical_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let lon = rng.gen_range(0.0..2.0 * PI);
            let lat = rng.gen_range(-PI / 2.0 + 1e-6..PI / 2.0 - 1e-6);
            let distance = rng.gen_range(0.1..50.0);

            let coord = Cartesian3::from_spherical(lon, lat, distance);
            let (lon2, lat2, distance2) = coord.to_spherical();

            assert_relative_eq!(lon, lon2, epsilon = 1e-10);
            assert_relative_eq!(lat, lat2, epsilon = 1e-10);
            assert_relative_eq!(distance, distance2, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_zero_vector() {
        let zero = Cartesian3::zero();
        assert_eq!(zero.to_spherical(), (0.0, 0.0, 0.0));
        assert!(zero.normalize().is_none());
        assert_eq!(zero.angle_between(&Cartesian3::new(1.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(0.5, -1.0, 2.0);

        assert_eq!(a + b, Cartesian3::new(1.5, 1.0, 5.0));
        assert_eq!(a - b, Cartesian3::new(0.5, 3.0, 1.0));
        assert_eq!(-a, Cartesian3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Cartesian3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Cartesian3::new(0.5, 1.0, 1.5));
        assert_eq!(a.dot(&b), 4.5);
    }

    #[test]
    fn test_cross_product_is_orthogonal() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(-2.0, 0.5, 4.0);
        let c = a.cross(&b);

        assert_relative_eq!(c.dot(&a), 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.dot(&b), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_between_antiparallel() {
        let a = Cartesian3::new(0.3, -0.2, 0.9);
        assert_relative_eq!(a.angle_between(&-a), PI, epsilon = 1e-12);
        assert_relative_eq!(a.angle_between(&(a * 7.0)), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_angle_between_tiny_separation() {
        let a = Cartesian3::new(1.0, 0.0, 0.0);
        let b = Cartesian3::new(1.0, 1e-10, 0.0);
        assert_relative_eq!(a.angle_between(&b), 1e-10, max_relative = 1e-9);
        assert_relative_eq!(a.angle_between(&-b), PI - 1e-10, max_relative = 1e-15);
        assert_eq!(a.angle_between(&a), 0.0);
        assert_eq!(a.angle_between(&Cartesian3::zero()), 0.0);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let angle: f64 = 0.4;
        let (s, c) = angle.sin_cos();
        let rz = Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0);

        let v = Cartesian3::new(1.0, 2.0, -0.5);
        let rotated = v.rotate(&rz);

        assert_relative_eq!(rotated.magnitude(), v.magnitude(), epsilon = 1e-14);
        assert_relative_eq!(rotated.z, v.z, epsilon = 1e-15);
    }
}
