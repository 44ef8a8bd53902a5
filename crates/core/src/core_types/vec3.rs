//! Fixed-size 3D vector type for positions and directions.
//!
//! `Vec3` is a plain `#[repr(C)]` triple of `f64` components. It is `Copy`, so
//! every operation works on values and never allocates.
//!
//! # Usage
//! ```
//! use veclib_core::Vec3;
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(0.0, -5.0, 9.0);
//! assert_eq!(a.dot(b), 17.0);
//! assert_eq!(a.scaled(2.0), Vec3::new(2.0, 4.0, 6.0));
//! assert_eq!(Vec3::ZERO.try_unit(), None);
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 3D vector of double-precision components.
///
/// Represents either a point or a direction; the type does not distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The zero vector (0, 0, 0)
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Vector with all three components set to `value`
    #[inline]
    #[must_use]
    pub const fn splat(value: f64) -> Self {
        Vec3::new(value, value, value)
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product `self.x*other.x + self.y*other.y + self.z*other.z`
    #[inline]
    #[must_use]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared Euclidean norm
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm. Zero for the zero vector, never negative.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Component-wise product with `factor`
    #[inline]
    #[must_use]
    pub fn scaled(self, factor: f64) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Unit vector pointing the same way as `self`.
    ///
    /// Returns `None` when the length is exactly zero, where normalization is
    /// undefined. Tiny but non-zero vectors are still normalized.
    #[must_use]
    pub fn try_unit(self) -> Option<Vec3> {
        let length = self.length();
        if length == 0.0 {
            return None;
        }
        Some(self.scaled(1.0 / length))
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

// Conversions

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<Vector3<f64>> for Vec3 {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f64> {
    #[inline]
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}
