//! Vector Library Core
//!
//! Fixed-size 3D vector arithmetic over `f64`: dot product, scaling, length,
//! difference, sum, normalization and formatted printing.
//!
//! ## Output parameters
//!
//! The free functions in [`ops`] write their result into a caller-owned
//! `&mut Vec3` and accept that location being one of their own inputs.
//! [`Vec3`] also has value-returning methods and operators for the same math.
//!
//! ```
//! use veclib_core::{scale, unit, Vec3};
//!
//! let mut v = Vec3::new(1.0, 2.0, 3.0);
//! scale(10.0, v, &mut v);
//! assert_eq!(v, Vec3::new(10.0, 20.0, 30.0));
//!
//! // Normalizing the zero vector leaves the output untouched
//! let mut out = Vec3::splat(5.0);
//! unit(Vec3::ZERO, &mut out);
//! assert_eq!(out, Vec3::splat(5.0));
//! ```

// Core types
pub mod core_types;

// Output-parameter operations
pub mod ops;

pub use core_types::Vec3;
pub use ops::{difference, dot, format, length, print, scale, sum, unit};
