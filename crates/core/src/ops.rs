//! Output-parameter vector operations
//!
//! Each writing operation takes its inputs by value and its result location as
//! `&mut Vec3`. The output may be the same storage as an input:
//!
//! ```
//! use veclib_core::{difference, Vec3};
//!
//! let subtract = Vec3::new(0.0, -5.0, 9.0);
//! let mut from = Vec3::new(1.0, 2.0, 3.0);
//! difference(subtract, from, &mut from);
//! assert_eq!(from, Vec3::new(1.0, 7.0, -6.0));
//! ```
//!
//! All result components are computed into locals before the first write to
//! `output`, so the same code stays correct behind the C ABI where the output
//! pointer can overlap an input pointer.

use std::io::{self, Write};

use tracing::debug;

use crate::core_types::Vec3;

/// Dot product of `a` and `b`.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(b)
}

/// Writes `factor * input` into `output`.
#[inline]
pub fn scale(factor: f64, input: Vec3, output: &mut Vec3) {
    let x = input.x * factor;
    let y = input.y * factor;
    let z = input.z * factor;

    output.x = x;
    output.y = y;
    output.z = z;
}

/// Euclidean length of `v`.
#[inline]
pub fn length(v: Vec3) -> f64 {
    v.length()
}

/// Writes `from - subtract` into `output`.
#[inline]
pub fn difference(subtract: Vec3, from: Vec3, output: &mut Vec3) {
    let diff_x = from.x - subtract.x;
    let diff_y = from.y - subtract.y;
    let diff_z = from.z - subtract.z;

    output.x = diff_x;
    output.y = diff_y;
    output.z = diff_z;
}

/// Writes `a + b` into `output`.
#[inline]
pub fn sum(a: Vec3, b: Vec3, output: &mut Vec3) {
    let sum_x = a.x + b.x;
    let sum_y = a.y + b.y;
    let sum_z = a.z + b.z;

    output.x = sum_x;
    output.y = sum_y;
    output.z = sum_z;
}

/// Writes the unit vector of `input` into `output`.
///
/// A zero-length input has no direction: `output` is left exactly as it was
/// and nothing is reported to the caller. Use [`Vec3::try_unit`] to observe
/// that case explicitly.
pub fn unit(input: Vec3, output: &mut Vec3) {
    let len = length(input);
    if len == 0.0 {
        debug!("unit: zero-length input, output left unchanged");
        return;
    }

    scale(1.0 / len, input, output);
}

/// Renders `v` as `"<label> = (x, y, z)"` with six fractional digits.
pub fn format(label: &str, v: Vec3) -> String {
    format!("{label} = {v}")
}

/// Prints [`format`] of `v` followed by a newline to stdout.
pub fn print(label: &str, v: Vec3) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", format(label, v)) {
        debug!(error = %e, "print: write to stdout failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v1() -> Vec3 {
        Vec3::new(1.0, 2.0, 3.0)
    }

    fn v2() -> Vec3 {
        Vec3::new(0.0, -5.0, 9.0)
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(v1(), v2()), 17.0);
        assert_eq!(dot(v1(), v1()), 14.0);
    }

    #[test]
    fn test_scale_into_fresh_output() {
        let mut out = Vec3::ZERO;
        scale(10.0, v1(), &mut out);
        assert_eq!(out, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_scale_in_place() {
        let mut v = v1();
        scale(10.0, v, &mut v);
        assert_eq!(v, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_scale_zero_and_negative_factor() {
        let mut out = Vec3::splat(7.0);
        scale(0.0, v1(), &mut out);
        assert_eq!(out, Vec3::ZERO);

        scale(-1.0, v1(), &mut out);
        assert_eq!(out, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_length() {
        assert_eq!(length(v1()), 14.0_f64.sqrt());
        assert_eq!(length(v2()), 106.0_f64.sqrt());
        assert_eq!(length(Vec3::ZERO), 0.0);
    }

    #[test]
    fn test_difference_aliasing_either_input() {
        let mut out = Vec3::ZERO;
        difference(v2(), v1(), &mut out);
        assert_eq!(out, Vec3::new(1.0, 7.0, -6.0));

        let mut from = v1();
        difference(v2(), from, &mut from);
        assert_eq!(from, Vec3::new(1.0, 7.0, -6.0));

        let mut subtract = v2();
        difference(subtract, v1(), &mut subtract);
        assert_eq!(subtract, Vec3::new(1.0, 7.0, -6.0));
    }

    #[test]
    fn test_sum_aliasing_either_input() {
        let mut out = Vec3::ZERO;
        sum(v2(), v1(), &mut out);
        assert_eq!(out, Vec3::new(1.0, -3.0, 12.0));

        let mut b = v1();
        sum(v2(), b, &mut b);
        assert_eq!(b, Vec3::new(1.0, -3.0, 12.0));

        let mut a = v2();
        sum(a, v1(), &mut a);
        assert_eq!(a, Vec3::new(1.0, -3.0, 12.0));
    }

    #[test]
    fn test_unit_normalizes() {
        let mut out = Vec3::ZERO;
        unit(v1(), &mut out);
        assert_relative_eq!(length(out), 1.0, epsilon = 1e-12);

        let mut v = v1();
        unit(v, &mut v);
        assert_eq!(v, out);
    }

    #[test]
    fn test_unit_zero_vector_is_noop() {
        let mut out = Vec3::new(4.0, -4.0, 2.0);
        unit(Vec3::ZERO, &mut out);
        assert_eq!(out, Vec3::new(4.0, -4.0, 2.0));

        let mut zero = Vec3::ZERO;
        unit(zero, &mut zero);
        assert_eq!(length(zero), 0.0);
    }

    #[test]
    fn test_format() {
        assert_eq!(format("v1", v1()), "v1 = (1.000000, 2.000000, 3.000000)");
        assert_eq!(format("v2", v2()), "v2 = (0.000000, -5.000000, 9.000000)");
    }

    #[test]
    fn test_print_does_not_panic() {
        print("v1", v1());
        print("nan", Vec3::splat(f64::NAN));
    }

    #[test]
    fn test_nan_propagates() {
        let mut out = Vec3::ZERO;
        sum(Vec3::new(f64::NAN, 0.0, 0.0), v1(), &mut out);
        assert!(out.x.is_nan());
        assert_eq!(out.y, 2.0);

        // NaN length is not zero, so unit writes NaN components
        unit(Vec3::new(f64::NAN, 1.0, 1.0), &mut out);
        assert!(out.x.is_nan() && out.y.is_nan());
    }
}
