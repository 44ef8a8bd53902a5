//! Algebraic properties checked over seeded random vectors
//!
//! Values are drawn from a fixed seed so failures reproduce exactly.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use veclib_core::{difference, dot, length, scale, sum, unit, Vec3};

const SAMPLES: usize = 500;

fn random_vec(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.random_range(-1.0e3..1.0e3),
        rng.random_range(-1.0e3..1.0e3),
        rng.random_range(-1.0e3..1.0e3),
    )
}

fn samples(seed: u64) -> impl Iterator<Item = (Vec3, Vec3, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES).map(move |_| {
        let a = random_vec(&mut rng);
        let b = random_vec(&mut rng);
        let k = rng.random_range(-50.0..50.0);
        (a, b, k)
    })
}

#[test]
fn test_dot_is_commutative() {
    for (a, b, _) in samples(1) {
        assert_eq!(dot(a, b), dot(b, a));
    }
}

#[test]
fn test_length_is_sqrt_of_self_dot() {
    for (v, _, _) in samples(2) {
        assert!(dot(v, v) >= 0.0);
        assert_eq!(length(v), dot(v, v).sqrt());
    }
}

#[test]
fn test_scaling_scales_length() {
    for (v, _, k) in samples(3) {
        let mut out = Vec3::ZERO;
        scale(k, v, &mut out);
        assert_relative_eq!(length(out), k.abs() * length(v), max_relative = 1e-12);
    }
}

/// Writing into an input must give the same values as writing into fresh
/// storage and copying back.
#[test]
fn test_aliased_output_matches_fresh_output() {
    for (a, b, k) in samples(4) {
        let mut fresh = Vec3::ZERO;

        scale(k, a, &mut fresh);
        let mut aliased = a;
        scale(k, aliased, &mut aliased);
        assert_eq!(aliased, fresh);

        difference(a, b, &mut fresh);
        let mut aliased = a;
        difference(aliased, b, &mut aliased);
        assert_eq!(aliased, fresh);
        let mut aliased = b;
        difference(a, aliased, &mut aliased);
        assert_eq!(aliased, fresh);

        sum(a, b, &mut fresh);
        let mut aliased = a;
        sum(aliased, b, &mut aliased);
        assert_eq!(aliased, fresh);
        let mut aliased = b;
        sum(a, aliased, &mut aliased);
        assert_eq!(aliased, fresh);

        unit(a, &mut fresh);
        let mut aliased = a;
        unit(aliased, &mut aliased);
        assert_eq!(aliased, fresh);
    }
}

#[test]
fn test_unit_has_length_one() {
    for (v, _, _) in samples(5) {
        let mut out = Vec3::ZERO;
        unit(v, &mut out);
        assert_relative_eq!(length(out), 1.0, epsilon = 1e-12);
        assert_eq!(v.try_unit(), Some(out));
    }
}

#[test]
fn test_value_methods_agree_with_output_functions() {
    for (a, b, k) in samples(6) {
        let mut out = Vec3::ZERO;

        scale(k, a, &mut out);
        assert_eq!(out, a.scaled(k));
        assert_eq!(dot(a, b), a.dot(b));
        assert_eq!(length(a), a.length());
    }
}

#[test]
fn test_tiny_vectors_still_normalize() {
    let v = Vec3::new(1.0e-150, 0.0, 0.0);
    let mut out = Vec3::splat(9.0);
    unit(v, &mut out);
    assert_relative_eq!(out.x, 1.0, epsilon = 1e-12);
    assert_eq!(out.y, 0.0);
}
