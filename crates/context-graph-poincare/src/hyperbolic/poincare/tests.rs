//! Tests for disk Mobius transforms, distance and circles.
//!
//! Random inputs come from a seeded ChaCha8 RNG so failures reproduce.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::numeric::{Complex, MAX_DISK_NORM};

const TOL: f64 = 1e-9;

fn make_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn random_point<R: Rng>(rng: &mut R, max_norm: f64) -> DiskPoint {
    let r = rng.gen_range(0.0..max_norm);
    let theta = rng.gen_range(0.0..TAU);
    Complex::polar(r, theta)
}

// ========== VALIDITY ==========

#[test]
fn test_is_valid() {
    assert!(is_valid(Complex::ZERO));
    assert!(is_valid(Complex::new(0.6, 0.79)));
    assert!(!is_valid(Complex::new(0.6, 0.8)));
    assert!(!is_valid(Complex {
        re: f64::NAN,
        im: 0.0
    }));
}

// ========== MOBIUS TESTS ==========

#[test]
fn test_mobius_maps_center_to_origin() {
    let mut rng = make_rng();
    for _ in 0..100 {
        let a = random_point(&mut rng, 0.95);
        assert!(mobius(a, a).abs() < 1e-12);
        assert!((mobius_inv(a, Complex::ZERO) - a).abs() < 1e-12);
    }
}

#[test]
fn test_mobius_identity_fast_path() {
    let z = Complex::new(0.3, -0.4);
    assert_eq!(mobius(Complex::ZERO, z), z);
    assert_eq!(mobius(Complex::new(1e-12, 0.0), z), z);
}

#[test]
fn test_mobius_inverse_roundtrip() {
    let mut rng = make_rng();
    for _ in 0..200 {
        let a = random_point(&mut rng, 0.9);
        let z = random_point(&mut rng, 0.9);
        let back = mobius_inv(a, mobius(a, z));
        assert!((back - z).abs() < 1e-9, "roundtrip drift {:?} -> {:?}", z, back);
    }
}

#[test]
fn test_mobius_result_stays_in_disk() {
    let mut rng = make_rng();
    for _ in 0..200 {
        let a = random_point(&mut rng, 0.99999);
        let z = random_point(&mut rng, 0.99999);
        let w = mobius(a, z);
        assert!(w.abs() <= MAX_DISK_NORM + 1e-15);
    }
}

#[test]
fn test_mobius_invalid_inputs_fall_back() {
    let nan = Complex {
        re: f64::NAN,
        im: 0.2,
    };
    let z = Complex::new(0.2, 0.1);
    // NaN center is treated as the origin
    assert_eq!(mobius(nan, z), z);
    // NaN point becomes the origin, which T_a sends to -a
    let a = Complex::new(0.3, 0.0);
    assert!((mobius(a, nan) - (-a)).abs() < 1e-12);
}

#[test]
fn test_mobius_boundary_inputs_never_nan() {
    let boundary = [
        Complex::new(1.0, 0.0),
        Complex::new(0.0, -1.0),
        Complex::new(5.0, 5.0),
        Complex::new(0.7071067811865476, 0.7071067811865476),
    ];
    for &a in &boundary {
        for &z in &boundary {
            let w = mobius(a, z);
            assert!(w.is_finite());
            assert!(w.abs() <= MAX_DISK_NORM + 1e-15);
        }
    }
}

// ========== DISTANCE TESTS ==========

#[test]
fn test_distance_from_origin_closed_form() {
    for &r in &[0.1, 0.5, 0.9, 0.999] {
        let d = distance_from_origin(Complex::new(r, 0.0));
        assert!((d - 2.0 * f64::atanh(r)).abs() < TOL);
    }
}

#[test]
fn test_distance_scenario_two_axis_points() {
    let z1 = Complex::new(0.5, 0.0);
    let z2 = Complex::new(0.0, 0.5);
    let d = distance(z1, z2);

    // Cross-check with the cosh form:
    // cosh d = 1 + 2|z-w|^2 / ((1-|z|^2)(1-|w|^2))
    let cosh_d: f64 = 1.0 + 2.0 * 0.5 / (0.75 * 0.75);
    assert!((d - cosh_d.acosh()).abs() < TOL);
    assert!((d - 1.6806).abs() < 1e-3, "got {}", d);
}

#[test]
fn test_metric_axioms() {
    let mut rng = make_rng();
    for _ in 0..300 {
        let a = random_point(&mut rng, 0.9);
        let b = random_point(&mut rng, 0.9);
        let c = random_point(&mut rng, 0.9);

        let ab = distance(a, b);
        let bc = distance(b, c);
        let ac = distance(a, c);

        assert!(ab >= 0.0);
        assert_eq!(distance(a, a), 0.0);
        assert!((ab - distance(b, a)).abs() < TOL, "symmetry");
        assert!(ac <= ab + bc + 1e-9, "triangle: {} > {} + {}", ac, ab, bc);
    }
}

#[test]
fn test_distance_isometry_invariance() {
    let mut rng = make_rng();
    for _ in 0..300 {
        let p = random_point(&mut rng, 0.8);
        let a = random_point(&mut rng, 0.8);
        let b = random_point(&mut rng, 0.8);
        let before = distance(a, b);
        let after = distance(mobius(p, a), mobius(p, b));
        assert!(
            (before - after).abs() < 1e-7,
            "isometry violated: {} vs {}",
            before,
            after
        );
    }
}

#[test]
fn test_distance_boundary_robustness() {
    let inside = Complex::new(0.3, 0.2);
    let outside = [
        Complex::new(1.0, 0.0),
        Complex::new(-0.8, 0.61),
        Complex::new(3.0, -2.0),
        Complex {
            re: f64::NAN,
            im: 0.0,
        },
        Complex {
            re: 0.0,
            im: f64::INFINITY,
        },
    ];
    for &z in &outside {
        let d = distance(inside, z);
        assert!(!d.is_nan());
        assert_eq!(d, f64::INFINITY);
        assert_eq!(distance(z, inside), f64::INFINITY);
    }
}

#[test]
fn test_distance_near_boundary_is_finite() {
    let a = Complex::new(MAX_DISK_NORM, 0.0);
    let b = Complex::new(-MAX_DISK_NORM, 0.0);
    let d = distance(a, b);
    assert!(d.is_finite());
    assert!(d > 10.0);
}

#[test]
fn test_distance_coincident_points() {
    let z = Complex::new(0.42, -0.17);
    assert_eq!(distance(z, z), 0.0);
    assert_eq!(distance(z, z + Complex::new(1e-12, 0.0)), 0.0);
}

// ========== CIRCLES ==========

#[test]
fn test_hyp_circle_at_origin() {
    let circle = hyp_circle(Complex::ZERO, 2.0);
    assert_eq!(circle.center, Complex::ZERO);
    assert!((circle.radius - 1f64.tanh()).abs() < 1e-12);
}

#[test]
fn test_hyp_circle_off_center_is_equidistant() {
    let center = Complex::new(0.4, 0.3);
    let rho = 1.2;
    let circle = hyp_circle(center, rho);

    for k in 0..16 {
        let theta = k as f64 * TAU / 16.0;
        let p = circle.point_at(theta);
        let d = distance(center, p);
        assert!((d - rho).abs() < 1e-8, "theta {} gave {}", theta, d);
    }
    // Euclidean center is pulled toward the origin relative to the hyperbolic one
    assert!(circle.center.abs() < center.abs());
    assert!(circle.contains(center));
}

#[test]
fn test_hyp_circle_invalid_radius() {
    let circle = hyp_circle(Complex::new(0.2, 0.0), f64::NAN);
    assert!(circle.radius.abs() < 1e-12);
    let circle = hyp_circle(Complex::ZERO, -3.0);
    assert_eq!(circle.radius, 0.0);
}

#[test]
fn test_horocycle_is_tangent_to_boundary() {
    let ideal = Complex::new(3.0, 4.0);
    let h = horocycle(ideal, 0.3);
    assert!((h.center.abs() + h.radius - 1.0).abs() < 1e-12);
    // Tangency point is the ideal direction itself
    let tangent = h.center + ideal.normalize().scale(h.radius);
    assert!((tangent - ideal.normalize()).abs() < 1e-12);
}

#[test]
fn test_horocycle_degenerate_inputs() {
    let h = horocycle(Complex::ZERO, 0.2);
    assert!((h.center - Complex::new(0.8, 0.0)).abs() < 1e-12);

    let h = horocycle(Complex::new(0.0, 1.0), 7.0);
    assert_eq!(h.radius, MAX_DISK_NORM);

    let h = horocycle(Complex::new(0.0, 1.0), f64::NAN);
    assert_eq!(h.radius, 0.5);
}
