//! Geodesic interpolation and arc-fitting tests.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::numeric::Complex;

fn random_point<R: Rng>(rng: &mut R, max_norm: f64) -> DiskPoint {
    Complex::polar(rng.gen_range(0.0..max_norm), rng.gen_range(0.0..TAU))
}

// ========== GEODESIC LERP ==========

#[test]
fn test_lerp_endpoints_exact() {
    let a = Complex::new(0.1, 0.7);
    let b = Complex::new(-0.6, -0.2);
    assert_eq!(geodesic_lerp(a, b, 0.0), a);
    assert_eq!(geodesic_lerp(a, b, 1.0), b);
}

#[test]
fn test_lerp_clamps_parameter() {
    let a = Complex::new(0.1, 0.2);
    let b = Complex::new(0.5, -0.3);
    assert_eq!(geodesic_lerp(a, b, -4.0), a);
    assert_eq!(geodesic_lerp(a, b, 9.0), b);
    assert_eq!(geodesic_lerp(a, b, f64::NAN), a);
}

#[test]
fn test_lerp_coincident_returns_start() {
    let a = Complex::new(0.33, 0.44);
    assert_eq!(geodesic_lerp(a, a, 0.7), a);
}

#[test]
fn test_lerp_points_lie_on_shortest_path() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..100 {
        let a = random_point(&mut rng, 0.9);
        let b = random_point(&mut rng, 0.9);
        let total = distance(a, b);
        for &t in &[0.1, 0.25, 0.5, 0.8, 0.95] {
            let p = geodesic_lerp(a, b, t);
            let via = distance(a, p) + distance(p, b);
            assert!(
                (via - total).abs() < 1e-7,
                "t={} off geodesic: {} vs {}",
                t,
                via,
                total
            );
            // Parameter is linear in hyperbolic arc length
            assert!((distance(a, p) - t * total).abs() < 1e-7);
        }
    }
}

#[test]
fn test_lerp_is_not_euclidean_lerp() {
    let a = Complex::new(0.5, 0.0);
    let b = Complex::new(0.0, 0.5);
    let hyperbolic = geodesic_lerp(a, b, 0.5);
    let euclidean = (a + b).scale(0.5);
    // Geodesic bows toward the origin
    assert!(hyperbolic.abs() < euclidean.abs());
}

#[test]
fn test_midpoint_scenario() {
    let z1 = Complex::new(0.5, 0.0);
    let z2 = Complex::new(0.0, 0.5);
    let m = midpoint(z1, z2);

    assert!(is_valid(m));
    assert!((distance(z1, m) - distance(m, z2)).abs() < 1e-9);
    // Symmetric configuration: the midpoint lies on the diagonal
    assert!((m.re - m.im).abs() < 1e-12);
}

#[test]
fn test_lerp_through_origin() {
    let a = Complex::new(-0.5, 0.0);
    let b = Complex::new(0.5, 0.0);
    let m = midpoint(a, b);
    assert!(m.abs() < 1e-12);
}

// ========== GEODESIC ARC ==========

#[test]
fn test_arc_is_orthogonal_and_passes_through_points() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut arcs = 0;
    for _ in 0..200 {
        let a = random_point(&mut rng, 0.95);
        let b = random_point(&mut rng, 0.95);
        if let Geodesic::Arc { center, radius } = geodesic_arc(a, b) {
            arcs += 1;
            assert!(center.abs() > 1.0, "center must lie outside the disk");
            assert!((center.norm_sq() - radius * radius - 1.0).abs() < 1e-9 * center.norm_sq().max(1.0));
            assert!(((a - center).abs() - radius).abs() < 1e-6 * radius.max(1.0));
            assert!(((b - center).abs() - radius).abs() < 1e-6 * radius.max(1.0));
        }
    }
    assert!(arcs > 150, "random pairs should mostly produce arcs");
}

#[test]
fn test_arc_scenario_values() {
    match geodesic_arc(Complex::new(0.5, 0.0), Complex::new(0.0, 0.5)) {
        Geodesic::Arc { center, radius } => {
            assert!((center - Complex::new(1.25, 1.25)).abs() < 1e-12);
            assert!((radius - 2.125f64.sqrt()).abs() < 1e-12);
        }
        other => panic!("expected arc, got {:?}", other),
    }
}

#[test]
fn test_arc_collinear_with_origin_is_line() {
    let a = Complex::new(0.2, 0.2);
    let b = Complex::new(-0.6, -0.6);
    let g = geodesic_arc(a, b);
    assert!(g.is_line());
    assert_eq!(g, Geodesic::Line { a, b });
}

#[test]
fn test_arc_through_origin_point_is_line() {
    assert!(geodesic_arc(Complex::ZERO, Complex::new(0.3, 0.6)).is_line());
}

#[test]
fn test_arc_tiny_points_fall_back_to_line() {
    // Not collinear, but the 2x2 solve is ill-conditioned
    let a = Complex::new(1e-6, 0.0);
    let b = Complex::new(0.0, 1e-6);
    assert!(geodesic_arc(a, b).is_line());
}

#[test]
fn test_arc_invalid_input_never_panics() {
    let nan = Complex {
        re: f64::NAN,
        im: f64::NAN,
    };
    assert!(geodesic_arc(nan, Complex::new(0.1, 0.2)).is_line());
    let far = geodesic_arc(Complex::new(4.0, 0.0), Complex::new(0.0, 4.0));
    if let Geodesic::Arc { center, radius } = far {
        assert!(center.is_finite());
        assert!(radius.is_finite());
    }
}

// ========== SWEEP ==========

#[test]
fn test_sweep_takes_short_way() {
    let a = Complex::new(0.5, 0.0);
    let b = Complex::new(0.0, 0.5);
    let g = geodesic_arc(a, b);
    let sweep = g.sweep(a, b).expect("arc has a sweep");
    let reverse = g.sweep(b, a).expect("arc has a sweep");

    assert_ne!(sweep.counterclockwise, reverse.counterclockwise);
    assert_eq!(sweep.start_angle, reverse.end_angle);

    // Arc midpoint (on the short side) is the hyperbolic midpoint
    let mut delta = sweep.end_angle - sweep.start_angle;
    if delta.abs() > std::f64::consts::PI {
        delta -= delta.signum() * TAU;
    }
    if let Geodesic::Arc { center, radius } = g {
        let mid = center + Complex::polar(radius, sweep.start_angle + delta / 2.0);
        assert!((mid - midpoint(a, b)).abs() < 1e-9);
    }
}

#[test]
fn test_sweep_line_is_none() {
    let g = geodesic_arc(Complex::new(0.1, 0.0), Complex::new(0.5, 0.0));
    assert!(g.sweep(Complex::new(0.1, 0.0), Complex::new(0.5, 0.0)).is_none());
}
