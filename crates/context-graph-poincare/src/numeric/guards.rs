//! Safe floating-point primitives.

use super::Complex;

/// Degeneracy tolerance: coincident points, zero vectors, identity fast paths.
pub const EPSILON: f64 = 1e-10;

/// Distance kept between any disk point and the unit circle.
pub const BOUNDARY_EPS: f64 = 1e-5;

/// Largest Euclidean norm a disk point may have: `1 - BOUNDARY_EPS`.
pub const MAX_DISK_NORM: f64 = 1.0 - BOUNDARY_EPS;

/// Norm a disk point is clamped to before being lifted onto the hyperboloid.
pub const LIFT_MAX_NORM: f64 = 0.999;

/// Magnitude returned by a guarded division with a ~0 denominator.
pub const LARGE_MAGNITUDE: f64 = 1e12;

/// `value` if finite, otherwise `default`.
#[inline]
pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}

/// Clamp an interpolation parameter into `[0, 1]`. NaN maps to 0.
#[inline]
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// `atanh` with the argument clamped to `[-(1 - BOUNDARY_EPS), 1 - BOUNDARY_EPS]`.
#[inline]
pub fn safe_atanh(x: f64) -> f64 {
    finite_or(x, 0.0).clamp(-MAX_DISK_NORM, MAX_DISK_NORM).atanh()
}

/// `acosh` with the argument clamped to `>= 1`.
///
/// Absorbs floating-point excursions below the domain, e.g. `-<x,x>_L`
/// evaluating to `0.9999999999` for coincident hyperboloid points.
/// Non-finite input maps to `INFINITY`.
#[inline]
pub fn safe_acosh(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return f64::INFINITY;
    }
    x.max(1.0).acosh()
}

/// Project `z` strictly inside the disk (`|z| <= MAX_DISK_NORM`).
///
/// Non-finite input returns the origin.
#[inline]
pub fn clamp_to_disk(z: Complex) -> Complex {
    if !z.is_finite() {
        return Complex::ZERO;
    }
    let norm = z.abs();
    if norm > MAX_DISK_NORM {
        z.scale(MAX_DISK_NORM / norm)
    } else {
        z
    }
}
