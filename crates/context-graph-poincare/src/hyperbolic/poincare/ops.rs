//! Mobius transforms and hyperbolic distance on the disk.

use super::DiskPoint;
use crate::numeric::{clamp_to_disk, Complex, EPSILON, MAX_DISK_NORM};

/// True if `z` is finite and strictly inside the unit disk.
#[inline]
pub fn is_valid(z: DiskPoint) -> bool {
    z.is_finite() && z.norm_sq() < 1.0
}

/// Mobius isometry `T_a(z) = (z - a) / (1 - conj(a) z)`.
///
/// Maps `a` to the origin; this is the camera/pan primitive. `a` and `z`
/// are clamped into the disk first (non-finite input becomes the origin),
/// and the result is re-clamped.
///
/// # Example
///
/// ```
/// use context_graph_poincare::hyperbolic::poincare::mobius;
/// use context_graph_poincare::numeric::Complex;
///
/// let a = Complex::new(0.3, -0.2);
/// let moved = mobius(a, a);
/// assert!(moved.abs() < 1e-12);
/// ```
pub fn mobius(a: DiskPoint, z: DiskPoint) -> DiskPoint {
    let a = clamp_to_disk(a);
    let z = clamp_to_disk(z);

    // Identity fast path
    if a.abs() < EPSILON {
        return z;
    }

    let numerator = z - a;
    let denominator = Complex::ONE - a.conj() * z;
    clamp_to_disk(numerator / denominator)
}

/// Inverse of [`mobius`]: `T_a^{-1}(w) = (w + a) / (1 + conj(a) w)`.
///
/// Maps the origin to `a`. Used to place a point given in `a`'s local frame
/// into world coordinates.
///
/// ```
/// use context_graph_poincare::hyperbolic::poincare::{mobius, mobius_inv};
/// use context_graph_poincare::numeric::Complex;
///
/// let a = Complex::new(0.5, 0.1);
/// let z = Complex::new(-0.2, 0.6);
/// let back = mobius_inv(a, mobius(a, z));
/// assert!((back - z).abs() < 1e-12);
/// ```
#[inline]
pub fn mobius_inv(a: DiskPoint, w: DiskPoint) -> DiskPoint {
    mobius(-clamp_to_disk(a), w)
}

/// Hyperbolic distance `2 atanh(min(|z - w| / |1 - conj(z) w|, 1 - eps))`.
///
/// # Returns
///
/// - `0.0` for coincident points (within `EPSILON`)
/// - `INFINITY` if either point is non-finite or on/outside the unit circle,
///   or if the ratio reaches 1
/// - otherwise a finite, non-negative distance
///
/// # Example
///
/// ```
/// use context_graph_poincare::hyperbolic::poincare::distance;
/// use context_graph_poincare::numeric::Complex;
///
/// let origin = Complex::ZERO;
/// let p = Complex::new(0.5, 0.0);
/// // d(0, r) = 2 atanh(r)
/// assert!((distance(origin, p) - 2.0 * 0.5f64.atanh()).abs() < 1e-12);
/// assert_eq!(distance(p, Complex::new(1.0, 0.0)), f64::INFINITY);
/// ```
pub fn distance(z: DiskPoint, w: DiskPoint) -> f64 {
    if !is_valid(z) || !is_valid(w) {
        return f64::INFINITY;
    }

    let diff = (z - w).abs();
    if diff < EPSILON {
        return 0.0;
    }

    let denominator = (Complex::ONE - z.conj() * w).abs();
    let ratio = diff / denominator;
    if !ratio.is_finite() || ratio >= 1.0 {
        return f64::INFINITY;
    }

    2.0 * ratio.min(MAX_DISK_NORM).atanh()
}

/// Hyperbolic distance from the disk center: `2 atanh(|z|)`.
#[inline]
pub fn distance_from_origin(z: DiskPoint) -> f64 {
    distance(Complex::ZERO, z)
}
