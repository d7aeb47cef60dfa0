//! Minkowski inner product, distance and Lorentz boosts.

use super::types::{HyperboloidPoint, LORENTZ_DIM};
use crate::numeric::{safe_acosh, EPSILON};

/// Minkowski inner product `<a, b>_L = -a0 b0 + sum(ai bi)`.
///
/// Accepts any ambient vectors, so it serves both points and tangent vectors.
#[inline]
pub fn minkowski_inner(a: &[f64; LORENTZ_DIM], b: &[f64; LORENTZ_DIM]) -> f64 {
    let spatial: f64 = a[1..].iter().zip(&b[1..]).map(|(x, y)| x * y).sum();
    spatial - a[0] * b[0]
}

/// Below this value of `-<a, b>_L` distance is computed from the chord
/// `a - b` instead of `acosh`, which loses half its digits near 1.
const CHORD_SWITCH: f64 = 2.0;

/// Geodesic distance `acosh(max(1, -<a, b>_L))`.
///
/// For nearby points the equivalent form `2 asinh(sqrt(<a-b, a-b>_L) / 2)`
/// is used, so identical points are exactly 0 apart even far from the
/// origin. Non-finite input gives `f64::INFINITY`, never NaN.
///
/// # Example
///
/// ```
/// use context_graph_poincare::hyperbolic::lorentz::distance;
/// use context_graph_poincare::hyperbolic::HyperboloidPoint;
///
/// let o = HyperboloidPoint::origin();
/// assert_eq!(distance(&o, &o), 0.0);
/// ```
pub fn distance(a: &HyperboloidPoint, b: &HyperboloidPoint) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::INFINITY;
    }
    let cosh = -a.inner(b);
    if cosh.is_nan() {
        return f64::INFINITY;
    }
    if cosh < CHORD_SWITCH {
        let mut chord = a.coords;
        for (c, y) in chord.iter_mut().zip(&b.coords) {
            *c -= y;
        }
        let chord_sq = minkowski_inner(&chord, &chord).max(0.0);
        return 2.0 * (chord_sq.sqrt() / 2.0).asinh();
    }
    safe_acosh(cosh)
}

/// Lorentz boost moving `center` to the origin, applied to `point`.
///
/// Pure boost with no spatial rotation, the hyperboloid counterpart of the
/// disk Mobius map `T_a`:
///
/// ```text
/// x0'  = -<c, x>_L
/// x_s' = x_s - ((x0 - <c, x>_L) / (c0 + 1)) c_s
/// ```
///
/// Both inputs are re-projected onto the sheet first and the result is
/// re-projected after, so drift does not accumulate across compositions.
pub fn boost(center: &HyperboloidPoint, point: &HyperboloidPoint) -> HyperboloidPoint {
    let c = center.normalized();
    let p = point.normalized();
    if c.spatial_norm_sq() < EPSILON * EPSILON {
        return p;
    }

    let inner = c.inner(&p);
    let factor = (p.time() - inner) / (c.time() + 1.0);

    let mut coords = p.coords;
    coords[0] = -inner;
    for (out, ci) in coords[1..].iter_mut().zip(&c.coords[1..]) {
        *out -= factor * ci;
    }
    HyperboloidPoint::from_coords(coords).normalized()
}

/// Inverse of [`boost`]: the boost taking the origin to `center`.
pub fn boost_inv(center: &HyperboloidPoint, point: &HyperboloidPoint) -> HyperboloidPoint {
    let c = center.normalized();
    let p = point.normalized();
    if c.spatial_norm_sq() < EPSILON * EPSILON {
        return p;
    }

    let spatial_dot: f64 = c.coords[1..]
        .iter()
        .zip(&p.coords[1..])
        .map(|(x, y)| x * y)
        .sum();
    let factor = p.time() + spatial_dot / (c.time() + 1.0);

    let mut coords = p.coords;
    coords[0] = c.time() * p.time() + spatial_dot;
    for (out, ci) in coords[1..].iter_mut().zip(&c.coords[1..]) {
        *out += factor * ci;
    }
    HyperboloidPoint::from_coords(coords).normalized()
}
