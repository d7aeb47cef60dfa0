//! Exponential and logarithmic maps, interpolation and Frechet means.

use super::ops::{distance, minkowski_inner};
use super::types::{HyperboloidPoint, TangentVector, LORENTZ_DIM};
use crate::numeric::{clamp_unit, EPSILON};

/// Iteration count for [`centroid`].
pub const DEFAULT_CENTROID_ITERATIONS: usize = 5;

/// Tangent norms beyond this are clamped in [`exp_map`] to keep `cosh`
/// finite after normalization.
const MAX_TANGENT_NORM: f64 = 300.0;

/// Above this distance `sinh` interpolation weights lose precision and
/// [`geodesic_lerp`] switches to `exp(log)`.
const SINH_LERP_LIMIT: f64 = 300.0;

#[inline]
fn scaled(v: &TangentVector, s: f64) -> TangentVector {
    let mut out = *v;
    out.iter_mut().for_each(|x| *x *= s);
    out
}

#[inline]
fn sanitized(v: &TangentVector) -> TangentVector {
    if v.iter().all(|x| x.is_finite()) {
        *v
    } else {
        [0.0; LORENTZ_DIM]
    }
}

/// Project an ambient vector onto the tangent space at `p`:
/// `v + <p, v>_L p`.
pub fn project_to_tangent(p: &HyperboloidPoint, v: &TangentVector) -> TangentVector {
    let p = p.normalized();
    let v = sanitized(v);
    let k = minkowski_inner(&p.coords, &v);
    let mut out = v;
    for (o, pi) in out.iter_mut().zip(&p.coords) {
        *o += k * pi;
    }
    out
}

/// Length of a tangent vector, `sqrt(max(0, <v, v>_L))`.
#[inline]
pub fn tangent_norm(v: &TangentVector) -> f64 {
    minkowski_inner(v, v).max(0.0).sqrt()
}

/// Exponential map at `p`: `cosh(|v|) p + sinh(|v|) v / |v|`.
///
/// Vectors shorter than `EPSILON` (or non-finite) return `p`.
pub fn exp_map(p: &HyperboloidPoint, v: &TangentVector) -> HyperboloidPoint {
    let p = p.normalized();
    let v = sanitized(v);
    let norm = tangent_norm(&v);
    if norm < EPSILON {
        return p;
    }

    let step = norm.min(MAX_TANGENT_NORM);
    let (sinh, cosh) = (step.sinh(), step.cosh());
    let mut coords = [0.0; LORENTZ_DIM];
    for (i, out) in coords.iter_mut().enumerate() {
        *out = cosh * p.coords[i] + sinh * v[i] / norm;
    }
    HyperboloidPoint::from_coords(coords).normalized()
}

/// Logarithmic map at `p`: the tangent vector at `p` pointing toward `q`
/// with length `distance(p, q)`.
///
/// Coincident points give the zero vector.
pub fn log_map(p: &HyperboloidPoint, q: &HyperboloidPoint) -> TangentVector {
    let zero = [0.0; LORENTZ_DIM];
    let p = p.normalized();
    let q = q.normalized();

    let d = distance(&p, &q);
    if !d.is_finite() || d < EPSILON {
        return zero;
    }

    let inner = p.inner(&q);
    let mut u = q.coords;
    for (o, pi) in u.iter_mut().zip(&p.coords) {
        *o += inner * pi;
    }
    let norm = tangent_norm(&u);
    if norm < EPSILON || !norm.is_finite() {
        return zero;
    }
    scaled(&u, d / norm)
}

/// Point at fraction `t` of the geodesic from `a` to `b`.
///
/// Uses the `sinh` weights `(sinh((1-t)d) a + sinh(td) b) / sinh(d)` in
/// ambient coordinates. `t` is clamped to `[0, 1]`.
///
/// # Example
///
/// ```
/// use context_graph_poincare::hyperbolic::lorentz::{distance, geodesic_lerp};
/// use context_graph_poincare::hyperbolic::HyperboloidPoint;
///
/// let mut s = [0.0; 8];
/// s[2] = 3.0;
/// let a = HyperboloidPoint::origin();
/// let b = HyperboloidPoint::from_spatial(&s);
/// let q = geodesic_lerp(&a, &b, 0.25);
/// assert!((distance(&a, &q) - 0.25 * distance(&a, &b)).abs() < 1e-9);
/// ```
pub fn geodesic_lerp(a: &HyperboloidPoint, b: &HyperboloidPoint, t: f64) -> HyperboloidPoint {
    let a = a.normalized();
    let b = b.normalized();
    let t = clamp_unit(t);

    let d = distance(&a, &b);
    if d < EPSILON || t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    if d > SINH_LERP_LIMIT {
        return exp_map(&a, &scaled(&log_map(&a, &b), t));
    }

    let s = d.sinh();
    let wa = ((1.0 - t) * d).sinh() / s;
    let wb = (t * d).sinh() / s;
    let mut coords = [0.0; LORENTZ_DIM];
    for (i, out) in coords.iter_mut().enumerate() {
        *out = wa * a.coords[i] + wb * b.coords[i];
    }
    HyperboloidPoint::from_coords(coords).normalized()
}

/// Hyperbolic midpoint of `a` and `b`.
#[inline]
pub fn midpoint(a: &HyperboloidPoint, b: &HyperboloidPoint) -> HyperboloidPoint {
    geodesic_lerp(a, b, 0.5)
}

/// Frechet mean with [`DEFAULT_CENTROID_ITERATIONS`] refinement steps.
#[inline]
pub fn centroid(points: &[HyperboloidPoint]) -> HyperboloidPoint {
    centroid_with_iterations(points, DEFAULT_CENTROID_ITERATIONS)
}

/// Approximate Frechet mean.
///
/// Starts from the Lorentzian-normalized ambient average, then runs exactly
/// `iterations` steps of `mu <- exp_mu(mean_i log_mu(x_i))`. There is no
/// convergence test; five steps are plenty for bounding-ball centers.
///
/// An empty slice gives the origin; a single point gives that point.
pub fn centroid_with_iterations(points: &[HyperboloidPoint], iterations: usize) -> HyperboloidPoint {
    match points {
        [] => return HyperboloidPoint::origin(),
        [only] => return only.normalized(),
        _ => {}
    }

    let mut sum = [0.0; LORENTZ_DIM];
    for p in points {
        let p = p.normalized();
        for (s, x) in sum.iter_mut().zip(&p.coords) {
            *s += x;
        }
    }
    let norm_sq = -minkowski_inner(&sum, &sum);
    let mut mu = if norm_sq > 0.0 && norm_sq.is_finite() {
        HyperboloidPoint::from_coords(scaled(&sum, 1.0 / norm_sq.sqrt())).normalized()
    } else {
        points[0].normalized()
    };

    let weight = 1.0 / points.len() as f64;
    for _ in 0..iterations {
        let mut mean = [0.0; LORENTZ_DIM];
        for p in points {
            let v = log_map(&mu, p);
            for (m, x) in mean.iter_mut().zip(&v) {
                *m += x * weight;
            }
        }
        mu = exp_map(&mu, &mean);
    }
    mu
}
