//! Poincare ball <-> hyperboloid conversion.
//!
//! ```text
//! lift:    p  -> ((1 + |p|^2), 2p) / (1 - |p|^2)
//! project: x  -> x_s / (1 + x0)
//! ```
//!
//! Both maps are bijections on the open interior. Lifting clamps `|p|` to
//! [`LIFT_MAX_NORM`] first so the denominator stays away from zero.

use super::lorentz::{HyperboloidPoint, LORENTZ_DIM, SPATIAL_DIM};
use super::poincare::DiskPoint;
use crate::numeric::{clamp_to_disk, Complex, LIFT_MAX_NORM};

/// Lift an 8-dimensional Poincare ball point onto the hyperboloid.
///
/// Non-finite input lifts to the origin.
pub fn ball_to_hyperboloid(ball: &[f64; SPATIAL_DIM]) -> HyperboloidPoint {
    if ball.iter().any(|x| !x.is_finite()) {
        return HyperboloidPoint::origin();
    }

    let mut p = *ball;
    let mut norm_sq: f64 = p.iter().map(|x| x * x).sum();
    if norm_sq > LIFT_MAX_NORM * LIFT_MAX_NORM {
        let scale = LIFT_MAX_NORM / norm_sq.sqrt();
        p.iter_mut().for_each(|x| *x *= scale);
        norm_sq = LIFT_MAX_NORM * LIFT_MAX_NORM;
    }

    let denom = 1.0 - norm_sq;
    let mut coords = [0.0; LORENTZ_DIM];
    coords[0] = (1.0 + norm_sq) / denom;
    for (out, x) in coords[1..].iter_mut().zip(&p) {
        *out = 2.0 * x / denom;
    }
    HyperboloidPoint::from_coords(coords).normalized()
}

/// Project a hyperboloid point into the 8-dimensional Poincare ball.
pub fn hyperboloid_to_ball(x: &HyperboloidPoint) -> [f64; SPATIAL_DIM] {
    let x = x.normalized();
    let denom = 1.0 + x.time();
    let mut ball = [0.0; SPATIAL_DIM];
    for (out, xi) in ball.iter_mut().zip(x.spatial()) {
        *out = xi / denom;
    }
    ball
}

/// Lift a disk point onto the hyperboloid. The disk occupies the first two
/// spatial axes; the remaining six are zero.
///
/// # Example
///
/// ```
/// use context_graph_poincare::hyperbolic::{to_disk, to_hyperboloid};
/// use context_graph_poincare::numeric::Complex;
///
/// let z = Complex::new(0.3, -0.5);
/// let back = to_disk(&to_hyperboloid(z));
/// assert!((back - z).abs() < 1e-12);
/// ```
pub fn to_hyperboloid(disk: DiskPoint) -> HyperboloidPoint {
    let z = disk.sanitized();
    let mut ball = [0.0; SPATIAL_DIM];
    ball[0] = z.re;
    ball[1] = z.im;
    ball_to_hyperboloid(&ball)
}

/// Project a hyperboloid point onto the disk (first two spatial axes of the
/// ball projection), clamped inside the disk.
pub fn to_disk(x: &HyperboloidPoint) -> DiskPoint {
    let ball = hyperboloid_to_ball(x);
    clamp_to_disk(Complex::new(ball[0], ball[1]))
}
