//! Geodesic interpolation and arc fitting on the disk.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use super::ops::{mobius, mobius_inv};
use super::DiskPoint;
use crate::numeric::{clamp_to_disk, clamp_unit, safe_atanh, Complex, EPSILON};

/// Below this sine of the angle between two points (seen from the origin)
/// their geodesic is treated as a diameter.
const COLLINEAR_SINE: f64 = 1e-6;

/// Geodesic through two disk points, in drawable form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geodesic {
    /// Straight segment (the geodesic runs through the disk center).
    Line { a: DiskPoint, b: DiskPoint },
    /// Arc of the Euclidean circle `|z - center| = radius`, orthogonal to the
    /// unit circle (`|center|^2 - radius^2 = 1`).
    Arc { center: Complex, radius: f64 },
}

/// Angular parameters of the arc segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcSweep {
    pub start_angle: f64,
    pub end_angle: f64,
    /// Direction of the short way round from `start_angle` to `end_angle`.
    pub counterclockwise: bool,
}

impl Geodesic {
    /// True for the degenerate diameter case.
    #[inline]
    pub fn is_line(&self) -> bool {
        matches!(self, Geodesic::Line { .. })
    }

    /// Start/end angles on the supporting circle for drawing the segment
    /// `from -> to`. `None` for [`Geodesic::Line`].
    ///
    /// The segment inside the disk is always the shorter of the two arcs
    /// between the endpoints, so the sweep is taken the short way round.
    pub fn sweep(&self, from: DiskPoint, to: DiskPoint) -> Option<ArcSweep> {
        match *self {
            Geodesic::Line { .. } => None,
            Geodesic::Arc { center, .. } => {
                let start_angle = (from - center).arg();
                let end_angle = (to - center).arg();
                let mut delta = (end_angle - start_angle) % TAU;
                if delta > PI {
                    delta -= TAU;
                } else if delta <= -PI {
                    delta += TAU;
                }
                Some(ArcSweep {
                    start_angle,
                    end_angle,
                    counterclockwise: delta > 0.0,
                })
            }
        }
    }
}

/// Point at fraction `t` of the geodesic from `z1` to `z2`.
///
/// Translates `z1` to the origin, where geodesics are diameters, moves
/// radially by `tanh(t * atanh(r))` (linear in hyperbolic arc length), and
/// translates back. `t` is clamped to `[0, 1]`. Coincident endpoints return
/// `z1`.
///
/// # Example
///
/// ```
/// use context_graph_poincare::hyperbolic::poincare::{distance, geodesic_lerp};
/// use context_graph_poincare::numeric::Complex;
///
/// let a = Complex::new(0.5, 0.0);
/// let b = Complex::new(0.0, 0.5);
/// let m = geodesic_lerp(a, b, 0.5);
/// assert!((distance(a, m) - distance(m, b)).abs() < 1e-9);
/// ```
pub fn geodesic_lerp(z1: DiskPoint, z2: DiskPoint, t: f64) -> DiskPoint {
    let z1 = clamp_to_disk(z1);
    let z2 = clamp_to_disk(z2);
    let t = clamp_unit(t);

    if (z1 - z2).abs() < EPSILON || t == 0.0 {
        return z1;
    }
    if t == 1.0 {
        return z2;
    }

    let local = mobius(z1, z2);
    let r = local.abs();
    if r < EPSILON {
        return z1;
    }

    let r_t = (t * safe_atanh(r)).tanh();
    mobius_inv(z1, local.normalize().scale(r_t))
}

/// Hyperbolic midpoint: `geodesic_lerp(a, b, 0.5)`.
#[inline]
pub fn midpoint(a: DiskPoint, b: DiskPoint) -> DiskPoint {
    geodesic_lerp(a, b, 0.5)
}

/// Drawable geodesic through `z1` and `z2`.
///
/// Nearly collinear with the origin gives [`Geodesic::Line`]. Otherwise the
/// center `c` of the orthogonal circle solves `2 <z_k, c> = |z_k|^2 + 1` for
/// both points. An ill-conditioned solve, or a center that lands inside the
/// disk, falls back to `Line`.
///
/// # Example
///
/// ```
/// use context_graph_poincare::hyperbolic::poincare::{geodesic_arc, Geodesic};
/// use context_graph_poincare::numeric::Complex;
///
/// let g = geodesic_arc(Complex::new(0.5, 0.0), Complex::new(0.0, 0.5));
/// match g {
///     Geodesic::Arc { center, radius } => {
///         assert!((center.norm_sq() - radius * radius - 1.0).abs() < 1e-9);
///     }
///     Geodesic::Line { .. } => panic!("expected an arc"),
/// }
/// ```
pub fn geodesic_arc(z1: DiskPoint, z2: DiskPoint) -> Geodesic {
    let z1 = clamp_to_disk(z1);
    let z2 = clamp_to_disk(z2);
    let line = Geodesic::Line { a: z1, b: z2 };

    let n1 = z1.abs();
    let n2 = z2.abs();
    if n1 < EPSILON || n2 < EPSILON {
        return line;
    }

    let det = z1.cross(z2);
    if (det / (n1 * n2)).abs() < COLLINEAR_SINE || det.abs() < EPSILON {
        return line;
    }

    let k1 = z1.norm_sq() + 1.0;
    let k2 = z2.norm_sq() + 1.0;
    let cx = (k1 * z2.im - k2 * z1.im) / (2.0 * det);
    let cy = (k2 * z1.re - k1 * z2.re) / (2.0 * det);
    let center = Complex { re: cx, im: cy };

    // A center inside the disk contradicts orthogonality: precision loss.
    if !center.is_finite() || center.norm_sq() <= 1.0 {
        return line;
    }

    let radius = (center.norm_sq() - 1.0).sqrt();
    if !radius.is_finite() {
        return line;
    }

    Geodesic::Arc { center, radius }
}
