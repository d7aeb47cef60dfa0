//! Hyperbolic circles and horocycles, in Euclidean form for drawing.

use serde::{Deserialize, Serialize};

use super::ops::mobius_inv;
use super::DiskPoint;
use crate::numeric::{clamp_to_disk, finite_or, Complex, EPSILON, MAX_DISK_NORM};

/// Euclidean circle in disk coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EuclideanCircle {
    pub center: Complex,
    pub radius: f64,
}

impl EuclideanCircle {
    /// True if `z` lies inside or on the circle (Euclidean test).
    #[inline]
    pub fn contains(&self, z: DiskPoint) -> bool {
        (z - self.center).abs() <= self.radius + EPSILON
    }

    /// Point of the circle at angle `theta` around its center.
    #[inline]
    pub fn point_at(&self, theta: f64) -> Complex {
        self.center + Complex::polar(self.radius, theta)
    }
}

/// Hyperbolic circle of radius `rho` around `center`.
///
/// Around the origin the Euclidean radius is `tanh(rho / 2)`. Off-center
/// circles are Mobius images of that circle under
/// `mobius_inv(center, .)`, which are again Euclidean circles symmetric
/// about the line through the origin and `center`. The nearest and farthest
/// images of the radius along that line give the Euclidean diameter.
///
/// Negative or non-finite `rho` is treated as 0.
///
/// # Example
///
/// ```
/// use context_graph_poincare::hyperbolic::poincare::hyp_circle;
/// use context_graph_poincare::numeric::Complex;
///
/// let c = hyp_circle(Complex::ZERO, 1.0);
/// assert!((c.radius - 0.5f64.tanh()).abs() < 1e-12);
/// ```
pub fn hyp_circle(center: DiskPoint, rho: f64) -> EuclideanCircle {
    let center = clamp_to_disk(center);
    let rho = finite_or(rho, 0.0).max(0.0);
    let t = (rho / 2.0).tanh().min(MAX_DISK_NORM);

    if center.abs() < EPSILON {
        return EuclideanCircle {
            center: Complex::ZERO,
            radius: t,
        };
    }

    let direction = center.normalize();
    let near = mobius_inv(center, direction.scale(-t));
    let far = mobius_inv(center, direction.scale(t));

    EuclideanCircle {
        center: (near + far).scale(0.5),
        radius: (far - near).abs() / 2.0,
    }
}

/// Horocycle of Euclidean radius `radius` tangent to the unit circle at the
/// ideal point in direction `ideal`.
///
/// `ideal` is normalized (the origin falls back to `1 + 0i`) and `radius`
/// is clamped to `[EPSILON, MAX_DISK_NORM]`.
///
/// ```
/// use context_graph_poincare::hyperbolic::poincare::horocycle;
/// use context_graph_poincare::numeric::Complex;
///
/// let h = horocycle(Complex::new(0.0, 1.0), 0.25);
/// assert!((h.center - Complex::new(0.0, 0.75)).abs() < 1e-12);
/// ```
pub fn horocycle(ideal: Complex, radius: f64) -> EuclideanCircle {
    let mut direction = ideal.sanitized().normalize();
    if direction == Complex::ZERO {
        direction = Complex::ONE;
    }
    let radius = finite_or(radius, 0.5).clamp(EPSILON, MAX_DISK_NORM);

    EuclideanCircle {
        center: direction.scale(1.0 - radius),
        radius,
    }
}
