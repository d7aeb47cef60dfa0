//! HyperboloidPoint type definition.

use serde::{Deserialize, Serialize};

use super::ops::minkowski_inner;

/// Ambient dimension `n + 1` of the hyperboloid (`n = 8`).
pub const LORENTZ_DIM: usize = 9;

/// Number of spatial (non-timelike) components.
pub const SPATIAL_DIM: usize = LORENTZ_DIM - 1;

/// Tangent vector in ambient coordinates.
pub type TangentVector = [f64; LORENTZ_DIM];

/// Point on the upper sheet of the hyperboloid `<x, x>_L = -1`, `x0 > 0`.
///
/// # Constraint
///
/// `-x0^2 + sum(xi^2) = -1` with `x0 >= 1`. Transforms drift off the sheet
/// numerically; [`HyperboloidPoint::normalized`] re-projects.
///
/// # Example
///
/// ```
/// use context_graph_poincare::hyperbolic::HyperboloidPoint;
///
/// let origin = HyperboloidPoint::origin();
/// assert_eq!(origin.time(), 1.0);
/// assert!(origin.is_valid());
///
/// let mut spatial = [0.0; 8];
/// spatial[0] = 0.75;
/// let p = HyperboloidPoint::from_spatial(&spatial);
/// assert!((p.time() - 1.25).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HyperboloidPoint {
    /// `coords[0]` is the timelike component.
    pub coords: [f64; LORENTZ_DIM],
}

impl Default for HyperboloidPoint {
    /// The canonical origin `(1, 0, ..., 0)`.
    fn default() -> Self {
        Self::origin()
    }
}

impl HyperboloidPoint {
    /// The canonical origin `e0 = (1, 0, ..., 0)`.
    #[inline]
    pub fn origin() -> Self {
        let mut coords = [0.0; LORENTZ_DIM];
        coords[0] = 1.0;
        Self { coords }
    }

    /// Wrap raw ambient coordinates without validation.
    ///
    /// Use [`HyperboloidPoint::normalized`] if the coordinates may be off the
    /// sheet.
    #[inline]
    pub fn from_coords(coords: [f64; LORENTZ_DIM]) -> Self {
        Self { coords }
    }

    /// Point with the given spatial part, time component solved from the
    /// sheet equation.
    pub fn from_spatial(spatial: &[f64; SPATIAL_DIM]) -> Self {
        let mut coords = [0.0; LORENTZ_DIM];
        coords[1..].copy_from_slice(spatial);
        Self { coords }.normalized()
    }

    /// Timelike component `x0`.
    #[inline]
    pub fn time(&self) -> f64 {
        self.coords[0]
    }

    /// Spatial components `x1..x8`.
    #[inline]
    pub fn spatial(&self) -> &[f64] {
        &self.coords[1..]
    }

    /// Euclidean squared norm of the spatial part.
    #[inline]
    pub fn spatial_norm_sq(&self) -> f64 {
        self.spatial().iter().map(|x| x * x).sum()
    }

    /// `<x, x>_L`; `-1` on the sheet.
    #[inline]
    pub fn minkowski_norm_sq(&self) -> f64 {
        minkowski_inner(&self.coords, &self.coords)
    }

    /// `<self, other>_L`.
    #[inline]
    pub fn inner(&self, other: &HyperboloidPoint) -> f64 {
        minkowski_inner(&self.coords, &other.coords)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Finite, upper sheet, and on the hyperboloid up to relative `1e-9`.
    pub fn is_valid(&self) -> bool {
        if !self.is_finite() || self.time() < 1.0 - 1e-12 {
            return false;
        }
        let scale = self.time() * self.time();
        (self.minkowski_norm_sq() + 1.0).abs() <= 1e-9 * scale.max(1.0)
    }

    /// Re-project onto the upper sheet: keep the spatial part and set
    /// `x0 = sqrt(1 + |x_s|^2)`.
    ///
    /// Non-finite points collapse to the origin.
    pub fn normalized(&self) -> Self {
        if !self.is_finite() {
            return Self::origin();
        }
        let mut coords = self.coords;
        coords[0] = (1.0 + self.spatial_norm_sq()).sqrt();
        if !coords[0].is_finite() {
            return Self::origin();
        }
        Self { coords }
    }
}
