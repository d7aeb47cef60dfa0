//! Poincare disk kernel.
//!
//! # Poincare Disk Model
//!
//! The hyperbolic plane is the open unit disk `|z| < 1` with metric
//! `ds = 2|dz| / (1 - |z|^2)`. Points near the boundary are infinitely far
//! from the origin, which is what lets an exponentially growing hierarchy
//! fit on screen.
//!
//! # Mathematics
//!
//! - Mobius isometry: `T_a(z) = (z - a) / (1 - conj(a) z)`, `T_a(a) = 0`
//! - Distance: `d(z, w) = 2 atanh(|z - w| / |1 - conj(z) w|)`
//! - Geodesics: diameters, or circular arcs orthogonal to the unit circle
//!   (`|c|^2 - r^2 = 1`)
//!
//! Every function here is total: results are clamped to
//! `|z| <= MAX_DISK_NORM`, and invalid input falls back to the origin (or
//! `INFINITY` for distances).
//!
//! # Module Structure
//!
//! - `ops`: Mobius transforms and distance
//! - `geodesic`: interpolation and arc fitting
//! - `circles`: hyperbolic circles and horocycles

mod circles;
mod geodesic;
mod ops;

#[cfg(test)]
mod tests;
#[cfg(test)]
mod tests_geodesic;

use crate::numeric::Complex;

/// Point of the Poincare disk. Invariant `re^2 + im^2 < 1` is maintained
/// by every kernel function that returns one.
pub type DiskPoint = Complex;

pub use self::circles::{horocycle, hyp_circle, EuclideanCircle};
pub use self::geodesic::{geodesic_arc, geodesic_lerp, midpoint, ArcSweep, Geodesic};
pub use self::ops::{distance, distance_from_origin, is_valid, mobius, mobius_inv};
