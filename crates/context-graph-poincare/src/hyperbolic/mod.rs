//! Hyperbolic geometry kernels.
//!
//! - [`poincare`]: 2D Poincare disk (Mobius isometries, distance, geodesics,
//!   hyperbolic circles and horocycles)
//! - [`lorentz`]: hyperboloid model in `R^(1,8)` (Minkowski inner product,
//!   boosts, exp/log maps, Frechet mean)
//! - [`conversion`]: maps between the two models
//!
//! The disk is what gets drawn; the hyperboloid is where averaging and
//! indexing happen, because its formulas stay well-conditioned far from the
//! origin.

pub mod conversion;
pub mod lorentz;
pub mod poincare;

pub use conversion::{ball_to_hyperboloid, hyperboloid_to_ball, to_disk, to_hyperboloid};
pub use lorentz::{HyperboloidPoint, TangentVector, LORENTZ_DIM, SPATIAL_DIM};
pub use poincare::{DiskPoint, EuclideanCircle, Geodesic};
