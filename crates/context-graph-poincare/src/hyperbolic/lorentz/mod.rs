//! Lorentz (hyperboloid) kernel.
//!
//! # Hyperboloid Model
//!
//! Hyperbolic 8-space is the upper sheet of `<x, x>_L = -1` in Minkowski
//! space `R^(1,8)`, with `<x, y>_L = -x0 y0 + sum(xi yi)`. Distances are
//! `acosh(-<x, y>_L)`, and averaging is well-conditioned everywhere, which is
//! why the ball tree and Frechet means live here rather than in the disk.
//!
//! # Module Structure
//!
//! - `types`: `HyperboloidPoint` and the tangent-vector alias
//! - `ops`: Minkowski inner product, distance, boosts
//! - `maps`: exponential/logarithmic maps, interpolation, Frechet mean

mod maps;
mod ops;
mod types;


pub use self::maps::{
    centroid, centroid_with_iterations, exp_map, geodesic_lerp, log_map, midpoint,
    project_to_tangent, tangent_norm, DEFAULT_CENTROID_ITERATIONS,
};
pub use self::ops::{boost, boost_inv, distance, minkowski_inner};
pub use self::types::{HyperboloidPoint, TangentVector, LORENTZ_DIM, SPATIAL_DIM};
