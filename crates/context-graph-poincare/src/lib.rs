//! Hyperbolic Geometry and Spatial Indexing for Poincare-Disk Graph Views
//!
//! This crate is the mathematical core behind a knowledge-graph view drawn
//! in the Poincare disk: exact disk and hyperboloid geometry, conversion
//! between the two models, a hyperbolic ball tree for neighbour queries, and
//! a layout engine that embeds a hierarchy along geodesics.
//!
//! # Architecture
//!
//! - **numeric**: panic-free complex arithmetic and floating-point guards
//! - **hyperbolic**: Poincare disk kernel, Lorentz kernel, model conversion
//! - **index**: hyperbolic ball tree (k-NN and range queries)
//! - **layout**: BFS placement and force relaxation around pinned nodes
//! - **cache**: explicit per-view memoization
//! - **config**: serde-loadable tunables with fail-fast validation
//! - **error**: GraphError for the structural (non-numeric) surface
//!
//! The geometry kernel is total: NaN, infinities and points on or past the
//! unit circle never panic and never propagate. Distances degrade to
//! `f64::INFINITY`, positions are clamped inside the disk.
//!
//! # Example
//!
//! ```
//! use context_graph_poincare::{distance, mobius, Complex};
//!
//! let a = Complex::new(0.5, 0.0);
//! let b = Complex::new(0.0, 0.5);
//! let d = distance(a, b);
//! // Mobius transforms are isometries
//! let camera = Complex::new(-0.2, 0.3);
//! assert!((distance(mobius(camera, a), mobius(camera, b)) - d).abs() < 1e-9);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod hyperbolic;
pub mod index;
pub mod layout;
pub mod numeric;

/// Identifier of a graph node, matching the i64 ids of the graph storage.
pub type NodeId = i64;

// Re-exports for convenience
pub use cache::{project_positions, ProjectionCache, ViewCache, ViewKey};
pub use config::{BallTreeConfig, EngineConfig, LayoutConfig, RelaxConfig};
pub use error::{GraphError, GraphResult};
pub use hyperbolic::lorentz::{
    boost, centroid, distance as lorentz_distance, exp_map, log_map, minkowski_inner,
};
pub use hyperbolic::poincare::{
    distance, geodesic_arc, geodesic_lerp, horocycle, hyp_circle, mobius, mobius_inv,
};
pub use hyperbolic::{
    to_disk, to_hyperboloid, DiskPoint, EuclideanCircle, Geodesic, HyperboloidPoint,
};
pub use index::{BallTree, Neighbor};
pub use layout::{
    layout, layout_hyperbolic, relayout, relayout_around_pins, LayoutGraph, LayoutNode,
    LayoutReport, LayoutTree, RelaxReport,
};
pub use numeric::Complex;
