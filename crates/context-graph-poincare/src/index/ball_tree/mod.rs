//! Hyperbolic ball tree.
//!
//! Binary tree over [`HyperboloidPoint`](crate::hyperbolic::HyperboloidPoint)s
//! stored in a flat arena. Construction splits at the median of the ambient
//! coordinate with the greatest spread; every node carries the Frechet mean
//! of its points and the true maximum hyperbolic distance to them, so
//! queries can prune with the triangle inequality.
//!
//! # Example
//!
//! ```
//! use context_graph_poincare::config::BallTreeConfig;
//! use context_graph_poincare::hyperbolic::to_hyperboloid;
//! use context_graph_poincare::index::BallTree;
//! use context_graph_poincare::numeric::Complex;
//!
//! let points: Vec<_> = (0..50)
//!     .map(|i| to_hyperboloid(Complex::polar(0.02 * i as f64, i as f64)))
//!     .collect();
//! let ids: Vec<i64> = (0..50).collect();
//! let tree = BallTree::build(&points, &ids, &BallTreeConfig::default()).unwrap();
//!
//! let hits = tree.knn(&points[7], 3);
//! assert_eq!(hits[0].id, 7);
//! assert_eq!(hits.len(), 3);
//! ```

mod build;
mod query;
mod types;


pub use self::build::BallTree;
pub use self::types::{BallTreeNode, Neighbor, NodeKind, QueryStats};
