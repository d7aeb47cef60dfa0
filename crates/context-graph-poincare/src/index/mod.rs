//! Spatial indexes over hyperbolic points.
//!
//! The only index is the hyperbolic ball tree: an immutable snapshot built
//! once per point set and rebuilt, not patched, when the set changes.

pub mod ball_tree;

pub use self::ball_tree::{BallTree, BallTreeNode, Neighbor, NodeKind, QueryStats};
