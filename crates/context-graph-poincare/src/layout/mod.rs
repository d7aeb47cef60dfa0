//! Hierarchy layout in the Poincare disk.
//!
//! Two passes over caller-owned structure (see [`LayoutGraph`]):
//!
//! - [`layout_hyperbolic`] / [`layout`]: breadth-first placement along
//!   geodesics, each node's children fanned out away from its parent at a
//!   depth-dependent hyperbolic radius
//! - [`relayout_around_pins`] / [`relayout`]: iterative force relaxation
//!   around user-pinned anchors, with a Euclidean bucket grid as the
//!   neighbour filter
//!
//! Both write positions back through [`LayoutGraph::set_position`] and
//! never touch anything else on the graph.

mod grid;
mod placement;
mod relax;
mod types;


pub use self::placement::{layout, layout_hyperbolic, snapshot_positions};
pub use self::relax::{relayout, relayout_around_pins};
pub use self::types::{LayoutGraph, LayoutNode, LayoutReport, LayoutTree, RelaxReport};
