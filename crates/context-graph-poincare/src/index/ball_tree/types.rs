//! Ball tree node and query result types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::hyperbolic::HyperboloidPoint;
use crate::NodeId;

/// Children of a node: two arena indices, or a range of the reordered point
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Internal { left: usize, right: usize },
    Leaf { start: usize, end: usize },
}

/// Bounding ball of a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallTreeNode {
    /// Frechet mean of the contained points.
    pub center: HyperboloidPoint,
    /// Maximum hyperbolic distance from `center` to a contained point.
    pub radius: f64,
    pub kind: NodeKind,
}

impl BallTreeNode {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// A query hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: NodeId,
    /// Hyperbolic distance to the query.
    pub distance: f64,
}

/// Work done by one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStats {
    /// Tree nodes whose bounding ball was tested.
    pub nodes_visited: usize,
    /// Leaf points whose distance to the query was computed.
    pub points_examined: usize,
}

/// Candidate in the k-NN max-heap: the farthest kept neighbour is on top.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate(pub Neighbor);

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // NaN ranks above everything so it is evicted first
        match (self.0.distance.is_nan(), other.0.distance.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .0
                .distance
                .partial_cmp(&other.0.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| self.0.id.cmp(&other.0.id)),
        }
    }
}

/// Ascending distance, ties broken by id.
#[inline]
pub(crate) fn by_distance(a: &Neighbor, b: &Neighbor) -> Ordering {
    a.distance.total_cmp(&b.distance).then_with(|| a.id.cmp(&b.id))
}
