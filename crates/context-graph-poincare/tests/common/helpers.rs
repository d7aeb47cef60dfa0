//! Oracles and invariant checks.

use std::collections::HashSet;

use context_graph_poincare::hyperbolic::lorentz;
use context_graph_poincare::{HyperboloidPoint, LayoutTree, Neighbor, NodeId};

/// All points sorted by distance to `query` (ties by id).
pub fn brute_force(points: &[HyperboloidPoint], ids: &[NodeId], query: &HyperboloidPoint) -> Vec<Neighbor> {
    let mut all: Vec<Neighbor> = points
        .iter()
        .zip(ids)
        .map(|(p, &id)| Neighbor {
            id,
            distance: lorentz::distance(query, p),
        })
        .collect();
    all.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.id.cmp(&b.id)));
    all
}

pub fn ids_of(hits: &[Neighbor]) -> HashSet<NodeId> {
    hits.iter().map(|n| n.id).collect()
}

/// Panics unless every node sits strictly inside the unit disk.
pub fn assert_all_in_disk(tree: &LayoutTree) {
    for node in tree.iter() {
        assert!(node.position.is_finite(), "node {} not finite", node.id);
        assert!(node.position.abs() < 1.0, "node {} at {:?}", node.id, node.position);
    }
}
