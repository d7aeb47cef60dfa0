//! Deterministic test data.

use std::f64::consts::TAU;

use context_graph_poincare::{Complex, DiskPoint, LayoutTree, NodeId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `count` disk points with norms uniform in `[0, max_norm)`.
pub fn disk_points(seed: u64, count: usize, max_norm: f64) -> Vec<DiskPoint> {
    let mut rng = rng(seed);
    (0..count)
        .map(|_| Complex::polar(rng.gen_range(0.0..max_norm), rng.gen_range(0.0..TAU)))
        .collect()
}

/// Complete tree with `branching` children per node, `depth` levels below
/// the root. Ids are assigned breadth-first from 0.
pub fn complete_tree(branching: usize, depth: usize) -> LayoutTree {
    let mut tree = LayoutTree::new();
    tree.add_node(0, None).expect("root");
    let mut level: Vec<NodeId> = vec![0];
    let mut next: NodeId = 1;
    for _ in 0..depth {
        let mut children = Vec::with_capacity(level.len() * branching);
        for &parent in &level {
            for _ in 0..branching {
                tree.add_child(parent, next).expect("fresh id");
                children.push(next);
                next += 1;
            }
        }
        level = children;
    }
    tree
}

/// Random recursive tree: node `i` hangs under a uniformly chosen earlier
/// node.
pub fn random_tree(seed: u64, count: usize) -> LayoutTree {
    let mut rng = rng(seed);
    let mut tree = LayoutTree::new();
    tree.add_node(0, None).expect("root");
    for id in 1..count as NodeId {
        let parent = rng.gen_range(0..id);
        tree.add_child(parent, id).expect("fresh id");
    }
    tree
}
