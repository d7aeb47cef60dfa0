//! Seeded data generators for benchmarks.

use std::f64::consts::TAU;

use context_graph_poincare::{to_hyperboloid, Complex, DiskPoint, HyperboloidPoint, LayoutTree, NodeId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `count` disk points with norms uniform in `[0, 0.95)`.
pub fn disk_points(seed: u64, count: usize) -> Vec<DiskPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Complex::polar(rng.gen_range(0.0..0.95), rng.gen_range(0.0..TAU)))
        .collect()
}

/// Lifted disk points plus sequential ids.
pub fn indexed_points(seed: u64, count: usize) -> (Vec<HyperboloidPoint>, Vec<NodeId>) {
    let points = disk_points(seed, count).into_iter().map(to_hyperboloid).collect();
    let ids = (0..count as NodeId).collect();
    (points, ids)
}

/// Random recursive tree with `count` nodes.
pub fn random_tree(seed: u64, count: usize) -> LayoutTree {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tree = LayoutTree::new();
    tree.add_node(0, None).expect("root");
    for id in 1..count as NodeId {
        tree.add_child(rng.gen_range(0..id), id).expect("fresh id");
    }
    tree
}
