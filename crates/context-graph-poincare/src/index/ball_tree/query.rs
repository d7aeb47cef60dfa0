//! k-nearest-neighbour and range queries.

use std::collections::BinaryHeap;

use tracing::trace;

use super::build::BallTree;
use super::types::{by_distance, Candidate, Neighbor, NodeKind, QueryStats};
use crate::hyperbolic::lorentz::distance;
use crate::hyperbolic::HyperboloidPoint;

/// Tolerance added to pruning bounds. `acosh` near 1 loses about half the
/// digits, so the triangle inequality only holds up to ~1e-8 in floating
/// point.
const PRUNE_SLACK: f64 = 1e-7;

struct KnnSearch<'a> {
    tree: &'a BallTree,
    query: HyperboloidPoint,
    k: usize,
    heap: BinaryHeap<Candidate>,
    stats: QueryStats,
}

impl KnnSearch<'_> {
    fn bound(&self) -> f64 {
        if self.heap.len() < self.k {
            f64::INFINITY
        } else {
            self.heap.peek().map_or(f64::INFINITY, |c| c.0.distance)
        }
    }

    fn offer(&mut self, neighbor: Neighbor) {
        let candidate = Candidate(neighbor);
        if self.heap.len() < self.k {
            self.heap.push(candidate);
        } else if let Some(worst) = self.heap.peek() {
            if candidate < *worst {
                self.heap.pop();
                self.heap.push(candidate);
            }
        }
    }

    /// Visit `index` given its precomputed center distance.
    fn visit(&mut self, index: usize, center_distance: f64) {
        self.stats.nodes_visited += 1;
        let node = self.tree.nodes[index];
        if center_distance - node.radius > self.bound() + PRUNE_SLACK {
            return;
        }

        match node.kind {
            NodeKind::Leaf { start, end } => {
                for i in start..end {
                    self.stats.points_examined += 1;
                    let d = distance(&self.query, &self.tree.points[i]);
                    self.offer(Neighbor {
                        id: self.tree.ids[i],
                        distance: d,
                    });
                }
            }
            NodeKind::Internal { left, right } => {
                let dl = distance(&self.query, &self.tree.nodes[left].center);
                let dr = distance(&self.query, &self.tree.nodes[right].center);
                let near_first = dl - self.tree.nodes[left].radius <= dr - self.tree.nodes[right].radius;
                if near_first {
                    self.visit(left, dl);
                    self.visit(right, dr);
                } else {
                    self.visit(right, dr);
                    self.visit(left, dl);
                }
            }
        }
    }
}

impl BallTree {
    /// The `k` points nearest to `query`, closest first.
    ///
    /// Ties in distance are broken by id. Returns fewer than `k` hits when
    /// the tree holds fewer points.
    pub fn knn(&self, query: &HyperboloidPoint, k: usize) -> Vec<Neighbor> {
        self.knn_with_stats(query, k).0
    }

    /// [`BallTree::knn`] plus the work it did.
    pub fn knn_with_stats(&self, query: &HyperboloidPoint, k: usize) -> (Vec<Neighbor>, QueryStats) {
        let Some(root) = self.root() else {
            return (Vec::new(), QueryStats::default());
        };
        if k == 0 {
            return (Vec::new(), QueryStats::default());
        }

        let query = query.normalized();
        let mut search = KnnSearch {
            tree: self,
            query,
            k,
            heap: BinaryHeap::with_capacity(k.min(self.len()) + 1),
            stats: QueryStats::default(),
        };
        search.visit(0, distance(&query, &root.center));

        let stats = search.stats;
        let mut hits: Vec<Neighbor> = search.heap.into_iter().map(|c| c.0).collect();
        hits.sort_by(by_distance);
        trace!(
            k,
            found = hits.len(),
            nodes_visited = stats.nodes_visited,
            points_examined = stats.points_examined,
            "knn query"
        );
        (hits, stats)
    }

    /// Closest indexed point, `None` for an empty tree.
    #[inline]
    pub fn nearest(&self, query: &HyperboloidPoint) -> Option<Neighbor> {
        self.knn(query, 1).into_iter().next()
    }

    /// All points within hyperbolic distance `radius` of `query`, closest
    /// first.
    ///
    /// Negative or NaN radii match nothing.
    pub fn range_query(&self, query: &HyperboloidPoint, radius: f64) -> Vec<Neighbor> {
        self.range_query_with_stats(query, radius).0
    }

    /// [`BallTree::range_query`] plus the work it did.
    pub fn range_query_with_stats(
        &self,
        query: &HyperboloidPoint,
        radius: f64,
    ) -> (Vec<Neighbor>, QueryStats) {
        let mut stats = QueryStats::default();
        let mut hits = Vec::new();
        if self.nodes.is_empty() || radius.is_nan() || radius < 0.0 {
            return (hits, stats);
        }

        let query = query.normalized();
        let mut stack = vec![0usize];
        while let Some(index) = stack.pop() {
            stats.nodes_visited += 1;
            let node = &self.nodes[index];
            if distance(&query, &node.center) - node.radius > radius + PRUNE_SLACK {
                continue;
            }
            match node.kind {
                NodeKind::Leaf { start, end } => {
                    for i in start..end {
                        stats.points_examined += 1;
                        let d = distance(&query, &self.points[i]);
                        if d <= radius {
                            hits.push(Neighbor {
                                id: self.ids[i],
                                distance: d,
                            });
                        }
                    }
                }
                NodeKind::Internal { left, right } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }

        hits.sort_by(by_distance);
        trace!(
            radius,
            found = hits.len(),
            nodes_visited = stats.nodes_visited,
            points_examined = stats.points_examined,
            "range query"
        );
        (hits, stats)
    }
}
