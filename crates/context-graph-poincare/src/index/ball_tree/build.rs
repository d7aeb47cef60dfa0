//! Ball tree construction.

use tracing::debug;

use super::types::{BallTreeNode, NodeKind};
use crate::config::BallTreeConfig;
use crate::error::{GraphError, GraphResult};
use crate::hyperbolic::lorentz::{centroid_with_iterations, distance};
use crate::hyperbolic::{HyperboloidPoint, LORENTZ_DIM};
use crate::NodeId;

type Entry = (HyperboloidPoint, NodeId);

/// Immutable hyperbolic ball tree.
///
/// Nodes live in a pre-order arena: a node's left child directly follows it.
/// Leaf ranges index into `points`/`ids`, which are stored in tree order.
#[derive(Debug, Clone)]
pub struct BallTree {
    pub(super) nodes: Vec<BallTreeNode>,
    pub(super) points: Vec<HyperboloidPoint>,
    pub(super) ids: Vec<NodeId>,
    config: BallTreeConfig,
}

static_assertions::assert_impl_all!(BallTree: Send, Sync);

impl BallTree {
    /// Build a tree over `points`, where `ids[i]` identifies `points[i]`.
    ///
    /// Points are re-projected onto the hyperboloid first. An empty input
    /// gives an empty tree.
    ///
    /// # Errors
    /// - `GraphError::DimensionMismatch` if `points.len() != ids.len()`
    /// - `GraphError::InvalidConfig` if the config is invalid
    pub fn build(
        points: &[HyperboloidPoint],
        ids: &[NodeId],
        config: &BallTreeConfig,
    ) -> GraphResult<Self> {
        Self::build_impl(points, ids, config, false)
    }

    /// Same as [`BallTree::build`], but subtrees holding at least
    /// `config.parallel_threshold` points are built on separate rayon tasks.
    ///
    /// The resulting tree is identical to the sequential build.
    pub fn build_parallel(
        points: &[HyperboloidPoint],
        ids: &[NodeId],
        config: &BallTreeConfig,
    ) -> GraphResult<Self> {
        Self::build_impl(points, ids, config, true)
    }

    fn build_impl(
        points: &[HyperboloidPoint],
        ids: &[NodeId],
        config: &BallTreeConfig,
        parallel: bool,
    ) -> GraphResult<Self> {
        if points.len() != ids.len() {
            return Err(GraphError::DimensionMismatch {
                expected: points.len(),
                actual: ids.len(),
            });
        }
        config.validate()?;

        let mut entries: Vec<Entry> = points
            .iter()
            .map(|p| p.normalized())
            .zip(ids.iter().copied())
            .collect();

        let nodes = if entries.is_empty() {
            Vec::new()
        } else {
            build_subtree(&mut entries, 0, config, parallel)
        };
        let (points, ids) = entries.into_iter().unzip();

        let tree = Self {
            nodes,
            points,
            ids,
            config: config.clone(),
        };
        debug!(
            points = tree.len(),
            nodes = tree.node_count(),
            depth = tree.depth(),
            leaf_size = config.leaf_size,
            parallel,
            "ball tree built"
        );
        Ok(tree)
    }

    /// Number of indexed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of arena nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in pre-order; index 0 is the root.
    #[inline]
    pub fn nodes(&self) -> &[BallTreeNode] {
        &self.nodes
    }

    /// Root node, `None` for an empty tree.
    #[inline]
    pub fn root(&self) -> Option<&BallTreeNode> {
        self.nodes.first()
    }

    /// Construction parameters.
    #[inline]
    pub fn config(&self) -> &BallTreeConfig {
        &self.config
    }

    /// Number of levels (0 for an empty tree, 1 for a single leaf).
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack = vec![(0usize, 1usize)];
        while let Some((index, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let NodeKind::Internal { left, right } = self.nodes[index].kind {
                stack.push((left, level + 1));
                stack.push((right, level + 1));
            }
        }
        deepest
    }
}

/// Build the subtree over `entries`, whose first element sits at `offset`
/// in the final point storage. Returns the subtree's nodes in pre-order with
/// indices relative to the subtree root.
fn build_subtree(
    entries: &mut [Entry],
    offset: usize,
    config: &BallTreeConfig,
    parallel: bool,
) -> Vec<BallTreeNode> {
    let points: Vec<HyperboloidPoint> = entries.iter().map(|(p, _)| *p).collect();
    let center = centroid_with_iterations(&points, config.centroid_iterations);
    let radius = points
        .iter()
        .map(|p| distance(&center, p))
        .fold(0.0, f64::max);

    if entries.len() <= config.leaf_size {
        return vec![BallTreeNode {
            center,
            radius,
            kind: NodeKind::Leaf {
                start: offset,
                end: offset + entries.len(),
            },
        }];
    }

    let axis = widest_axis(entries);
    let mid = entries.len() / 2;
    entries.select_nth_unstable_by(mid, |a, b| a.0.coords[axis].total_cmp(&b.0.coords[axis]));
    let (left_entries, right_entries) = entries.split_at_mut(mid);

    let (left, right) = if parallel && left_entries.len() + right_entries.len() >= config.parallel_threshold {
        rayon::join(
            || build_subtree(left_entries, offset, config, parallel),
            || build_subtree(right_entries, offset + mid, config, parallel),
        )
    } else {
        (
            build_subtree(left_entries, offset, config, parallel),
            build_subtree(right_entries, offset + mid, config, parallel),
        )
    };

    let mut nodes = Vec::with_capacity(1 + left.len() + right.len());
    nodes.push(BallTreeNode {
        center,
        radius,
        kind: NodeKind::Internal {
            left: 1,
            right: 1 + left.len(),
        },
    });
    append_shifted(&mut nodes, left);
    append_shifted(&mut nodes, right);
    nodes
}

/// Append a subtree's nodes, rebasing its internal child indices.
fn append_shifted(nodes: &mut Vec<BallTreeNode>, subtree: Vec<BallTreeNode>) {
    let shift = nodes.len();
    nodes.extend(subtree.into_iter().map(|mut node| {
        if let NodeKind::Internal { left, right } = node.kind {
            node.kind = NodeKind::Internal {
                left: left + shift,
                right: right + shift,
            };
        }
        node
    }));
}

/// Ambient coordinate with the largest max - min spread.
fn widest_axis(entries: &[Entry]) -> usize {
    let mut lo = [f64::INFINITY; LORENTZ_DIM];
    let mut hi = [f64::NEG_INFINITY; LORENTZ_DIM];
    for (p, _) in entries {
        for (axis, &x) in p.coords.iter().enumerate() {
            lo[axis] = lo[axis].min(x);
            hi[axis] = hi[axis].max(x);
        }
    }
    (0..LORENTZ_DIM)
        .max_by(|&a, &b| (hi[a] - lo[a]).total_cmp(&(hi[b] - lo[b])))
        .unwrap_or(0)
}
