//! Layout graph access and report types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::hyperbolic::{to_hyperboloid, DiskPoint, HyperboloidPoint};
use crate::numeric::Complex;
use crate::NodeId;

/// Read access to a caller-owned hierarchy, plus position write-back.
///
/// The engine never takes ownership of the graph. Positions are the only
/// thing it writes, and it writes them once per pass.
pub trait LayoutGraph {
    /// True if `id` is a node of the graph.
    fn contains(&self, id: NodeId) -> bool;

    /// Parent of `id`, `None` for roots and unknown ids.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Children of `id` in display order. Empty for unknown ids.
    fn children(&self, id: NodeId) -> Vec<NodeId>;

    /// Current disk position, `None` if never placed.
    fn position(&self, id: NodeId) -> Option<DiskPoint>;

    /// Store a new position for `id`.
    fn set_position(&mut self, id: NodeId, position: DiskPoint);

    /// Every node id, in a stable order.
    fn node_ids(&self) -> Vec<NodeId>;

    /// Nodes without a (known) parent.
    fn roots(&self) -> Vec<NodeId> {
        self.node_ids()
            .into_iter()
            .filter(|&id| self.parent(id).map_or(true, |p| !self.contains(p)))
            .collect()
    }
}

/// One node of a [`LayoutTree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: NodeId,
    /// Hops from the root.
    pub depth: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Assigned by the layout engine; the origin until then.
    pub position: DiskPoint,
}

impl LayoutNode {
    /// Position lifted onto the hyperboloid, e.g. for ball tree indexing.
    #[inline]
    pub fn lifted(&self) -> HyperboloidPoint {
        to_hyperboloid(self.position)
    }
}

/// In-memory forest implementing [`LayoutGraph`].
///
/// Nodes are added parent first, so the structure is always a forest.
///
/// # Example
///
/// ```
/// use context_graph_poincare::layout::{layout, LayoutTree};
/// use context_graph_poincare::config::LayoutConfig;
///
/// let mut tree = LayoutTree::new();
/// tree.add_node(1, None).unwrap();
/// tree.add_node(2, Some(1)).unwrap();
/// tree.add_node(3, Some(1)).unwrap();
///
/// let report = layout(&mut tree, &LayoutConfig::default()).unwrap();
/// assert_eq!(report.placed, 3);
/// assert_eq!(tree.get(3).unwrap().depth, 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutTree {
    nodes: HashMap<NodeId, LayoutNode>,
    order: Vec<NodeId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` under `parent` (or as a root).
    ///
    /// # Errors
    /// - `GraphError::DuplicateNode` if `id` already exists
    /// - `GraphError::NodeNotFound` if `parent` does not exist
    pub fn add_node(&mut self, id: NodeId, parent: Option<NodeId>) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        let depth = match parent {
            Some(p) => {
                let parent_node = self.nodes.get_mut(&p).ok_or(GraphError::NodeNotFound(p))?;
                parent_node.children.push(id);
                parent_node.depth + 1
            }
            None => 0,
        };
        self.nodes.insert(
            id,
            LayoutNode {
                id,
                depth,
                parent,
                children: Vec::new(),
                position: Complex::ZERO,
            },
        );
        self.order.push(id);
        Ok(())
    }

    /// Shorthand for `add_node(child, Some(parent))`.
    #[inline]
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> GraphResult<()> {
        self.add_node(child, Some(parent))
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutNode> + '_ {
        self.order.iter().filter_map(move |id| self.nodes.get(id))
    }
}

impl LayoutGraph for LayoutTree {
    fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&id)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn position(&self, id: NodeId) -> Option<DiskPoint> {
        self.nodes.get(&id).map(|n| n.position)
    }

    fn set_position(&mut self, id: NodeId, position: DiskPoint) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.position = position;
        }
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.order.clone()
    }
}

/// Outcome of a placement run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Nodes that received a position.
    pub placed: usize,
    /// Deepest level reached.
    pub max_depth: usize,
    /// True if the iteration cap stopped the traversal.
    pub truncated: bool,
    /// Child links that pointed at an already placed node (cycles or shared
    /// children). Each was skipped.
    pub revisits: usize,
    /// Nodes no root reaches. Set by `layout`, which starts each such
    /// component from its first node.
    pub detached: usize,
}

/// Outcome of a relaxation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RelaxReport {
    /// Passes executed.
    pub iterations: usize,
    /// Nodes whose position changed.
    pub moved: usize,
    /// Largest hyperbolic distance a node moved in a single pass.
    pub max_step: f64,
}
