//! Breadth-first hyperbolic placement.

use std::collections::{HashMap, HashSet, VecDeque};
use std::f64::consts::TAU;

use tracing::{debug, warn};

use super::types::{LayoutGraph, LayoutReport};
use crate::config::LayoutConfig;
use crate::error::{GraphError, GraphResult};
use crate::hyperbolic::poincare::{mobius, mobius_inv};
use crate::hyperbolic::DiskPoint;
use crate::numeric::{Complex, EPSILON};
use crate::NodeId;

/// A node waiting in the BFS frontier.
#[derive(Debug, Clone, Copy)]
struct Seed {
    id: NodeId,
    depth: usize,
    position: DiskPoint,
    /// Where the node's parent sits; children are biased away from it.
    parent_position: Option<DiskPoint>,
}

/// Angles (in the node's local frame) for `count` children fanned over
/// `spread` radians around `base`.
///
/// Each child owns a `spread / count` sector and sits at its middle, so the
/// gap across the back of the fan is never smaller than the gap between
/// neighbours. A full turn divides the circle evenly.
fn fan_angles(base: f64, spread: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = spread.min(TAU) / count as f64;
    let first = base - step * (count - 1) as f64 / 2.0;
    (0..count).map(|i| first + i as f64 * step).collect()
}

/// Direction pointing away from the parent, measured in the local frame
/// centered on `position`. Roots use angle 0.
fn outward_angle(position: DiskPoint, parent_position: Option<DiskPoint>) -> f64 {
    match parent_position {
        Some(parent) => {
            let toward_parent = mobius(position, parent);
            if toward_parent.abs() < EPSILON {
                0.0
            } else {
                (-toward_parent).arg()
            }
        }
        None => 0.0,
    }
}

/// Run the BFS from `seeds` and write every placed position back once at
/// the end.
fn place<G: LayoutGraph + ?Sized>(
    graph: &mut G,
    seeds: Vec<Seed>,
    config: &LayoutConfig,
) -> LayoutReport {
    let mut report = LayoutReport::default();
    let mut positions: Vec<(NodeId, DiskPoint)> = Vec::new();
    let mut visited: HashSet<NodeId> = seeds.iter().map(|s| s.id).collect();
    let mut frontier: VecDeque<Seed> = seeds.into_iter().collect();
    let mut iterations = 0usize;

    while let Some(seed) = frontier.pop_front() {
        if iterations >= config.max_iterations {
            report.truncated = true;
            warn!(
                max_iterations = config.max_iterations,
                pending = frontier.len() + 1,
                "layout iteration cap reached, halting placement"
            );
            break;
        }
        iterations += 1;

        positions.push((seed.id, seed.position));
        report.placed += 1;
        report.max_depth = report.max_depth.max(seed.depth);

        let mut children = graph.children(seed.id);
        children.retain(|child| {
            if !graph.contains(*child) {
                return false;
            }
            if visited.insert(*child) {
                true
            } else {
                report.revisits += 1;
                false
            }
        });
        if children.is_empty() {
            continue;
        }

        let euclidean = (config.child_radius(seed.depth) / 2.0).tanh();
        let base = outward_angle(seed.position, seed.parent_position);
        let angles = fan_angles(base, config.angular_spread(children.len()), children.len());

        for (child, angle) in children.into_iter().zip(angles) {
            let local = Complex::polar(euclidean, angle);
            frontier.push_back(Seed {
                id: child,
                depth: seed.depth + 1,
                position: mobius_inv(seed.position, local),
                parent_position: Some(seed.position),
            });
        }
    }

    if report.revisits > 0 {
        warn!(
            revisits = report.revisits,
            "layout graph is not a tree: skipped links to already placed nodes"
        );
    }

    for (id, position) in positions {
        graph.set_position(id, position);
    }
    report
}

/// Place the subtree under `root`, with `root` at the disk origin.
///
/// Children of a node at depth `d` sit at hyperbolic distance
/// `config.child_radius(d)` from it, fanned over
/// `config.angular_spread(child_count)` radians away from the node's own
/// parent. Positions are computed in the node's local frame and mapped to
/// world coordinates with `mobius_inv(node, local)`.
///
/// Links to already placed nodes are skipped and counted in
/// `LayoutReport::revisits`; the iteration cap halts the traversal with a
/// warning and sets `truncated`.
///
/// # Errors
/// - `GraphError::InvalidConfig` for an invalid config
/// - `GraphError::NodeNotFound` if `root` is not in the graph
pub fn layout_hyperbolic<G: LayoutGraph + ?Sized>(
    graph: &mut G,
    root: NodeId,
    config: &LayoutConfig,
) -> GraphResult<LayoutReport> {
    config.validate()?;
    if !graph.contains(root) {
        return Err(GraphError::NodeNotFound(root));
    }

    let seeds = vec![Seed {
        id: root,
        depth: 0,
        position: Complex::ZERO,
        parent_position: None,
    }];
    let report = place(graph, seeds, config);
    debug!(
        root,
        placed = report.placed,
        max_depth = report.max_depth,
        truncated = report.truncated,
        "hyperbolic layout complete"
    );
    Ok(report)
}

/// Mark everything reachable from `start` through child links. Returns how
/// many nodes were newly marked.
fn mark_reachable<G: LayoutGraph + ?Sized>(graph: &G, start: NodeId, reached: &mut HashSet<NodeId>) -> usize {
    if !reached.insert(start) {
        return 0;
    }
    let mut marked = 1;
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        for child in graph.children(id) {
            if graph.contains(child) && reached.insert(child) {
                marked += 1;
                stack.push(child);
            }
        }
    }
    marked
}

/// One start node per component: the roots, then the first node (in
/// `node_ids` order) of every component no root reaches. The second value
/// counts the nodes only those extra starts reach.
fn component_starts<G: LayoutGraph + ?Sized>(graph: &G) -> (Vec<NodeId>, usize) {
    let mut starts = graph.roots();
    let mut reached = HashSet::new();
    for &root in &starts {
        mark_reachable(graph, root, &mut reached);
    }

    let mut detached = 0;
    for id in graph.node_ids() {
        if !reached.contains(&id) {
            detached += mark_reachable(graph, id, &mut reached);
            starts.push(id);
        }
    }
    (starts, detached)
}

/// Lay out the whole graph.
///
/// Every component gets a start node: its root, or for a component that no
/// root reaches (a cycle, or a graph where every node has a parent) its
/// first node. Such nodes are counted in `LayoutReport::detached` and
/// logged. A single start sits at the origin. Several starts are fanned
/// around the origin at `config.base_radius` as if they were children of a
/// virtual root.
pub fn layout<G: LayoutGraph + ?Sized>(graph: &mut G, config: &LayoutConfig) -> GraphResult<LayoutReport> {
    config.validate()?;
    let (starts, detached) = component_starts(graph);
    if detached > 0 {
        warn!(
            detached,
            components = starts.len(),
            "layout graph has nodes no root reaches, starting each such component from its first node"
        );
    }

    let mut report = match starts.as_slice() {
        [] => return Ok(LayoutReport::default()),
        [start] => layout_hyperbolic(graph, *start, config)?,
        _ => {
            let euclidean = (config.base_radius / 2.0).tanh();
            let angles = fan_angles(0.0, TAU, starts.len());
            let seeds = starts
                .iter()
                .zip(angles)
                .map(|(&id, angle)| Seed {
                    id,
                    depth: 0,
                    position: Complex::polar(euclidean, angle),
                    parent_position: Some(Complex::ZERO),
                })
                .collect();

            let report = place(graph, seeds, config);
            debug!(
                components = starts.len(),
                placed = report.placed,
                max_depth = report.max_depth,
                "forest layout complete"
            );
            report
        }
    };
    report.detached = detached;
    Ok(report)
}

/// Current positions keyed by id. Unplaced nodes are left out.
pub fn snapshot_positions<G: LayoutGraph + ?Sized>(graph: &G) -> HashMap<NodeId, DiskPoint> {
    graph
        .node_ids()
        .into_iter()
        .filter_map(|id| graph.position(id).map(|p| (id, p)))
        .collect()
}
