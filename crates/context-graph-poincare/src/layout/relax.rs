//! Force relaxation around pinned nodes.
//!
//! Pins attract structurally related nodes (ancestors or descendants within
//! `related_depth` hops, and siblings) and push unrelated nodes out of
//! their neighbourhood. Unpinned nodes also keep a short separation from
//! each other. Forces are expressed in each node's local frame and applied
//! as Mobius translations, so a step has the same hyperbolic size anywhere
//! in the disk.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use super::grid::SpatialGrid;
use super::types::{LayoutGraph, RelaxReport};
use crate::config::RelaxConfig;
use crate::error::{GraphError, GraphResult};
use crate::hyperbolic::poincare::{distance, mobius, mobius_inv};
use crate::hyperbolic::DiskPoint;
use crate::numeric::{Complex, EPSILON};
use crate::NodeId;

/// Golden angle; spreads the fallback directions of coincident nodes.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// A pinned node and the indices it attracts.
struct Pin {
    index: usize,
    related: HashSet<usize>,
}

/// Nodes related to `pin`: ancestors and descendants within `depth` hops,
/// plus siblings.
fn related_nodes<G: LayoutGraph + ?Sized>(graph: &G, pin: NodeId, depth: usize) -> HashSet<NodeId> {
    let mut related = HashSet::new();

    let mut current = pin;
    for _ in 0..depth {
        match graph.parent(current) {
            Some(parent) if parent != pin && related.insert(parent) => current = parent,
            _ => break,
        }
    }

    if let Some(parent) = graph.parent(pin) {
        related.extend(graph.children(parent).into_iter().filter(|&c| c != pin));
    }

    let mut frontier = VecDeque::from([(pin, 0usize)]);
    let mut seen = HashSet::from([pin]);
    while let Some((id, hops)) = frontier.pop_front() {
        if hops == depth {
            continue;
        }
        for child in graph.children(id) {
            if seen.insert(child) {
                related.insert(child);
                frontier.push_back((child, hops + 1));
            }
        }
    }
    related
}

/// Unit vector from node `i` toward node `j` in the local frame at `from`.
///
/// Coincident points get a deterministic fallback direction that flips with
/// the order of the pair, so the two nodes move apart.
#[inline]
fn local_direction(from: DiskPoint, to: DiskPoint, i: usize, j: usize) -> Complex {
    let local = mobius(from, to);
    if local.abs() >= EPSILON {
        return local.normalize();
    }
    let (lo, hi) = (i.min(j), i.max(j));
    let fallback = Complex::polar(1.0, (lo * 31 + hi) as f64 * GOLDEN_ANGLE);
    if i < j {
        fallback
    } else {
        -fallback
    }
}

/// Relax positions around `pinned` nodes.
///
/// Runs `config.iterations` passes. Pass `i` scales forces by
/// `config.strength * config.damping(i)` and clamps each node's step to
/// `config.max_force`. Pinned nodes and nodes without a position never
/// move. New positions are buffered and written back once per pass.
///
/// # Errors
/// - `GraphError::InvalidConfig` for an invalid config
/// - `GraphError::NodeNotFound` for a pinned id missing from the graph
pub fn relayout_around_pins<G: LayoutGraph + ?Sized>(
    graph: &mut G,
    pinned: &[NodeId],
    config: &RelaxConfig,
) -> GraphResult<RelaxReport> {
    config.validate()?;
    if let Some(&missing) = pinned.iter().find(|&&id| !graph.contains(id)) {
        return Err(GraphError::NodeNotFound(missing));
    }

    let mut ids = Vec::new();
    let mut positions = Vec::new();
    for id in graph.node_ids() {
        if let Some(position) = graph.position(id) {
            ids.push(id);
            positions.push(position);
        }
    }
    let index_of: HashMap<NodeId, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    let pins: Vec<Pin> = pinned
        .iter()
        .filter_map(|id| index_of.get(id).map(|&index| (index, *id)))
        .map(|(index, id)| Pin {
            index,
            related: related_nodes(&*graph, id, config.related_depth)
                .into_iter()
                .filter_map(|r| index_of.get(&r).copied())
                .collect(),
        })
        .collect();
    let pinned_set: HashSet<usize> = pins.iter().map(|p| p.index).collect();

    let initial = positions.clone();
    let mut report = RelaxReport::default();
    let reach_radius = config.repulsion_radius.max(config.separation_radius);

    for pass in 0..config.iterations {
        let scale = config.strength * config.damping(pass);
        if scale <= 0.0 {
            report.iterations += 1;
            continue;
        }

        let grid = SpatialGrid::build(config.cell_size, &positions);
        let reach = grid.reach_for((reach_radius / 2.0).tanh());
        let mut next = positions.clone();

        for (j, &here) in positions.iter().enumerate() {
            if pinned_set.contains(&j) {
                continue;
            }
            let mut force = Complex::ZERO;

            for pin in &pins {
                if !pin.related.contains(&j) {
                    continue;
                }
                let d = distance(here, positions[pin.index]);
                if d > config.attraction_rest {
                    let toward = local_direction(here, positions[pin.index], j, pin.index);
                    force = force + toward.scale(config.attraction_gain * (d - config.attraction_rest));
                }
            }

            for k in grid.neighbors(here, reach) {
                if k == j {
                    continue;
                }
                let d = distance(here, positions[k]);
                let (radius, gain) = if pinned_set.contains(&k) {
                    let unrelated = pins
                        .iter()
                        .find(|p| p.index == k)
                        .map_or(true, |p| !p.related.contains(&j));
                    if !unrelated {
                        continue;
                    }
                    (config.repulsion_radius, config.repulsion_gain)
                } else {
                    (config.separation_radius, config.separation_gain)
                };
                if d < radius {
                    let away = -local_direction(here, positions[k], j, k);
                    force = force + away.scale(gain * (radius - d) / radius);
                }
            }

            let mut step = force.scale(scale);
            let magnitude = step.abs();
            if magnitude > config.max_force {
                step = step.scale(config.max_force / magnitude);
            }
            if step.abs() > EPSILON {
                next[j] = mobius_inv(here, step);
                report.max_step = report.max_step.max(distance(here, next[j]));
            }
        }

        positions = next;
        for (id, &position) in ids.iter().zip(&positions) {
            graph.set_position(*id, position);
        }
        report.iterations += 1;
    }

    report.moved = initial
        .iter()
        .zip(&positions)
        .filter(|(a, b)| (**a - **b).abs() > EPSILON)
        .count();
    debug!(
        pins = pins.len(),
        iterations = report.iterations,
        moved = report.moved,
        max_step = report.max_step,
        "pin relaxation complete"
    );
    Ok(report)
}

/// Relax around `pinned` with default tuning, overriding strength and pass
/// count.
///
/// ```
/// use context_graph_poincare::config::LayoutConfig;
/// use context_graph_poincare::layout::{layout, relayout, LayoutTree};
///
/// let mut tree = LayoutTree::new();
/// tree.add_node(0, None).unwrap();
/// for child in 1..=4 {
///     tree.add_child(0, child).unwrap();
/// }
/// layout(&mut tree, &LayoutConfig::default()).unwrap();
///
/// let report = relayout(&mut tree, &[1], 1.0, 20).unwrap();
/// assert_eq!(report.iterations, 20);
/// ```
pub fn relayout<G: LayoutGraph + ?Sized>(
    graph: &mut G,
    pinned: &[NodeId],
    strength: f64,
    iterations: usize,
) -> GraphResult<RelaxReport> {
    relayout_around_pins(graph, pinned, &RelaxConfig::with_strength(strength, iterations))
}
