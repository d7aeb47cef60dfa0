//! Layout configuration: BFS placement and pin relaxation.

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::error::GraphError;

/// Parameters for the breadth-first hyperbolic placement.
///
/// Children of a node at depth `d` sit at hyperbolic distance
/// `base_radius + d * radius_step` from it, spread over
/// `min(2*PI, spread_factor * PI * sqrt(child_count + 1))` radians.
///
/// # Example
/// ```
/// use context_graph_poincare::config::LayoutConfig;
///
/// let config = LayoutConfig::default();
/// assert_eq!(config.child_radius(0), 0.4);
/// assert!((config.child_radius(2) - 0.7).abs() < 1e-12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Hyperbolic parent-to-child distance at depth 0. Default: 0.4
    pub base_radius: f64,

    /// Added hyperbolic distance per depth level. Default: 0.15
    pub radius_step: f64,

    /// Angular spread multiplier (in units of PI). Default: 0.8
    pub spread_factor: f64,

    /// Hard cap on BFS dequeues. Guards against cyclic parent/child data.
    /// Default: 100_000
    pub max_iterations: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_radius: 0.4,
            radius_step: 0.15,
            spread_factor: 0.8,
            max_iterations: 100_000,
        }
    }
}

impl LayoutConfig {
    /// Hyperbolic distance between a node at `depth` and its children.
    #[inline]
    pub fn child_radius(&self, depth: usize) -> f64 {
        self.base_radius + depth as f64 * self.radius_step
    }

    /// Angular spread for `child_count` children, capped at a full turn.
    #[inline]
    pub fn angular_spread(&self, child_count: usize) -> f64 {
        let spread =
            self.spread_factor * std::f64::consts::PI * ((child_count + 1) as f64).sqrt();
        spread.min(std::f64::consts::TAU)
    }

    /// Validate placement parameters (fail-fast).
    pub fn validate(&self) -> Result<(), GraphError> {
        require_positive("base_radius", self.base_radius)?;
        if !self.radius_step.is_finite() || self.radius_step < 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "radius_step must be finite and non-negative (got {})",
                self.radius_step
            )));
        }
        require_positive("spread_factor", self.spread_factor)?;
        if self.max_iterations == 0 {
            return Err(GraphError::InvalidConfig(
                "max_iterations must be positive (got 0)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for force relaxation around pinned nodes.
///
/// Distances (`*_radius`, `attraction_rest`) are hyperbolic. `cell_size`
/// and `max_force` are Euclidean disk units.
///
/// # Example
/// ```
/// use context_graph_poincare::config::RelaxConfig;
///
/// let config = RelaxConfig::default();
/// assert_eq!(config.iterations, 20);
/// assert_eq!(config.related_depth, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelaxConfig {
    /// Number of relaxation passes. Default: 20
    pub iterations: usize,

    /// Global force multiplier. Default: 1.0
    pub strength: f64,

    /// Hop bound of the ancestor/descendant relation test. Default: 3
    pub related_depth: usize,

    /// Euclidean grid cell size used as the neighbour filter. Default: 0.1
    pub cell_size: f64,

    /// Pins push unrelated nodes closer than this away. Default: 0.2
    pub repulsion_radius: f64,

    /// Unpinned nodes closer than this push each other apart. Default: 0.12
    pub separation_radius: f64,

    /// Related nodes are pulled toward a pin until this distance. Default: 0.6
    pub attraction_rest: f64,

    /// Gain of the pin attraction. Default: 0.05
    pub attraction_gain: f64,

    /// Gain of the pin repulsion. Default: 0.04
    pub repulsion_gain: f64,

    /// Gain of the short-range separation. Default: 0.03
    pub separation_gain: f64,

    /// Clamp on the per-pass Euclidean translation of one node. Default: 0.08
    pub max_force: f64,
}

impl Default for RelaxConfig {
    fn default() -> Self {
        Self {
            iterations: 20,
            strength: 1.0,
            related_depth: 3,
            cell_size: 0.1,
            repulsion_radius: 0.2,
            separation_radius: 0.12,
            attraction_rest: 0.6,
            attraction_gain: 0.05,
            repulsion_gain: 0.04,
            separation_gain: 0.03,
            max_force: 0.08,
        }
    }
}

impl RelaxConfig {
    /// Default tuning with caller-supplied strength and pass count.
    pub fn with_strength(strength: f64, iterations: usize) -> Self {
        Self {
            strength,
            iterations,
            ..Default::default()
        }
    }

    /// Damping for pass `iteration`: decreases linearly from 1 toward 0.
    #[inline]
    pub fn damping(&self, iteration: usize) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        1.0 - iteration as f64 / self.iterations as f64
    }

    /// Validate relaxation parameters (fail-fast).
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.strength.is_finite() || self.strength < 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "strength must be finite and non-negative (got {})",
                self.strength
            )));
        }
        if self.related_depth == 0 {
            return Err(GraphError::InvalidConfig(
                "related_depth must be positive (got 0)".to_string(),
            ));
        }
        require_positive("cell_size", self.cell_size)?;
        require_positive("repulsion_radius", self.repulsion_radius)?;
        require_positive("separation_radius", self.separation_radius)?;
        require_positive("attraction_rest", self.attraction_rest)?;
        require_positive("attraction_gain", self.attraction_gain)?;
        require_positive("repulsion_gain", self.repulsion_gain)?;
        require_positive("separation_gain", self.separation_gain)?;
        require_positive("max_force", self.max_force)?;
        if self.max_force >= 1.0 {
            return Err(GraphError::InvalidConfig(format!(
                "max_force must stay inside the unit disk (got {})",
                self.max_force
            )));
        }
        Ok(())
    }
}
