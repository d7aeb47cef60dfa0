//! Hyperbolic ball tree configuration.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Construction parameters for [`BallTree`](crate::index::BallTree).
///
/// # Example
/// ```
/// use context_graph_poincare::config::BallTreeConfig;
///
/// let config = BallTreeConfig::default();
/// assert_eq!(config.leaf_size, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BallTreeConfig {
    /// Maximum number of points stored in a leaf bucket. Default: 8.
    pub leaf_size: usize,

    /// Tangent-averaging steps used for each node's Frechet-mean center.
    /// Default: 5.
    pub centroid_iterations: usize,

    /// Subtrees with at least this many points are built on separate rayon
    /// tasks by `BallTree::build_parallel`. Default: 2048.
    pub parallel_threshold: usize,
}

impl Default for BallTreeConfig {
    fn default() -> Self {
        Self {
            leaf_size: 8,
            centroid_iterations: 5,
            parallel_threshold: 2048,
        }
    }
}

impl BallTreeConfig {
    /// Config with a custom leaf size, other fields default.
    ///
    /// ```
    /// use context_graph_poincare::config::BallTreeConfig;
    /// let config = BallTreeConfig::with_leaf_size(10);
    /// assert_eq!(config.leaf_size, 10);
    /// assert_eq!(config.centroid_iterations, 5);
    /// ```
    pub fn with_leaf_size(leaf_size: usize) -> Self {
        Self {
            leaf_size,
            ..Default::default()
        }
    }

    /// Validate construction parameters.
    ///
    /// # Errors
    /// `GraphError::InvalidConfig` if `leaf_size` or `parallel_threshold` is 0.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.leaf_size == 0 {
            return Err(GraphError::InvalidConfig(
                "leaf_size must be positive (got 0)".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(GraphError::InvalidConfig(
                "parallel_threshold must be positive (got 0)".to_string(),
            ));
        }
        Ok(())
    }
}
