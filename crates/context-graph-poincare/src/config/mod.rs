//! Configuration types for the geometry engine.
//!
//! This module provides configuration structures for:
//! - Hyperbolic ball tree construction (BallTreeConfig)
//! - Initial BFS placement of a hierarchy (LayoutConfig)
//! - Force relaxation around pinned nodes (RelaxConfig)
//! - The bundle of all three, loadable from JSON (EngineConfig)
//!
//! Every struct has a `Default` tuned for an interactive 60 Hz view and a
//! fail-fast `validate()` returning `GraphError::InvalidConfig`.

mod engine;
mod index;
mod layout;

pub use self::engine::EngineConfig;
pub use self::index::BallTreeConfig;
pub use self::layout::{LayoutConfig, RelaxConfig};

use crate::error::GraphError;

/// Reject NaN/infinite or non-positive values.
pub(crate) fn require_positive(field: &str, value: f64) -> Result<(), GraphError> {
    if !value.is_finite() {
        return Err(GraphError::InvalidConfig(format!(
            "{} must be finite (got {})",
            field, value
        )));
    }
    if value <= 0.0 {
        return Err(GraphError::InvalidConfig(format!(
            "{} must be positive (got {})",
            field, value
        )));
    }
    Ok(())
}
