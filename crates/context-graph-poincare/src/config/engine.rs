//! Bundled engine configuration.

use serde::{Deserialize, Serialize};

use super::{BallTreeConfig, LayoutConfig, RelaxConfig};
use crate::error::{GraphError, GraphResult};

/// All tunables of the engine in one serializable document.
///
/// Missing sections fall back to their defaults when parsed from JSON.
///
/// # Example
/// ```
/// use context_graph_poincare::config::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "index": { "leaf_size": 10,
///     "centroid_iterations": 5, "parallel_threshold": 4096 } }"#).unwrap();
/// assert_eq!(config.index.leaf_size, 10);
/// assert_eq!(config.relax.iterations, 20);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub index: BallTreeConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub relax: RelaxConfig,
}

impl EngineConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    /// - `GraphError::Serialization` for malformed JSON
    /// - `GraphError::InvalidConfig` for out-of-range values
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every section, returning the first error.
    pub fn validate(&self) -> Result<(), GraphError> {
        self.index.validate()?;
        self.layout.validate()?;
        self.relax.validate()?;
        Ok(())
    }
}
