//! Error types for the hyperbolic geometry engine.
//!
//! The geometry kernel itself is total: malformed numeric input is replaced
//! with a safe default and boundary degeneracy is signalled through
//! `f64::INFINITY` or a clamped position. `GraphError` only covers the
//! structural surface around the kernel: configuration, ball tree
//! construction and the layout graph.

use thiserror::Error;

/// Result type alias for engine operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for the fallible parts of the engine.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Length mismatch between parallel inputs (e.g. points and ids).
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    // ========== Graph Structure Errors ==========
    /// Node not found in the layout graph.
    #[error("Node not found: {0}")]
    NodeNotFound(i64),

    /// Duplicate node ID.
    #[error("Duplicate node ID: {0}")]
    DuplicateNode(i64),

    // ========== Serialization Errors ==========
    /// Config (de)serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json errors include line/column info in to_string()
        GraphError::Serialization(err.to_string())
    }
}

static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);
