//! Benchmark configuration constants.

#![allow(dead_code)]

/// Batch sizes for throughput benchmarks.
pub const BATCH_SIZES: &[usize] = &[1, 100, 1000];

/// Point counts for ball tree benchmarks.
pub const INDEX_SIZES: &[usize] = &[1_000, 10_000];

/// Node counts for layout benchmarks.
pub const GRAPH_SIZES: &[usize] = &[100, 1_000];

/// Neighbours requested per k-NN query.
pub const KNN_K: usize = 10;

/// Range query radius (hyperbolic).
pub const RANGE_RADIUS: f64 = 0.5;

/// Nodes pinned during relaxation benchmarks.
pub const PINNED: usize = 4;
