//! Benchmark suite for context-graph-poincare.
//!
//! Covers the per-frame hot paths of a Poincare-disk graph view:
//! - Disk and hyperboloid distance / Mobius / boost
//! - Ball tree construction (sequential and rayon) and queries
//! - BFS placement and pin relaxation
//!
//! # Frame Budget
//!
//! | Benchmark | Target |
//! |-----------|--------|
//! | disk_distance single | <100ns |
//! | knn k=10 over 10k points | <50us |
//! | layout 1k nodes | <2ms |
//! | relax 20 passes over 1k nodes | <16ms |
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --package context-graph-poincare
//! cargo bench --package context-graph-poincare -- ball_tree
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

mod config;
mod generators;

mod ball_tree_benches;
mod geometry_benches;
mod layout_benches;

// ============================================================================
// CRITERION SETUP
// ============================================================================

criterion_group!(
    name = geometry_bench_group;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(3));
    targets = geometry_benches::bench_disk_kernel, geometry_benches::bench_lorentz_kernel
);

criterion_group!(
    name = ball_tree_bench_group;
    config = Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(5));
    targets = ball_tree_benches::bench_ball_tree_build, ball_tree_benches::bench_ball_tree_queries
);

criterion_group!(
    name = layout_bench_group;
    config = Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(5));
    targets = layout_benches::bench_layout
);

criterion_main!(geometry_bench_group, ball_tree_bench_group, layout_bench_group);
