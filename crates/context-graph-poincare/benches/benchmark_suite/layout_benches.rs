//! Placement and relaxation benchmarks.

use criterion::{BatchSize, BenchmarkId, Criterion};

use context_graph_poincare::{layout, relayout, LayoutConfig, NodeId};

use super::config;
use super::generators::random_tree;

pub fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let layout_config = LayoutConfig::default();

    for &size in config::GRAPH_SIZES {
        let tree = random_tree(6, size);
        group.bench_with_input(BenchmarkId::new("bfs_placement", size), &size, |b, _| {
            b.iter_batched(
                || tree.clone(),
                |mut t| layout(&mut t, &layout_config),
                BatchSize::SmallInput,
            )
        });

        let mut placed = tree.clone();
        if let Err(e) = layout(&mut placed, &layout_config) {
            panic!("benchmark layout failed: {}", e);
        }
        let pins: Vec<NodeId> = (0..config::PINNED as NodeId).map(|i| i * 7 % size as NodeId).collect();
        group.bench_with_input(BenchmarkId::new("relax_20", size), &size, |b, _| {
            b.iter_batched(
                || placed.clone(),
                |mut t| relayout(&mut t, &pins, 1.0, 20),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}
