//! Ball tree construction and query benchmarks.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};

use context_graph_poincare::{BallTree, BallTreeConfig};

use super::config;
use super::generators::indexed_points;

pub fn bench_ball_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("ball_tree_build");
    let tree_config = BallTreeConfig::default();

    for &size in config::INDEX_SIZES {
        let (points, ids) = indexed_points(3, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, _| {
            b.iter(|| BallTree::build(black_box(&points), black_box(&ids), &tree_config))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, _| {
            b.iter(|| BallTree::build_parallel(black_box(&points), black_box(&ids), &tree_config))
        });
    }
    group.finish();
}

pub fn bench_ball_tree_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("ball_tree_query");

    for &size in config::INDEX_SIZES {
        let (points, ids) = indexed_points(4, size);
        let tree = match BallTree::build(&points, &ids, &BallTreeConfig::default()) {
            Ok(tree) => tree,
            Err(e) => panic!("benchmark tree build failed: {}", e),
        };
        let (queries, _) = indexed_points(5, 64);

        group.bench_with_input(BenchmarkId::new("knn", size), &size, |b, _| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.knn(q, config::KNN_K));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("range", size), &size, |b, _| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.range_query(q, config::RANGE_RADIUS));
                }
            })
        });
    }
    group.finish();
}
