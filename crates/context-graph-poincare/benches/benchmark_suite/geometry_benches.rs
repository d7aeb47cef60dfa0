//! Disk and hyperboloid kernel benchmarks.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};

use context_graph_poincare::hyperbolic::lorentz;
use context_graph_poincare::{distance, geodesic_arc, geodesic_lerp, mobius, to_hyperboloid, Complex};

use super::config;
use super::generators::disk_points;

pub fn bench_disk_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("disk_kernel");
    let a = Complex::new(0.5, 0.1);
    let b = Complex::new(-0.2, 0.6);

    group.bench_function("distance_single", |bench| {
        bench.iter(|| distance(black_box(a), black_box(b)))
    });
    group.bench_function("mobius_single", |bench| {
        bench.iter(|| mobius(black_box(a), black_box(b)))
    });
    group.bench_function("geodesic_lerp", |bench| {
        bench.iter(|| geodesic_lerp(black_box(a), black_box(b), black_box(0.3)))
    });
    group.bench_function("geodesic_arc", |bench| {
        bench.iter(|| geodesic_arc(black_box(a), black_box(b)))
    });

    for &size in config::BATCH_SIZES {
        let points = disk_points(1, size);
        let camera = Complex::new(0.3, -0.3);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("pan_batch", size), &points, |bench, pts| {
            bench.iter(|| pts.iter().map(|&p| mobius(camera, p)).collect::<Vec<_>>())
        });
    }

    // Near-boundary inputs exercise the clamping paths
    let edge = Complex::new(0.999_99, 0.0);
    group.bench_function("distance_near_boundary", |bench| {
        bench.iter(|| distance(black_box(edge), black_box(-edge)))
    });

    group.finish();
}

pub fn bench_lorentz_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("lorentz_kernel");
    let p = to_hyperboloid(Complex::new(0.5, 0.1));
    let q = to_hyperboloid(Complex::new(-0.2, 0.6));

    group.bench_function("distance_single", |bench| {
        bench.iter(|| lorentz::distance(black_box(&p), black_box(&q)))
    });
    group.bench_function("boost_single", |bench| {
        bench.iter(|| lorentz::boost(black_box(&p), black_box(&q)))
    });
    group.bench_function("exp_log", |bench| {
        bench.iter(|| lorentz::exp_map(&p, &lorentz::log_map(black_box(&p), black_box(&q))))
    });

    let cloud: Vec<_> = disk_points(2, 256).into_iter().map(to_hyperboloid).collect();
    group.bench_function("centroid_256", |bench| {
        bench.iter(|| lorentz::centroid(black_box(&cloud)))
    });

    group.finish();
}
