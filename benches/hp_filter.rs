//! Benchmarks for the HP filter and the transform dispatch.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use macroprep::transform::{TransformConfig, TransformKind};
use macroprep::trend::HPFilter;

fn generate_levels(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            100.0 * (0.002 * t + 0.02 * (2.0 * std::f64::consts::PI * t / 48.0).sin()).exp()
        })
        .collect()
}

fn bench_hp_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("hp_filter");

    for size in [120, 480, 1200, 12_000].iter() {
        let series = generate_levels(*size);
        let filter = HPFilter::default();

        group.bench_with_input(BenchmarkId::new("decompose", size), size, |b, _| {
            b.iter(|| filter.decompose(black_box(&series)))
        });
    }

    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let series = generate_levels(768);
    let config = TransformConfig::default();

    for kind in TransformKind::ALL {
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| kind.apply(black_box(&series), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hp_filter, bench_transforms);
criterion_main!(benches);
