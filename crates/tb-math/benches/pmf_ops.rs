//! Criterion benchmarks for the discrete distribution primitives in `tb-math`.
//!
//! Covers normalization, percentile lookup through a CDF snapshot and Beta
//! grid construction over hypothesis spaces of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tb_math::{power_law, uniform, Beta, Bound};

const SIZES: [i64; 3] = [100, 1_000, 10_000];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmf/normalize");
    for n in SIZES {
        let prior = power_law(&Bound::new(1, n).unwrap(), 1.0);
        group.bench_with_input(BenchmarkId::new("power_law", n), &prior, |b, prior| {
            b.iter(|| {
                let mut pmf = prior.clone();
                black_box(pmf.normalize());
            })
        });
    }
    group.finish();
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmf/percentile");
    for n in SIZES {
        let mut pmf = uniform(&Bound::new(1, n).unwrap());
        pmf.normalize();
        group.bench_with_input(BenchmarkId::new("median", n), &pmf, |b, pmf| {
            b.iter(|| black_box(pmf.percentile(black_box(0.5)).unwrap()))
        });

        let cdf = pmf.make_cdf().unwrap();
        group.bench_with_input(BenchmarkId::new("cdf_median", n), &cdf, |b, cdf| {
            b.iter(|| black_box(cdf.percentile(black_box(0.5)).unwrap()))
        });
    }
    group.finish();
}

fn bench_beta_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("beta/make_pmf");
    let beta = Beta::new(141.0, 111.0).unwrap();
    for steps in [101usize, 1_001] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| black_box(beta.make_pmf(steps).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_percentile, bench_beta_grid);
criterion_main!(benches);
