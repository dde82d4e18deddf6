//! Criterion benchmarks for the best-segment search.
//! Focus sizes: vertex count in {2, 16, 128, 1024, 8192}.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use linref::sample::{random_walk, ReplayToken, SampleCfg};
use linref::{find, Point, Polyline};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn walk(n: usize, seed: u64) -> Vec<Point> {
    let cfg = SampleCfg {
        vertex_count: n,
        ..SampleCfg::default()
    };
    random_walk(cfg, ReplayToken { seed, index: 0 })
}

fn random_queries(pl: &Polyline, count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let segs = pl.segments();
    (0..count)
        .map(|_| {
            if segs.is_empty() {
                return Point::new(0, 0);
            }
            // near a random vertex so most queries have candidates
            let s = segs[rng.gen_range(0..segs.len())];
            Point::new(
                s.start().x.saturating_add(rng.gen_range(-40..=40)),
                s.start().y.saturating_add(rng.gen_range(-40..=40)),
            )
        })
        .collect()
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    for &n in &[2usize, 16, 128, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("polyline_new", n), &n, |b, &n| {
            b.iter_batched(
                || walk(n, 41),
                |pts| {
                    let _pl = Polyline::new(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        let pl = Polyline::new(&walk(n, 42));
        let queries = random_queries(&pl, 64, 43);
        group.bench_with_input(BenchmarkId::new("find_x64", n), &n, |b, _| {
            b.iter(|| {
                for &q in &queries {
                    let _r = find(&pl, q);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);
