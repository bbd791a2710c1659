//! Criterion comparison of the two hull builders on random point sets.
//! Graham should win on large dense sets; Jarvis can be competitive
//! when the hull is small relative to the input.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use planar_hull::operations::convex_hull::{graham_scan, jarvis_march};
use planar_hull::random::random_points;

fn bench_hulls(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");
    for &n in &[16usize, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("graham_scan", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(7);
                    random_points(&mut rng, n, 800, 800)
                },
                |points| {
                    let _ = graham_scan(&points);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("jarvis_march", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(7);
                    random_points(&mut rng, n, 800, 800)
                },
                |points| {
                    let _ = jarvis_march(&points);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hulls);
criterion_main!(benches);
