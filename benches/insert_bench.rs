//! Insertion benchmarks

use avl_engine::AvlTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Fixed permutation of 0..n (the multiplier is prime, so coprime with n)
fn scattered(n: u64) -> impl Iterator<Item = u64> {
    (0..n).map(move |i| i.wrapping_mul(2_654_435_761) % n.max(1))
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in [1_000u64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("ascending", n), &n, |b, &n| {
            b.iter(|| {
                let tree: AvlTree<u64> = (0..n).collect();
                black_box(tree.height())
            });
        });
        group.bench_with_input(BenchmarkId::new("scattered", n), &n, |b, &n| {
            b.iter(|| {
                let tree: AvlTree<u64> = scattered(n).collect();
                black_box(tree.height())
            });
        });
    }
    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let tree: AvlTree<u64> = (0..100_000).collect();
    c.bench_function("contains_100000", |b| {
        b.iter(|| {
            let mut hits = 0;
            for key in (0..100_000).step_by(97) {
                if tree.contains(black_box(&key)) {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });
}

criterion_group!(benches, benchmark_insert, benchmark_lookup);
criterion_main!(benches);
