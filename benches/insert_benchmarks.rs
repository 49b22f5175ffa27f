use alpha_tree::AlphaTree;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insert benchmarks ──────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("AlphaTree", N), |b| {
        b.iter(|| {
            let mut tree = AlphaTree::new();
            for i in 0..N as i64 {
                tree.insert(i);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for i in 0..N as i64 {
                set.insert(i);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_reverse");

    group.bench_function(BenchmarkId::new("AlphaTree", N), |b| {
        b.iter(|| {
            let mut tree = AlphaTree::new();
            for i in (0..N as i64).rev() {
                tree.insert(i);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for i in (0..N as i64).rev() {
                set.insert(i);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("AlphaTree", N), |b| {
        b.iter(|| {
            let mut tree = AlphaTree::new();
            for &key in &keys {
                tree.insert(key);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &key in &keys {
                set.insert(key);
            }
            set
        });
    });

    group.finish();
}

// Ordered inserts are the rebuild-heavy workload, so they expose the cost of
// each balance factor most directly.
fn bench_alpha_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered_alpha_sweep");

    for alpha in [0.52, 0.6, 0.75, 0.9] {
        group.bench_function(BenchmarkId::new("alpha", alpha), |b| {
            b.iter(|| {
                let mut tree = AlphaTree::with_alpha(alpha);
                for i in 0..N as i64 {
                    tree.insert(i);
                }
                tree
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_ordered,
    bench_insert_reverse,
    bench_insert_random,
    bench_alpha_sweep
);
criterion_main!(benches);
