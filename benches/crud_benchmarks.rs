use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;

use bptree::BPlusTreeMap;

const N: usize = 10_000;

/// Minimum degree used for the benchmarked trees; 32 gives 63-entry nodes,
/// a realistic cache-line-friendly fan-out.
const DEGREE: usize = 32;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for a deterministic pseudo-random sequence
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

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BPlusTreeMap::new(DEGREE).unwrap();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BPlusTreeMap::new(DEGREE).unwrap();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

// ─── Lookup benchmarks ──────────────────────────────────────────────────────

fn bench_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bp_map: BPlusTreeMap<i64, i64> = {
        let mut map = BPlusTreeMap::new(DEGREE).unwrap();
        map.extend(keys.iter().map(|&k| (k, k)));
        map
    };
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for k in &keys {
                if let Some(&v) = bp_map.get(k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for k in &keys {
                if let Some(&v) = bt_map.get(k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_get_many_sorted(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let bp_map: BPlusTreeMap<i64, i64> = {
        let mut map = BPlusTreeMap::new(DEGREE).unwrap();
        map.extend(keys.iter().map(|&k| (k, k)));
        map
    };

    let mut queries = random_keys(1_000).iter().map(|k| k % N as i64).collect::<Vec<_>>();
    queries.sort_unstable();

    let mut group = c.benchmark_group("get_many_sorted");

    // A single leaf-chain walk for the batch.
    group.bench_function(BenchmarkId::new("get_many", queries.len()), |b| {
        b.iter(|| bp_map.get_many(&queries));
    });

    // One descent per key.
    group.bench_function(BenchmarkId::new("point_gets", queries.len()), |b| {
        b.iter(|| queries.iter().map(|k| bp_map.get(k).copied()).collect::<Vec<_>>());
    });

    group.finish();
}

// ─── Scan benchmarks ────────────────────────────────────────────────────────

fn bench_full_iteration(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let bp_map: BPlusTreeMap<i64, i64> = {
        let mut map = BPlusTreeMap::new(DEGREE).unwrap();
        map.extend(keys.iter().map(|&k| (k, k)));
        map
    };
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("full_iteration");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| bp_map.iter().map(|(_, &v)| v).sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.iter().map(|(_, &v)| v).sum::<i64>());
    });

    group.finish();
}

fn bench_range_scan(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let bp_map: BPlusTreeMap<i64, i64> = {
        let mut map = BPlusTreeMap::new(DEGREE).unwrap();
        map.extend(keys.iter().map(|&k| (k, k)));
        map
    };
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let (lo, hi) = (N as i64 / 4, 3 * N as i64 / 4);
    let mut group = c.benchmark_group("range_scan");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| bp_map.get_range(&lo, &hi).unwrap());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.range(lo..=hi).map(|(_, &v)| v).collect::<Vec<_>>());
    });

    group.finish();
}

// ─── Removal benchmarks ─────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter_with_setup(
            || {
                let mut map = BPlusTreeMap::new(DEGREE).unwrap();
                map.extend(keys.iter().map(|&k| (k, k)));
                map
            },
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_with_setup(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_ordered,
    bench_insert_random,
    bench_get_random,
    bench_get_many_sorted,
    bench_full_iteration,
    bench_range_scan,
    bench_remove_random,
);
criterion_main!(benches);
