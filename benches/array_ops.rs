//! Criterion comparison of sequential vs binary search and ordered insert on
//! generated file names.

use std::hint::black_box;
use std::time::Duration;

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
    measurement::WallTime,
};
use dirsim::{NameGenerator, binary_search, linear_search, ordered_insert, sort};
use rand::{Rng, SeedableRng, rngs::StdRng};

const SEED: u64 = 42;
const SAMPLE_SIZE: usize = 20;
const DATA_SIZES: &[usize] = &[1_000, 10_000, 100_000];
const QUERIES: usize = 1_000;

fn setup_group<'a>(c: &'a mut Criterion, name: &str) -> criterion::BenchmarkGroup<'a, WallTime> {
    let mut group = c.benchmark_group(name);
    group
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(Duration::from_millis(100))
        .measurement_time(Duration::from_secs(1));
    group
}

fn gen_sorted(size: usize) -> Vec<String> {
    let mut keys = NameGenerator::new().generate_many(&mut StdRng::seed_from_u64(SEED), size);
    sort(&mut keys);
    keys
}

/// Random queries drawn from the data itself, so every lookup hits.
fn gen_queries(data: &[String], count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count)
        .map(|_| data[rng.random_range(0..data.len())].clone())
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = setup_group(c, "search");

    for &size in DATA_SIZES {
        let data = gen_sorted(size);
        let queries = gen_queries(&data, QUERIES);
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", size),
            &(&data, &queries),
            |b, (data, queries)| {
                b.iter(|| {
                    for q in queries.iter() {
                        black_box(linear_search(data.as_slice(), q.as_str()));
                    }
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("binary", size),
            &(&data, &queries),
            |b, (data, queries)| {
                b.iter(|| {
                    for q in queries.iter() {
                        black_box(binary_search(data.as_slice(), q.as_str()));
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_ordered_insert(c: &mut Criterion) {
    let mut group = setup_group(c, "ordered_insert");
    let names = NameGenerator::new();

    for &size in DATA_SIZES {
        let data = gen_sorted(size);
        let fresh = names.generate_many(&mut StdRng::seed_from_u64(SEED + 1), QUERIES);
        group.throughput(Throughput::Elements(fresh.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter_batched(
                || (data.clone(), fresh.clone()),
                |(mut keys, fresh)| {
                    for key in fresh {
                        black_box(ordered_insert(&mut keys, key));
                    }
                    keys
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_ordered_insert);
criterion_main!(benches);
