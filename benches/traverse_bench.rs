//! Benchmark for traversal and withering.
//!
//! Compares `traverse` under the standard effects with a hand-written loop,
//! and measures traversal of records, trees and transformer stacks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fp_contexts::collection::{Record, RecordK, Tree, TreeK};
use fp_contexts::effect::{EitherT, State, StateK};
use fp_contexts::typeclass::{
    Identity, IdentityK, OptionK, ResultK, Traversable, ValidationK, VecK, Witherable,
};
use std::hint::black_box;

fn checked(n: u64) -> Result<u64, String> {
    if n == u64::MAX { Err("overflow".to_string()) } else { Ok(n + 1) }
}

fn wide_tree(depth: u32, value: u64) -> Tree<u64> {
    if depth == 0 {
        Tree::of(value)
    } else {
        Tree::make(value, (0..4).map(|offset| wide_tree(depth - 1, value * 4 + offset)).collect())
    }
}

// =============================================================================
// Vec Traversal
// =============================================================================

fn benchmark_vec_traverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("vec_traverse");

    for size in [100_u64, 1000, 10000] {
        let input: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("OptionK", size), &input, |bencher, input| {
            bencher.iter(|| VecK::traverse(OptionK, black_box(input.clone()), |n: u64| n.checked_add(1)));
        });

        group.bench_with_input(BenchmarkId::new("ResultK", size), &input, |bencher, input| {
            bencher.iter(|| VecK::traverse(ResultK::<String>::new(), black_box(input.clone()), checked));
        });

        group.bench_with_input(BenchmarkId::new("ValidationK", size), &input, |bencher, input| {
            bencher.iter(|| {
                VecK::traverse(ValidationK::<Vec<String>>::new(), black_box(input.clone()), |n: u64| {
                    checked(n).map_err(|error| vec![error])
                })
            });
        });

        group.bench_with_input(BenchmarkId::new("loop", size), &input, |bencher, input| {
            bencher.iter(|| {
                black_box(input.clone())
                    .into_iter()
                    .map(checked)
                    .collect::<Result<Vec<u64>, String>>()
            });
        });
    }

    group.finish();
}

// =============================================================================
// Other Containers
// =============================================================================

fn benchmark_container_traverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("container_traverse");

    for size in [100_u64, 1000] {
        let record: Record<u64> = RecordK::from_entries((0..size).map(|n| (format!("key{n:05}"), n)));
        group.bench_with_input(BenchmarkId::new("Record", size), &record, |bencher, record| {
            bencher.iter(|| RecordK::traverse(OptionK, black_box(record.clone()), |n: u64| n.checked_mul(2)));
        });
    }

    for depth in [3_u32, 5] {
        let tree = wide_tree(depth, 1);
        group.bench_with_input(BenchmarkId::new("Tree", depth), &tree, |bencher, tree| {
            bencher.iter(|| TreeK::traverse(OptionK, black_box(tree.clone()), |n: u64| n.checked_mul(2)));
        });
    }

    group.finish();
}

// =============================================================================
// Stacks and Withering
// =============================================================================

fn benchmark_stacks(criterion: &mut Criterion) {
    type Counted = EitherT<StateK<u64>, String>;
    let mut group = criterion.benchmark_group("stacks");

    for size in [100_u64, 1000] {
        let input: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("EitherT<StateK>", size), &input, |bencher, input| {
            bencher.iter(|| {
                let traversed = VecK::traverse(Counted::new(), black_box(input.clone()), |n: u64| {
                    State::new(move |count: u64| (checked(n), count + 1))
                });
                traversed.run(0)
            });
        });

        group.bench_with_input(BenchmarkId::new("wither_identity", size), &input, |bencher, input| {
            bencher.iter(|| {
                VecK::wither(IdentityK, black_box(input.clone()), |n: u64| {
                    Identity::new((n % 3 != 0).then_some(n))
                })
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_vec_traverse,
    benchmark_container_traverse,
    benchmark_stacks
);

criterion_main!(benches);
