use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use osavl::OrderStatisticTree;

use crate::ValueStream;

const N_LOOKUPS: usize = 1_000;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("contains");

    for n_values in [1_000, 10_000] {
        // Mostly unique values, and a tree of 64 nodes holding many
        // occurrences each.
        for n_distinct in [u16::MAX, 64] {
            bench_param(&mut g, n_values, n_distinct)
        }
    }
}

/// Build a tree from `n_values` drawn from `n_distinct` possible values, then
/// measure [`N_LOOKUPS`] lookups of values that were inserted (hits) and of
/// values above the inserted domain (misses).
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, n_distinct: u16)
where
    M: Measurement,
{
    let t = ValueStream::new(n_distinct)
        .take(n_values)
        .collect::<OrderStatisticTree<_>>();

    // Lookups per second
    g.throughput(Throughput::Elements(N_LOOKUPS as _));

    // Replaying the stream from the start yields only inserted values.
    g.bench_function(
        BenchmarkId::new(format!("hits/{n_distinct}_distinct"), n_values),
        |b| {
            b.iter_batched(
                || ValueStream::new(n_distinct),
                |stream| {
                    let all_hit = stream.take(N_LOOKUPS).all(|v| t.contains(&v));
                    assert!(all_hit);
                },
                BatchSize::SmallInput,
            )
        },
    );

    // Shifting the stream past the end of the domain yields only values that
    // were never inserted, while following the same descent pattern.
    g.bench_function(
        BenchmarkId::new(format!("misses/{n_distinct}_distinct"), n_values),
        |b| {
            b.iter_batched(
                || ValueStream::new(n_distinct),
                |stream| {
                    let offset = stream.domain_end();
                    let any_hit = stream.take(N_LOOKUPS).any(|v| t.contains(&(v + offset)));
                    assert!(!any_hit);
                },
                BatchSize::SmallInput,
            )
        },
    );
}
