use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use osavl::OrderStatisticTree;

use crate::ValueStream;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    n_values: usize,
    n_distinct: u16,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}_distinct/n_values", v.n_distinct), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        // All unique values, and a heavily duplicated stream.
        for n_distinct in [u16::MAX, 16] {
            bench_param(&mut g, n_values, n_distinct)
        }
    }
}

/// Measure the time needed to insert `n_values` number of randomly generated
/// values drawn from `n_distinct` possible values into an empty tree.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, n_distinct: u16)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        n_distinct,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Values inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (OrderStatisticTree::new(), ValueStream::new(n_distinct)),
            |(mut t, stream)| {
                for v in stream.take(n_values) {
                    t.insert(v);
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}
