use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use osavl::OrderStatisticTree;

use crate::ValueStream;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("select");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let t = ValueStream::new(1_024)
        .take(n_values)
        .collect::<OrderStatisticTree<_>>();

    bench_min(n_values, g, &t);
    bench_median(n_values, g, &t);
    bench_max(n_values, g, &t);
}

/// Generate a benchmark named `bench_$name` that selects the value at the rank
/// returned by `$rank` (given the tree length).
macro_rules! select_bench {
    (
        $name:ident,
        $rank:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>, t: &OrderStatisticTree<i64>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                let rank = ($rank)(t.len());

                g.throughput(Throughput::Elements(1));
                // Selects per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        black_box(t.select(black_box(rank)).unwrap());
                    })
                });
            }
        }
    };
}

select_bench!(min, |_len: usize| 0);
select_bench!(median, |len: usize| len / 2);
select_bench!(max, |len: usize| len - 1);
