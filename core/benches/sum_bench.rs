use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use psum_core::perf::scenarios::prepare_sum_scenarios;
use psum_core::sum::{AccumulatorMode, SumStrategy};
use std::hint::black_box;

const WORKERS: usize = 10;

// One group per sample size, one case per strategy
fn bench_strategies(c: &mut Criterion) {
    for scenario in prepare_sum_scenarios() {
        let mut group = c.benchmark_group(scenario.key());
        group.throughput(Throughput::Elements(scenario.sample().len() as u64));
        if scenario.sample().len() >= 10_000_000 {
            group.sample_size(10);
        }
        for strategy in SumStrategy::ALL {
            let case = scenario.clone();
            group.bench_function(case.bench_case_name(strategy), move |b| {
                b.iter(|| {
                    let total = case
                        .run(strategy, WORKERS, AccumulatorMode::Collected)
                        .expect("sum scenario failed during benchmarking");
                    black_box(total);
                })
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
