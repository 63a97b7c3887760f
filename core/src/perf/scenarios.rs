use crate::{
    sample::{Sample, SampleGenerator},
    sum::{AccumulatorMode, SumStrategy, sequential_sum},
};
use anyhow::{Result, anyhow};

/// Seed shared by every bench scenario.
pub const SCENARIO_SEED: u64 = 0x5eed;

#[derive(Clone)]
pub struct PreparedSumScenario {
    spec: &'static SumScenario,
    sample: Sample,
    expected: i64,
}

impl PreparedSumScenario {
    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn title(&self) -> &'static str {
        self.spec.title
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    pub fn bench_case_name(&self, strategy: SumStrategy) -> String {
        format!("{}_{}", self.spec.key, strategy.name().replace('-', "_"))
    }

    /// Sum the scenario sample and check it against the sequential total.
    pub fn run(&self, strategy: SumStrategy, workers: usize, mode: AccumulatorMode) -> Result<i64> {
        let total = strategy.sum(self.sample.as_slice(), workers, mode)?;
        if total != self.expected {
            return Err(anyhow!(
                "{}: expected {} but {} observed {}",
                self.spec.key,
                self.expected,
                strategy,
                total
            ));
        }
        Ok(total)
    }
}

struct SumScenario {
    key: &'static str,
    title: &'static str,
    elements: usize,
}

static SUM_SCENARIOS: &[SumScenario] = &[
    SumScenario {
        key: "sum_100k",
        title: "100 thousand elements",
        elements: 100_000,
    },
    SumScenario {
        key: "sum_1m",
        title: "1 million elements",
        elements: 1_000_000,
    },
    SumScenario {
        key: "sum_10m",
        title: "10 million elements",
        elements: 10_000_000,
    },
];

/// Keys and element counts of every scenario, without generating samples.
pub fn sum_scenario_sizes() -> Vec<(&'static str, usize)> {
    SUM_SCENARIOS.iter().map(|spec| (spec.key, spec.elements)).collect()
}

pub fn prepare_sum_scenarios() -> Vec<PreparedSumScenario> {
    SUM_SCENARIOS.iter().map(prepare).collect()
}

/// Prepare a single scenario by key. Each scenario seeds its own generator,
/// so the sample matches the one [`prepare_sum_scenarios`] builds.
pub fn prepare_sum_scenario(key: &str) -> Option<PreparedSumScenario> {
    SUM_SCENARIOS.iter().find(|spec| spec.key == key).map(prepare)
}

fn prepare(spec: &'static SumScenario) -> PreparedSumScenario {
    let sample = SampleGenerator::new(Some(SCENARIO_SEED)).generate(spec.elements);
    let expected = sequential_sum(sample.as_slice());
    PreparedSumScenario { spec, sample, expected }
}
