//! Summation strategies compared by the benchmark.
//!
//! All strategies widen `i32` sample values into an `i64` total, so every
//! strategy returns the same total for the same input.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

mod parallel_query;
pub mod partition;
mod partitioned;

#[cfg(test)]
mod partition_test;

pub use parallel_query::parallel_query_sum;
pub use partition::{MAX_WORKERS, Partition, check_workers, partition_size, plan_partitions};
pub use partitioned::{partial_sums, partitioned_sum};

/// How partition workers combine their partial sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccumulatorMode {
    /// Every worker `fetch_add`s its local sum into one shared `AtomicI64`.
    Atomic,
    /// Every worker writes its own slot; slots are reduced after the join.
    #[default]
    Collected,
}

impl AccumulatorMode {
    pub fn name(self) -> &'static str {
        match self {
            AccumulatorMode::Atomic => "atomic",
            AccumulatorMode::Collected => "collected",
        }
    }
}

impl fmt::Display for AccumulatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SumStrategy {
    Sequential,
    Partitioned,
    ParallelQuery,
}

impl SumStrategy {
    pub const ALL: [SumStrategy; 3] = [
        SumStrategy::Sequential,
        SumStrategy::Partitioned,
        SumStrategy::ParallelQuery,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SumStrategy::Sequential => "sequential",
            SumStrategy::Partitioned => "partitioned",
            SumStrategy::ParallelQuery => "parallel-query",
        }
    }

    /// Sum `values` with this strategy. `workers` and `mode` are ignored by
    /// strategies that do not use them.
    pub fn sum(self, values: &[i32], workers: usize, mode: AccumulatorMode) -> Result<i64> {
        match self {
            SumStrategy::Sequential => Ok(sequential_sum(values)),
            SumStrategy::Partitioned => partitioned_sum(values, workers, mode),
            SumStrategy::ParallelQuery => parallel_query_sum(values, workers),
        }
    }
}

impl fmt::Display for SumStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference total: a single-threaded fold.
pub fn sequential_sum(values: &[i32]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}
