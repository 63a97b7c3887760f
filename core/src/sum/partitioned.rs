//! Thread-partitioned summation.
//!
//! The sample is split by [`plan_partitions`]; one scoped worker runs per
//! non-empty partition and the scope joins every worker before the total is
//! read. Empty partitions never get a worker, so the join cannot wait on a
//! thread that was never started.

use anyhow::{Result, anyhow};
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

use super::AccumulatorMode;
use super::partition::{Partition, plan_partitions};

pub fn partitioned_sum(values: &[i32], workers: usize, mode: AccumulatorMode) -> Result<i64> {
    let plan = plan_partitions(values.len(), workers)?;
    debug!(
        target: "psum::sum",
        elements = values.len(),
        workers,
        populated = plan.iter().filter(|p| !p.is_empty()).count(),
        mode = mode.name(),
        "partition plan ready"
    );
    if values.is_empty() {
        return Ok(0);
    }

    match mode {
        AccumulatorMode::Atomic => sum_atomic(values, &plan),
        AccumulatorMode::Collected => Ok(sum_collected(values, &plan)?.iter().sum()),
    }
}

/// Per-partition sums in partition index order, one entry per worker
/// (empty partitions report zero).
pub fn partial_sums(values: &[i32], workers: usize) -> Result<Vec<i64>> {
    let plan = plan_partitions(values.len(), workers)?;
    sum_collected(values, &plan)
}

fn local_sum(part: &[i32]) -> i64 {
    part.iter().map(|&v| i64::from(v)).sum()
}

fn sum_atomic(values: &[i32], plan: &[Partition]) -> Result<i64> {
    let total = AtomicI64::new(0);
    crossbeam::thread::scope(|scope| {
        for part in plan.iter().filter(|p| !p.is_empty()) {
            let slice = part.slice(values);
            let total = &total;
            scope.spawn(move |_| {
                // Exactly one add per worker; the scope join orders it before the read.
                total.fetch_add(local_sum(slice), Ordering::Relaxed);
            });
        }
    })
    .map_err(|_| anyhow!("partition worker panicked"))?;
    Ok(total.into_inner())
}

fn sum_collected(values: &[i32], plan: &[Partition]) -> Result<Vec<i64>> {
    let mut partials = vec![0i64; plan.len()];
    crossbeam::thread::scope(|scope| {
        for (slot, part) in partials.iter_mut().zip(plan) {
            if part.is_empty() {
                continue;
            }
            let slice = part.slice(values);
            scope.spawn(move |_| {
                *slot = local_sum(slice);
            });
        }
    })
    .map_err(|_| anyhow!("partition worker panicked"))?;
    Ok(partials)
}
