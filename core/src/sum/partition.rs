use anyhow::{Result, bail};
use serde::Serialize;

/// Contiguous sub-range of a sample assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub index: usize,
    pub start: usize,
    pub len: usize,
}

impl Partition {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn slice<'a>(&self, values: &'a [i32]) -> &'a [i32] {
        &values[self.start..self.end()]
    }
}

/// Largest worker count any summation entry point accepts.
pub const MAX_WORKERS: usize = 1024;

/// Reject worker counts outside `1..=MAX_WORKERS` before anything is
/// allocated or spawned.
pub fn check_workers(workers: usize) -> Result<()> {
    if workers == 0 {
        bail!("worker count must be at least 1");
    }
    if workers > MAX_WORKERS {
        bail!("worker count {} exceeds the maximum of {}", workers, MAX_WORKERS);
    }
    Ok(())
}

/// `ceil(len / workers)`; callers guarantee `workers > 0`.
pub fn partition_size(len: usize, workers: usize) -> usize {
    len.div_ceil(workers)
}

/// Split `len` elements across `workers` partitions of `ceil(len / workers)`
/// elements each.
///
/// Always returns exactly `workers` partitions, in index order. Trailing
/// partitions are shorter or empty when `len` does not fill them; empty
/// partitions start at `len`.
pub fn plan_partitions(len: usize, workers: usize) -> Result<Vec<Partition>> {
    check_workers(workers)?;
    let size = partition_size(len, workers);
    let plan = (0..workers)
        .map(|index| {
            let start = index.saturating_mul(size).min(len);
            let end = start.saturating_add(size).min(len);
            Partition {
                index,
                start,
                len: end - start,
            }
        })
        .collect();
    Ok(plan)
}
