use anyhow::{Context, Result};
use rayon::prelude::*;

use super::partition::check_workers;

/// Data-parallel sum on a dedicated pool of exactly `workers` threads.
///
/// The pool is built per call and dropped on return.
pub fn parallel_query_sum(values: &[i32], workers: usize) -> Result<i64> {
    check_workers(workers)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("psum-query-{}", i))
        .build()
        .context("build parallel query thread pool")?;
    Ok(pool.install(|| values.par_iter().map(|&v| i64::from(v)).sum()))
}
