//! Timed benchmark runs.
//!
//! [`BenchRunner`] times one strategy over one sample, compares every
//! strategy on a shared sample, and runs the configured size suite. Timing
//! and logging never affect the computed totals.

use anyhow::{Context, Result, bail};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::config::BenchConfig;
use crate::sample::{Sample, SampleGenerator};
use crate::sum::SumStrategy;


/// Outcome of one timed strategy run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub strategy: SumStrategy,
    pub elements: usize,
    pub workers: usize,
    pub elapsed_ms: f64,
    pub total: i64,
}

/// Every requested strategy run on the same sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub elements: usize,
    pub total: i64,
    pub runs: Vec<RunRecord>,
}

impl Comparison {
    pub fn fastest(&self) -> Option<&RunRecord> {
        self.runs.iter().min_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
    }

    pub fn run(&self, strategy: SumStrategy) -> Option<&RunRecord> {
        self.runs.iter().find(|r| r.strategy == strategy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteReport {
    pub generated_at: String,
    pub config: BenchConfig,
    pub comparisons: Vec<Comparison>,
}

impl SuiteReport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize suite report")
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json.as_bytes()).with_context(|| format!("write {}", path.display()))
    }
}

pub struct BenchRunner {
    config: BenchConfig,
    generator: SampleGenerator,
}

impl BenchRunner {
    /// Build a runner; rejects an invalid configuration before any sample is
    /// generated.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let generator = SampleGenerator::new(config.seed);
        Ok(Self { config, generator })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn generate(&mut self, count: usize) -> Sample {
        self.generator.generate(count)
    }

    pub fn run(&self, strategy: SumStrategy, sample: &Sample) -> Result<RunRecord> {
        let elements = sample.len();
        let workers = self.config.workers;
        info!(target: "psum::bench", "{} for {} started", strategy, elements);

        let started = Instant::now();
        let total = strategy
            .sum(sample.as_slice(), workers, self.config.accumulator)
            .with_context(|| format!("{} sum over {} elements", strategy, elements))?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        info!(
            target: "psum::bench",
            "{} for {} elements finished in {:.3} ms, sum = {}", strategy, elements, elapsed_ms, total
        );

        if total < 0 || total > sample.max_total() {
            bail!(
                "{} produced total {} outside [0, {}] for {} elements",
                strategy,
                total,
                sample.max_total(),
                elements
            );
        }

        Ok(RunRecord {
            strategy,
            elements,
            workers,
            elapsed_ms,
            total,
        })
    }

    /// Run `strategies` in order on `sample`; all totals must agree.
    pub fn compare(&self, sample: &Sample, strategies: &[SumStrategy]) -> Result<Comparison> {
        if strategies.is_empty() {
            bail!("no strategies selected");
        }
        let mut runs: Vec<RunRecord> = Vec::with_capacity(strategies.len());
        for &strategy in strategies {
            let record = self.run(strategy, sample)?;
            if let Some(first) = runs.first().filter(|first| first.total != record.total) {
                bail!(
                    "{} total {} disagrees with {} total {} for {} elements",
                    record.strategy,
                    record.total,
                    first.strategy,
                    first.total,
                    sample.len()
                );
            }
            runs.push(record);
        }
        let total = runs[0].total;
        Ok(Comparison {
            elements: sample.len(),
            total,
            runs,
        })
    }

    /// Generate one sample per configured size and compare `strategies` on
    /// each.
    pub fn run_suite(&mut self, strategies: &[SumStrategy]) -> Result<SuiteReport> {
        let sizes = self.config.sizes.clone();
        let mut comparisons = Vec::with_capacity(sizes.len());
        for count in sizes {
            let sample = self.generate(count);
            comparisons.push(self.compare(&sample, strategies)?);
        }
        Ok(SuiteReport {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            config: self.config.clone(),
            comparisons,
        })
    }
}
