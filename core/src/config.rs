//! Benchmark configuration.
//!
//! A [`BenchConfig`] can be built from defaults, a TOML file, or CLI
//! overrides layered on top of either. Nothing is partitioned or generated
//! until [`BenchConfig::validate`] has accepted it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::sum::AccumulatorMode;
pub use crate::sum::MAX_WORKERS;

/// Element counts benchmarked when none are configured.
pub const DEFAULT_SIZES: [usize; 3] = [100_000, 1_000_000, 10_000_000];

/// Worker count used when none is configured.
pub const DEFAULT_WORKERS: usize = 10;

/// Largest accepted element count. Keeps the `i64` accumulator far from
/// overflow (10^8 * 99 < 10^10) and the sample within a sane memory budget.
pub const MAX_ELEMENTS: usize = 100_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Element counts, one sample per entry.
    pub sizes: Vec<usize>,
    /// Worker count for the partitioned and parallel-query strategies.
    pub workers: usize,
    /// Seed for the sample generator; entropy-seeded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// How partition workers combine their partial sums.
    pub accumulator: AccumulatorMode,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            workers: DEFAULT_WORKERS,
            seed: None,
            accumulator: AccumulatorMode::default(),
        }
    }
}

impl BenchConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse {
            message: e.to_string().trim_end().to_string(),
        })
    }

    /// Load a configuration file. Fields missing from the file keep their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let source =
            std::fs::read_to_string(path).with_context(|| format!("read config file {}", path.display()))?;
        let config = Self::from_toml_str(&source).with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("serialize configuration to TOML")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        for &count in &self.sizes {
            if count == 0 {
                return Err(ConfigError::ZeroElements);
            }
            if count > MAX_ELEMENTS {
                return Err(ConfigError::TooManyElements {
                    count,
                    max: MAX_ELEMENTS,
                });
            }
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.workers > MAX_WORKERS {
            return Err(ConfigError::TooManyWorkers {
                count: self.workers,
                max: MAX_WORKERS,
            });
        }
        Ok(())
    }
}
