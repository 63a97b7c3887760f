//! Random sample generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Exclusive upper bound of generated values; every value lies in `[0, 100)`.
pub const VALUE_UPPER_BOUND: i32 = 100;

/// Immutable sequence of non-negative integers summed by the benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    values: Arc<[i32]>,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Largest total a generated sample of this length can have.
    pub fn max_total(&self) -> i64 {
        self.len() as i64 * i64::from(VALUE_UPPER_BOUND - 1)
    }
}

impl From<Vec<i32>> for Sample {
    fn from(values: Vec<i32>) -> Self {
        Self {
            values: Arc::from(values),
        }
    }
}

impl AsRef<[i32]> for Sample {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

/// Produces samples with values drawn uniformly from `[0, VALUE_UPPER_BOUND)`.
///
/// A seeded generator yields the same sequence of samples on every run.
pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn generate(&mut self, count: usize) -> Sample {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.rng.gen_range(0..VALUE_UPPER_BOUND));
        }
        Sample::from(values)
    }
}
