pub mod bench;
pub mod config;
pub mod error;
pub mod sample;
pub mod sum;

// Seeded workloads shared with the Criterion benches
pub mod perf;


pub use bench::{BenchRunner, Comparison, RunRecord, SuiteReport};
pub use config::BenchConfig;
pub use error::ConfigError;
pub use sample::{Sample, SampleGenerator};
pub use sum::{AccumulatorMode, SumStrategy};
