//! Shared workloads for the Criterion benches.
//!
//! Benches and tests draw their samples from the same seeded scenarios so a
//! bench case always measures the input the tests verified.

pub mod scenarios;
