//! Benchmark result types.
//!
//! This module provides the `BenchmarkResult` value returned to the
//! dashboard for every run.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Outcome of benchmarking both LCM variants on one operand pair.
///
/// Only the operands, the LCM and the two timings are part of the JSON
/// contract. `repetitions` and `timestamp` are kept for reports and the
/// console summary.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    /// First operand.
    #[serde(rename = "A")]
    pub a: i64,
    /// Second operand.
    #[serde(rename = "B")]
    pub b: i64,
    /// Least common multiple of `a` and `b` (0 if either is 0).
    pub kpk: i64,
    /// Elapsed microseconds for all iterative repetitions.
    #[serde(rename = "iterTimeUs")]
    pub iter_time_us: u64,
    /// Elapsed microseconds for all recursive repetitions.
    #[serde(rename = "recTimeUs")]
    pub rec_time_us: u64,
    /// How many times each variant ran.
    #[serde(skip)]
    pub repetitions: u64,
    /// When the run started.
    #[serde(skip)]
    pub timestamp: DateTime<Local>,
}
