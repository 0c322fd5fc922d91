//! Benchmark harness for the KPK (least common multiple) algorithms.
//!
//! Every benchmark computes LCM(a, b) once for display, then times a fixed
//! number of repetitions of the iterative and the recursive variant.
//!
//! # Quick Start
//!
//! ```no_run
//! use kpk_benchmarks::{run_benchmark, BenchmarkConfig};
//!
//! let result = run_benchmark(4, 6, &BenchmarkConfig::default());
//! println!("{} us vs {} us", result.iter_time_us, result.rec_time_us);
//! ```
//!
//! # Modules
//!
//! - [`harness`] - Timing loops and the [`Benchmarker`]
//! - [`result`] - The `BenchmarkResult` value object
//! - [`summary`] - Console summary blocks and their sinks
//! - [`io`] - Writing results to disk
//! - [`markdown`] - Markdown report generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod harness;
pub mod io;
pub mod markdown;
pub mod result;
pub mod summary;

pub use harness::{run_benchmark, BenchmarkConfig, Benchmarker, DEFAULT_REPETITIONS};
pub use result::BenchmarkResult;
pub use summary::{summary_block, MemorySink, StdoutSink, SummarySink};

use std::path::Path;

/// Operand pairs benchmarked when no explicit pairs are given.
pub const DEFAULT_PAIRS: &[(i64, i64)] = &[(4, 6), (7, 7), (1, 1), (12, 18), (21, 6)];

/// Benchmark every operand pair in order.
pub fn run_all_benchmarks(benchmarker: &Benchmarker, pairs: &[(i64, i64)]) -> Vec<BenchmarkResult> {
    pairs.iter().map(|&(a, b)| benchmarker.run(a, b)).collect()
}

/// Benchmark every pair and write raw JSON, combined JSON and a markdown
/// summary into `dir`.
///
/// # Errors
///
/// Returns an `io::Error` if writing output files fails.
pub fn run_and_write_all(
    benchmarker: &Benchmarker,
    pairs: &[(i64, i64)],
    dir: impl AsRef<Path>,
) -> std::io::Result<Vec<BenchmarkResult>> {
    let results = run_all_benchmarks(benchmarker, pairs);
    io::write_all_outputs(&results, dir)?;
    Ok(results)
}
