//! Markdown output generation for benchmark results.
//!
//! This module renders benchmark results as markdown tables for the
//! CLI and the on-disk summary report.

use crate::result::BenchmarkResult;
use std::fmt::Write;

/// Generate a markdown summary from benchmark results.
pub fn generate_summary(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();

    writeln!(output, "# KPK Benchmark Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Local::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "## Results").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "| A | B | LCM | Iterative (μs) | Recursive (μs) | Repetitions | Timestamp |"
    )
    .unwrap();
    writeln!(output, "|---|---|-----|----------------|----------------|-------------|-----------|").unwrap();

    for result in results {
        writeln!(
            output,
            "| {} | {} | {} | {} | {} | {} | {} |",
            result.a,
            result.b,
            result.kpk,
            result.iter_time_us,
            result.rec_time_us,
            result.repetitions,
            result.timestamp.format("%Y-%m-%d %H:%M:%S"),
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(output, "Total benchmarks: {}", results.len()).unwrap();

    output
}
