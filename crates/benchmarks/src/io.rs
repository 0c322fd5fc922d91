//! I/O operations for benchmark results.
//!
//! This module writes benchmark results to an output directory as raw
//! per-run JSON, a combined JSON file and a markdown summary.

use crate::markdown;
use crate::result::BenchmarkResult;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default output directory path.
pub const OUTPUT_DIR: &str = "benchmarks/output";

/// Raw results subdirectory name.
pub const RAW_SUBDIR: &str = "raw";

/// Combined results file name.
pub const ALL_RESULTS_FILE: &str = "all_results.json";

/// Summary file name.
pub const SUMMARY_FILE: &str = "summary.md";

/// Ensure `dir` and its raw subdirectory exist.
pub fn ensure_output_dirs(dir: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(dir.as_ref().join(RAW_SUBDIR))
}

/// Write benchmark results to a JSON file.
pub fn write_results_json(results: &[BenchmarkResult], path: impl AsRef<Path>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)
}

/// File name used for a single raw result.
pub fn raw_file_name(result: &BenchmarkResult) -> String {
    format!("lcm_{}_{}.json", result.a, result.b)
}

/// Write an individual result into the raw subdirectory of `dir`.
pub fn write_raw_result(result: &BenchmarkResult, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
    let path = dir.as_ref().join(RAW_SUBDIR).join(raw_file_name(result));
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Write the markdown summary into `dir`.
pub fn write_summary(results: &[BenchmarkResult], dir: impl AsRef<Path>) -> io::Result<()> {
    let summary = markdown::generate_summary(results);
    fs::write(dir.as_ref().join(SUMMARY_FILE), summary)
}

/// Write all benchmark outputs (raw JSON, combined JSON and summary) into `dir`.
pub fn write_all_outputs(results: &[BenchmarkResult], dir: impl AsRef<Path>) -> io::Result<()> {
    let dir = dir.as_ref();
    ensure_output_dirs(dir)?;

    for result in results {
        write_raw_result(result, dir)?;
    }

    write_results_json(results, dir.join(ALL_RESULTS_FILE))?;
    write_summary(results, dir)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kpk-io-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_write_all_outputs_layout() {
        let dir = scratch_dir("layout");
        let results = vec![BenchmarkResult {
            a: 4,
            b: 6,
            kpk: 12,
            iter_time_us: 5,
            rec_time_us: 9,
            repetitions: 10,
            timestamp: Local::now(),
        }];

        write_all_outputs(&results, &dir).unwrap();

        let raw = fs::read_to_string(dir.join(RAW_SUBDIR).join("lcm_4_6.json")).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(raw["kpk"], 12);

        let all = fs::read_to_string(dir.join(ALL_RESULTS_FILE)).unwrap();
        let all: serde_json::Value = serde_json::from_str(&all).unwrap();
        assert_eq!(all.as_array().map(Vec::len), Some(1));

        let summary = fs::read_to_string(dir.join(SUMMARY_FILE)).unwrap();
        assert!(summary.contains("Total benchmarks: 1"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
