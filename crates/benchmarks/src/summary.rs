//! Human-readable console summary of a benchmark run.
//!
//! One block is written per run. Sinks must write a block in one piece so
//! that concurrent runs never interleave their lines.
//!
//! The block, header and inputs included, is emitted after both timing
//! loops finish. A long-running request prints nothing until it completes;
//! the `Benchmark requested` tracing event marks its start.

use std::io::Write;
use std::sync::Mutex;

use crate::result::BenchmarkResult;

const RULE: &str = "==================================================";

/// Destination for summary blocks.
pub trait SummarySink: Send + Sync {
    /// Write one complete block.
    fn emit(&self, block: &str);
}

/// Writes blocks to standard output under the stdout lock.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl SummarySink for StdoutSink {
    fn emit(&self, block: &str) {
        let mut out = std::io::stdout().lock();
        // Console output is best effort; a closed stdout must not fail the run.
        let _ = out.write_all(block.as_bytes());
        let _ = out.flush();
    }
}

/// Collects blocks in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    blocks: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Snapshot of every block emitted so far.
    pub fn blocks(&self) -> Vec<String> {
        self.blocks
            .lock()
            .map(|blocks| blocks.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl SummarySink for MemorySink {
    fn emit(&self, block: &str) {
        let mut blocks = self
            .blocks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        blocks.push(block.to_string());
    }
}

/// Render the summary block for `result`.
pub fn summary_block(result: &BenchmarkResult) -> String {
    format!(
        "\n{RULE}\n\
         [{}] Request received\n\
         Input -> A: {}, B: {}\n\
         LCM (kpk): {}\n\
         Iterative running time: {} μs\n\
         Recursive running time: {} μs\n\
         {RULE}\n",
        result.timestamp.format("%H:%M:%S"),
        result.a,
        result.b,
        result.kpk,
        result.iter_time_us,
        result.rec_time_us,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn sample() -> BenchmarkResult {
        BenchmarkResult {
            a: 4,
            b: 6,
            kpk: 12,
            iter_time_us: 321,
            rec_time_us: 654,
            repetitions: 1_000_000,
            timestamp: Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    #[test]
    fn test_summary_block_layout() {
        let block = summary_block(&sample());
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(
            lines,
            vec![
                "",
                RULE,
                "[09:26:53] Request received",
                "Input -> A: 4, B: 6",
                "LCM (kpk): 12",
                "Iterative running time: 321 μs",
                "Recursive running time: 654 μs",
                RULE,
            ]
        );
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn test_memory_sink_keeps_blocks_whole() {
        let sink = MemorySink::default();
        sink.emit("one\ntwo\n");
        sink.emit("three\n");
        assert_eq!(sink.blocks(), vec!["one\ntwo\n".to_string(), "three\n".to_string()]);
    }
}
