//! Timing harness for the two LCM variants.

use std::hint::black_box;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use kpk_core::{lcm_iterative, lcm_recursive};
use tracing::info;

use crate::result::BenchmarkResult;
use crate::summary::{summary_block, StdoutSink, SummarySink};

/// Repetitions per variant unless configured otherwise.
pub const DEFAULT_REPETITIONS: u64 = 1_000_000;

/// Harness settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// How many times each variant is run per benchmark.
    pub repetitions: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl BenchmarkConfig {
    /// Config with an explicit repetition count.
    pub fn with_repetitions(repetitions: u64) -> Self {
        Self { repetitions }
    }
}

/// Compute LCM(a, b) once, then time `config.repetitions` runs of each variant.
///
/// Timing uses a monotonic clock and truncates to whole microseconds.
pub fn run_benchmark(a: i64, b: i64, config: &BenchmarkConfig) -> BenchmarkResult {
    let timestamp = Local::now();
    let kpk = lcm_iterative(a, b);

    let iter_time_us = time_repeated(config.repetitions, || {
        lcm_iterative(black_box(a), black_box(b))
    });
    let rec_time_us = time_repeated(config.repetitions, || {
        lcm_recursive(black_box(a), black_box(b), black_box(a))
    });

    BenchmarkResult {
        a,
        b,
        kpk,
        iter_time_us,
        rec_time_us,
        repetitions: config.repetitions,
        timestamp,
    }
}

fn time_repeated(repetitions: u64, mut f: impl FnMut() -> i64) -> u64 {
    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(f());
    }
    whole_micros(start.elapsed())
}

fn whole_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

/// Runs benchmarks and reports each one to a [`SummarySink`].
#[derive(Clone)]
pub struct Benchmarker {
    config: BenchmarkConfig,
    sink: Arc<dyn SummarySink>,
}

impl std::fmt::Debug for Benchmarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Benchmarker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Benchmarker {
    fn default() -> Self {
        Self::new(BenchmarkConfig::default(), Arc::new(StdoutSink))
    }
}

impl Benchmarker {
    /// Create a benchmarker writing summaries to `sink`.
    pub fn new(config: BenchmarkConfig, sink: Arc<dyn SummarySink>) -> Self {
        Self { config, sink }
    }

    /// Harness settings in use.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Benchmark one operand pair and emit exactly one summary block.
    pub fn run(&self, a: i64, b: i64) -> BenchmarkResult {
        let result = run_benchmark(a, b, &self.config);

        info!(
            a = result.a,
            b = result.b,
            kpk = result.kpk,
            iter_time_us = result.iter_time_us,
            rec_time_us = result.rec_time_us,
            repetitions = result.repetitions,
            "Benchmark completed"
        );
        self.sink.emit(&summary_block(&result));

        result
    }
}
