//! CLI for the KPK benchmark.
//!
//! This crate provides an offline front end to the benchmark harness:
//! a single `bench` run and a `run` sweep that writes report files.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use kpk_benchmarks::{
    io::OUTPUT_DIR, markdown, run_and_write_all, BenchmarkConfig, Benchmarker, DEFAULT_PAIRS,
    DEFAULT_REPETITIONS,
};
use std::sync::Arc;

/// KPK benchmark CLI.
#[derive(Parser, Debug)]
#[command(name = "kpk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for `bench`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The same JSON object the HTTP endpoint returns.
    Json,
    /// A one-row markdown table.
    Markdown,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Benchmark a single operand pair and print the result.
    Bench {
        /// First operand.
        #[arg(short, long, allow_negative_numbers = true)]
        a: i64,

        /// Second operand.
        #[arg(short, long, allow_negative_numbers = true)]
        b: i64,

        /// Repetitions per variant.
        #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
        repetitions: u64,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Benchmark several operand pairs and write reports.
    ///
    /// Results are written to:
    /// - <output>/raw/ - Individual JSON files per pair
    /// - <output>/all_results.json - Combined JSON file
    /// - <output>/summary.md - Markdown summary
    Run {
        /// Operand pair as `A,B`; repeatable. Defaults to a built-in set.
        #[arg(short, long = "pair", value_parser = parse_pair, allow_negative_numbers = true)]
        pairs: Vec<(i64, i64)>,

        /// Output directory.
        #[arg(short, long, default_value = OUTPUT_DIR)]
        output: PathBuf,

        /// Repetitions per variant.
        #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
        repetitions: u64,

        /// Verbose output.
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Parse an `A,B` operand pair.
pub fn parse_pair(raw: &str) -> Result<(i64, i64), String> {
    let (a, b) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected A,B but got {raw:?}"))?;
    let a = a.trim().parse().map_err(|e| format!("bad A in {raw:?}: {e}"))?;
    let b = b.trim().parse().map_err(|e| format!("bad B in {raw:?}: {e}"))?;
    Ok((a, b))
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> anyhow::Result<()> {
    execute(Cli::parse())
}

/// Execute an already parsed command line.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Bench {
            a,
            b,
            repetitions,
            format,
        } => {
            let benchmarker = benchmarker(repetitions);
            let result = benchmarker.run(a, b);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
                OutputFormat::Markdown => print!("{}", markdown::generate_summary(&[result])),
            }

            Ok(())
        }
        Commands::Run {
            pairs,
            output,
            repetitions,
            verbose,
        } => {
            let pairs = if pairs.is_empty() {
                DEFAULT_PAIRS.to_vec()
            } else {
                pairs
            };

            if verbose {
                println!("Benchmarking {} pairs...", pairs.len());
            }

            let results = run_and_write_all(&benchmarker(repetitions), &pairs, &output)
                .with_context(|| format!("writing reports to {}", output.display()))?;

            println!("Completed {} benchmarks", results.len());
            println!("Results written to {}", output.display());

            if verbose {
                for result in &results {
                    println!(
                        "  - lcm({}, {}) = {}: iterative {} μs, recursive {} μs",
                        result.a, result.b, result.kpk, result.iter_time_us, result.rec_time_us
                    );
                }
            }

            Ok(())
        }
    }
}

fn benchmarker(repetitions: u64) -> Benchmarker {
    Benchmarker::new(
        BenchmarkConfig::with_repetitions(repetitions),
        Arc::new(kpk_benchmarks::StdoutSink),
    )
}
