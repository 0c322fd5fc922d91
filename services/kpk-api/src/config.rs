// Copyright 2025 KPK Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Service configuration.
//!
//! Defaults reproduce the stock deployment: all interfaces on port 8080,
//! dashboard assets from `./static`, one million repetitions per variant.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use kpk_benchmarks::{BenchmarkConfig, DEFAULT_REPETITIONS};

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Default static asset directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the listener binds to.
    pub listen_addr: SocketAddr,
    /// Directory served for every path other than `/kpk/run`.
    pub static_dir: PathBuf,
    /// Repetitions per LCM variant per request.
    pub repetitions: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl ServiceConfig {
    /// Harness settings derived from this config.
    pub fn benchmark(&self) -> BenchmarkConfig {
        BenchmarkConfig::with_repetitions(self.repetitions)
    }
}

/// Command-line flags for the `kpk-api` binary.
#[derive(Debug, Parser)]
#[command(name = "kpk-api")]
#[command(author, version, about = "Serve the KPK benchmark dashboard", long_about = None)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long = "listen", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Directory holding index.html and the other dashboard assets.
    #[arg(long, default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// Repetitions per LCM variant per request.
    #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
    pub repetitions: u64,
}

impl From<ServeArgs> for ServiceConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            listen_addr: args.listen_addr,
            static_dir: args.static_dir,
            repetitions: args.repetitions,
        }
    }
}
