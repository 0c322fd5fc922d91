// Copyright 2025 KPK Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared application state.

use std::path::PathBuf;
use std::sync::Arc;

use kpk_benchmarks::{Benchmarker, StdoutSink, SummarySink};

use crate::config::ServiceConfig;

/// State shared by all handlers. Immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Runs benchmarks and writes the console summary.
    pub benchmarker: Benchmarker,
    /// Root of the static dashboard assets.
    pub static_dir: PathBuf,
}

impl AppState {
    /// State writing summaries to stdout.
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_sink(config, Arc::new(StdoutSink))
    }

    /// State writing summaries to `sink`.
    pub fn with_sink(config: &ServiceConfig, sink: Arc<dyn SummarySink>) -> Self {
        Self {
            benchmarker: Benchmarker::new(config.benchmark(), sink),
            static_dir: config.static_dir.clone(),
        }
    }
}
