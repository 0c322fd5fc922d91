use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use kpk_benchmarks::BenchmarkResult;
use kpk_core::Operand;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::models::AppState;

/// Raw query parameters; parsed leniently into [`Operand`]s.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunParams {
    pub a: Option<String>,
    pub b: Option<String>,
}

impl RunParams {
    /// Take the first value of each key; repeats and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "a" => &mut params.a,
                "b" => &mut params.b,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/kpk/run", get(run_kpk))
}

async fn run_kpk(
    State(state): State<Arc<AppState>>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<BenchmarkResult>, ApiError> {
    let params = query
        .map(|Query(pairs)| RunParams::from_pairs(pairs))
        .unwrap_or_default();
    let a = Operand::from_query(params.a.as_deref());
    let b = Operand::from_query(params.b.as_deref());

    if a.is_defaulted() || b.is_defaulted() {
        debug!(a_source = ?a.source, b_source = ?b.source, "Operands defaulted");
    }
    info!(
        a = a.value,
        b = b.value,
        repetitions = state.benchmarker.config().repetitions,
        "Benchmark requested"
    );

    // CPU-bound; keep it off the async workers.
    let benchmarker = state.benchmarker.clone();
    let result = tokio::task::spawn_blocking(move || benchmarker.run(a.value, b.value)).await?;

    Ok(Json(result))
}
