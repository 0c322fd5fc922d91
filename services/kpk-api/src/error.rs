// Copyright 2025 KPK Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by request handlers.
///
/// Bad operands are not errors; they default to 0.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The blocking benchmark task panicked or was cancelled.
    #[error("benchmark task failed: {0}")]
    BenchmarkTask(#[from] tokio::task::JoinError),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::BenchmarkTask(_) => "BENCHMARK_TASK_FAILED",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            },
            "meta": {
                "timestamp": Utc::now().to_rfc3339(),
            }
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
