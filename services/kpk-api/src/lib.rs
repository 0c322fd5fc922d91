// Copyright 2025 KPK Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP service for the KPK benchmark dashboard.
//!
//! Routes:
//! - `GET /kpk/run?a=<int>&b=<int>`: benchmark both LCM variants, reply with JSON
//! - everything else: static files from the configured asset directory

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

pub use config::{ServeArgs, ServiceConfig};
pub use error::ApiError;
pub use models::AppState;

/// Build the application router around an explicit state value.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .merge(routes::kpk::routes())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Bind the listener and serve until Ctrl-C.
///
/// # Errors
///
/// Fails if the address cannot be bound or the server stops abnormally.
pub async fn serve(config: ServiceConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    info!(
        addr = %config.listen_addr,
        static_dir = %config.static_dir.display(),
        repetitions = config.repetitions,
        "Server running at http://localhost:{}",
        config.listen_addr.port()
    );
    info!("Waiting for dashboard requests...");

    let app = build_router(AppState::new(&config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use kpk_benchmarks::MemorySink;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn asset_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../static")
    }

    fn test_app(sink: Arc<MemorySink>) -> Router {
        let config = ServiceConfig {
            static_dir: asset_dir(),
            repetitions: 100,
            ..ServiceConfig::default()
        };
        build_router(AppState::with_sink(&config, sink))
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn get_json(app: Router, uri: &str) -> serde_json::Value {
        let res = get(app, uri).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        let body = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn run_returns_lcm_and_timings() {
        let app = test_app(Arc::new(MemorySink::default()));
        let json = get_json(app, "/kpk/run?a=4&b=6").await;

        assert_eq!(json["A"], 4);
        assert_eq!(json["B"], 6);
        assert_eq!(json["kpk"], 12);
        assert!(json["iterTimeUs"].is_u64());
        assert!(json["recTimeUs"].is_u64());
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn run_without_params_defaults_to_zero() {
        let app = test_app(Arc::new(MemorySink::default()));
        let json = get_json(app, "/kpk/run").await;

        assert_eq!(json["A"], 0);
        assert_eq!(json["B"], 0);
        assert_eq!(json["kpk"], 0);
    }

    #[tokio::test]
    async fn run_with_garbage_params_defaults_to_zero() {
        let app = test_app(Arc::new(MemorySink::default()));
        let json = get_json(app, "/kpk/run?a=abc&b=6").await;

        assert_eq!(json["A"], 0);
        assert_eq!(json["B"], 6);
        assert_eq!(json["kpk"], 0);
    }

    #[tokio::test]
    async fn run_accepts_negative_operands() {
        let app = test_app(Arc::new(MemorySink::default()));
        let json = get_json(app, "/kpk/run?a=-4&b=6").await;

        assert_eq!(json["A"], -4);
        assert_eq!(json["kpk"], -12);
    }

    #[tokio::test]
    async fn repeated_requests_return_same_lcm() {
        let app = test_app(Arc::new(MemorySink::default()));
        let first = get_json(app.clone(), "/kpk/run?a=12&b=18").await;
        let second = get_json(app, "/kpk/run?a=12&b=18").await;

        assert_eq!(first["kpk"], 36);
        assert_eq!(first["kpk"], second["kpk"]);
    }

    #[tokio::test]
    async fn each_request_emits_one_matching_summary() {
        let sink = Arc::new(MemorySink::default());
        let app = test_app(sink.clone());

        let json = get_json(app.clone(), "/kpk/run?a=4&b=6").await;
        assert_eq!(json["kpk"], 12);
        let blocks = sink.blocks();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("Input -> A: 4, B: 6"));
        assert!(blocks[0].contains("LCM (kpk): 12"));

        get_json(app, "/kpk/run?a=7&b=7").await;
        let blocks = sink.blocks();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].contains("Input -> A: 7, B: 7"));
    }

    #[tokio::test]
    async fn repeated_params_keep_first_value_per_operand() {
        for uri in [
            "/kpk/run?a=4&b=6&b=9",
            "/kpk/run?a=4&a=5&b=6",
            "/kpk/run?a=4&b=6&c=1",
        ] {
            let app = test_app(Arc::new(MemorySink::default()));
            let json = get_json(app, uri).await;

            assert_eq!(json["A"], 4, "{uri}");
            assert_eq!(json["B"], 6, "{uri}");
            assert_eq!(json["kpk"], 12, "{uri}");
        }
    }

    #[tokio::test]
    async fn bad_operand_does_not_reset_the_other() {
        let app = test_app(Arc::new(MemorySink::default()));
        let json = get_json(app, "/kpk/run?a=4&a=x&b=oops&b=6").await;

        assert_eq!(json["A"], 4);
        assert_eq!(json["B"], 0);
        assert_eq!(json["kpk"], 0);
    }

    #[tokio::test]
    async fn post_to_run_is_not_allowed() {
        let app = test_app(Arc::new(MemorySink::default()));
        let res = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/kpk/run?a=4&b=6")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn root_serves_dashboard() {
        let app = test_app(Arc::new(MemorySink::default()));
        let res = get(app, "/").await;

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8_lossy(&body).contains("KPK Benchmark"));
    }

    #[tokio::test]
    async fn static_assets_get_content_type_by_extension() {
        let app = test_app(Arc::new(MemorySink::default()));
        let res = get(app, "/style.css").await;

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/css"));
    }

    #[tokio::test]
    async fn missing_static_file_is_not_found() {
        let app = test_app(Arc::new(MemorySink::default()));
        let res = get(app, "/does-not-exist.txt").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serve_fails_when_port_taken() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ServiceConfig {
            listen_addr: taken.local_addr().unwrap(),
            ..ServiceConfig::default()
        };

        let err = serve(config).await.unwrap_err();
        assert!(err.to_string().contains("failed to bind"));
    }
}
