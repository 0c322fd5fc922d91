//! KPK benchmark server entry point.

use clap::Parser;
use kpk_api::{ServeArgs, ServiceConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from(ServeArgs::parse());

    if let Err(e) = kpk_api::serve(config).await {
        tracing::error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}
