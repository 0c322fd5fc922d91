//! KPK benchmark CLI entry point.

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = kpk_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
