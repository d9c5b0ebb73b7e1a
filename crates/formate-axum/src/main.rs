//! formate server binary.

use std::process::ExitCode;

use clap::Parser;
use formate_axum::{ServerArgs, start_server};
use tracing::{error, info};

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    // Priority: RUST_LOG env var > default
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .try_init()
        .ok(); // Ignore error if already initialized
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerArgs::parse().into_config();
    info!(environment = %config.app_env, "formate starting");

    match start_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
