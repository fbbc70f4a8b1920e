// ============================================================================
// STUDY TRACKER API
// ============================================================================

// - Health check
// - Read-only users, study sessions, syllabus, calendar and analytics
// - Request logging, panic recovery, CORS
// - Configuration from .env / environment

use std::process::ExitCode;

use anyhow::Context;
use study_tracker_api::{config::Config, server};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded before logging so RUST_LOG from .env takes effect
    let config = Config::load();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", anyhow::Error::new(e).context("failed to load configuration"));
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    server::run(config)
        .await
        .context("failed to start server")?;

    Ok(())
}
