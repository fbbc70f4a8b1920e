use std::io;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::Config, routes::build_router};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server error")]
    Serve(#[from] io::Error),
}

/// Binds the configured address and serves until shutdown is signalled.
pub async fn run(config: &Config) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve(listener).await
}

/// Serves the API on an already bound listener.
pub async fn serve(listener: TcpListener) -> Result<(), ServerError> {
    let local_addr = listener.local_addr()?;

    info!("Server running on http://{}", local_addr);
    info!("API Endpoints:");
    info!("  GET    /health               - Health check");
    info!("  GET    /api/users            - List users");
    info!("  GET    /api/study-sessions   - List study sessions");
    info!("  GET    /api/syllabus         - Syllabus");
    info!("  GET    /api/calendar         - Calendar");
    info!("  GET    /api/analytics        - Analytics");

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
