//! Boot sequence: configuration, telemetry, user directory, HTTP server.

use std::sync::Arc;

use tracing::info;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::http::router::ApiServer;
use crate::state::AppState;
use crate::telemetry::{DEFAULT_LOG_LEVEL, LoggingConfig, build_version, init_logging};
use crate::users::{InMemoryUsers, SharedUsers};

/// Entry point for the server boot sequence.
///
/// # Errors
///
/// Returns an error if configuration, telemetry, seeding or serving fails.
pub async fn run_app() -> ServerResult<()> {
    let config = ServerConfig::from_env()?;
    init_logging(&LoggingConfig {
        level: DEFAULT_LOG_LEVEL,
        format: config.log_format,
    })
    .map_err(|err| ServerError::Telemetry {
        detail: err.to_string(),
    })?;
    run_with(config).await
}

/// Boot with an already resolved configuration; telemetry must be installed by the caller.
///
/// # Errors
///
/// Returns an error if seeding or serving fails.
pub async fn run_with(config: ServerConfig) -> ServerResult<()> {
    info!(
        mode = config.mode.as_str(),
        version = build_version(),
        web_dist = %config.web_dist.display(),
        "slash server starting"
    );

    let users: SharedUsers = Arc::new(
        InMemoryUsers::with_owner(&config.owner)
            .map_err(|source| ServerError::OwnerSeed { source })?,
    );
    let state = Arc::new(AppState::new(config.mode, users, config.web_dist.clone()));
    ApiServer::new(state)
        .serve(config.bind_addr, shutdown_signal())
        .await?;

    info!("server stopped properly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
