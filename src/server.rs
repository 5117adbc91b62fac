use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::app::app;
use crate::config::AppConfig;
use crate::database::manager::DatabaseManager;
use crate::state::AppState;

/// Connect the store, serve until Ctrl-C / SIGTERM, then close the store
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let store = DatabaseManager::connect(&config.database)
        .await
        .context("failed to initialize store")?;

    let bind_addr = config.bind_addr();
    info!("Starting Frota API in {:?} mode ({} store)", config.environment, store.backend());

    let state = AppState::new(config, store.clone());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Frota API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received, draining connections");
}
