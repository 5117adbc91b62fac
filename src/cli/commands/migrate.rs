use anyhow::{bail, Context};
use tracing::info;

use crate::config::{AppConfig, StoreBackend};
use crate::database::manager::DatabaseManager;

pub async fn handle(config: AppConfig) -> anyhow::Result<()> {
    if config.database.backend != StoreBackend::Postgres {
        bail!("migrate only applies to the postgres backend (STORE_BACKEND=postgres)");
    }

    let store = DatabaseManager::connect_postgres(&config.database)
        .await
        .context("failed to connect to database")?;
    store.migrate().await.context("failed to apply schema")?;
    store.pool().close().await;

    info!("Migration finished");
    Ok(())
}
