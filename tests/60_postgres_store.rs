mod common;

use std::sync::Arc;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

use frota_api::config::{AppConfig, StoreBackend};
use frota_api::database::DatabaseManager;

/// Runs only when DATABASE_URL points at a reachable PostgreSQL
async fn postgres_server() -> Result<Option<common::TestServer>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping postgres test");
        return Ok(None);
    };

    let mut config: AppConfig = common::test_config();
    config.database.backend = StoreBackend::Postgres;
    config.database.url = Some(url);
    config.database.max_connections = 2;

    let store = DatabaseManager::connect_postgres(&config.database).await?;
    store.migrate().await?;

    Ok(Some(common::spawn_with(config, Arc::new(store)).await?))
}

#[tokio::test]
async fn postgres_enforces_driver_vehicle_rules() -> Result<()> {
    let Some(server) = postgres_server().await? else {
        return Ok(());
    };

    let (status, ana) = server
        .post("/motoristas/", json!({ "name": "Ana (postgres test)" }))
        .await?;
    assert_eq!(status, StatusCode::OK);
    let ana_path = format!("/motoristas/{}", ana["id"]);

    let (status, veiculo) = server
        .post("/veiculos/", json!({ "motorista_id": ana["id"], "plate": "PG0001" }))
        .await?;
    assert_eq!(status, StatusCode::OK);
    let veiculo_path = format!("/veiculos/{}", veiculo["id"]);

    let (status, _) = server
        .post("/veiculos/", json!({ "motorista_id": ana["id"], "plate": "PG0002" }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server.delete(&ana_path).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, deleted) = server.delete(&veiculo_path).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, veiculo);

    let (status, deleted) = server.delete(&ana_path).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, ana);

    let (status, _) = server.put(&ana_path, json!({ "name": "gone" })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
