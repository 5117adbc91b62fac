use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - Service index
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Frota API",
        "version": version,
        "environment": state.config.environment,
        "store": state.store.backend(),
        "endpoints": {
            "motoristas": "/motoristas/[:id]",
            "veiculos": "/veiculos/[:id]",
            "health": "/health",
        }
    }))
}

/// GET /health - Store connectivity through a fresh session
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let result = match state.store.session().await {
        Ok(mut session) => session.ping().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": state.store.backend(),
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string(),
                })),
            )
        }
    }
}
