use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::handlers::{motoristas, system, veiculos};
use crate::state::AppState;

/// Build the full router for `state`. Middleware follows `state.config`.
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(motorista_routes())
        .merge(veiculo_routes())
        .fallback(fallback)
        .with_state(state);

    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    if let Some(cors) = cors_layer(&config) {
        router = router.layer(cors);
    }

    router.layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
}

fn motorista_routes() -> Router<AppState> {
    let collection = get(motoristas::list).post(motoristas::post);

    Router::new()
        .route("/motoristas", collection.clone())
        .route("/motoristas/", collection)
        .route(
            "/motoristas/:id",
            get(motoristas::get)
                .put(motoristas::put)
                .delete(motoristas::delete),
        )
}

fn veiculo_routes() -> Router<AppState> {
    let collection = get(veiculos::list).post(veiculos::post);

    Router::new()
        .route("/veiculos", collection.clone())
        .route("/veiculos/", collection)
        .route(
            "/veiculos/:id",
            get(veiculos::get)
                .put(veiculos::put)
                .delete(veiculos::delete),
        )
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.security.enable_cors {
        return None;
    }
    if config.is_development() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

async fn fallback() -> ApiError {
    ApiError::not_found("Route not found")
}
