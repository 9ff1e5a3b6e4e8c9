use crate::docs::openapi_json;
use crate::logging::{REQUEST_ID_HEADER, logging_middleware};
use crate::modules::auth::router::init_auth_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", Router::new().nest("/auth", init_auth_router()))
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .expose_headers([REQUEST_ID_HEADER.clone()])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
