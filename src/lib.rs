pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod notion;
pub mod routes;
pub mod services;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cache::QueryCache;
use crate::config::AppConfig;
use crate::notion::NotionClient;

/// Shared application state passed to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub notion: NotionClient,
    pub cache: QueryCache,
}

/// Build the application router over the shared state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::ui::index))
        .route("/api/v1/dashboard", get(routes::dashboard::view))
        .route("/api/v1/goals/debug", get(routes::dashboard::goals_debug))
        .route("/api/v1/cache/refresh", post(routes::dashboard::refresh_cache))
        .route("/health/live", get(routes::health::live))
        .route("/health/ready", get(routes::health::ready))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
