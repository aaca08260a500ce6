use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

// Application state
#[derive(Clone)]
pub struct AppState {
    config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        Self { config }
    }
}

/// Builds the HTTP application. Each request scans with its own selector.
pub fn app(config: config::Config) -> Router {
    let state = Arc::new(AppState::new(config));

    Router::new()
        .merge(routes::routes())
        .merge(routes::nth_max::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
