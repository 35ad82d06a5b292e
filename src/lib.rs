use axum::{extract::DefaultBodyLimit, Router};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

use api::create_api_router;
use state::AppState;

pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    let max_upload_bytes = app_state.config.server.max_upload_size_mb as usize * 1024 * 1024;
    let request_timeout = Duration::from_secs(app_state.config.server.request_timeout_seconds);

    create_api_router()
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // All origins/methods/headers allowed; the frontend is served
                // from a separate dev origin.
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
