use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::state::AppState;

pub mod ocr;

pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ocr", post(ocr::ocr_invoice))
        .route("/health", get(health_check))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "fapiao-ocr-ws",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
