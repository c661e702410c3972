pub mod agent;
pub mod document;
pub mod health;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/agent", post(agent::run_agent))
        .route("/api/document", post(document::analyze_document))
}
