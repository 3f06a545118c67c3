pub mod cache;
pub mod config;
pub mod error;
pub mod explain;
pub mod handlers;
pub mod llm;
pub mod metrics;
pub mod models;
pub mod ocr;
pub mod prompts;
pub mod state;

use axum::{Router, routing::{get, post}};
use std::sync::Arc;
use crate::state::AppState;

// creating the router with routes
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/explain", post(handlers::explain_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
