use axum::{Json, extract::State};
use std::sync::Arc;
use std::time::Instant;
use crate::error::ExplainError;
use crate::explain::explain;
use crate::state::AppState;
use crate::models::{ExplainRequest, ExplanationResult};
use crate::metrics::{REQUEST_TOTAL, REQUEST_LATENCY};

pub async fn explain_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ExplainRequest>,
) -> Result<Json<ExplanationResult>, ExplainError> {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    let result = explain(&state, payload).await;

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    result.map(Json)
}
