//! Query endpoint: classify a free-text query and assemble its envelope.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::agent::classify;
use crate::app::AppState;
use crate::domain::ResponseEnvelope;
use crate::error::{ApiError, ApiResult};

/// POST /api/agent
///
/// Body: `{"query": "..."}`. The query must be a non-empty string; anything
/// else is rejected before classification is attempted.
pub async fn run_agent(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<ResponseEnvelope>> {
    let query = body
        .get("query")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query is required".to_string()))?;

    let intent = classify(query);
    tracing::debug!(intent = ?intent, query_len = query.len(), "Classified query");

    Ok(Json(state.assembler.assemble(intent, query)))
}
