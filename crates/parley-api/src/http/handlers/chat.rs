//! POST /api/chat — one conversation turn.
//!
//! Validates the body, resolves the session actor through the service,
//! and returns the reply once both messages of the turn are durable.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::state::AppState;

/// Inbound turn request.
///
/// Fields default to empty so missing keys produce our 400 with a
/// readable message instead of a framework rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Reject a missing or blank required field before any actor is resolved.
fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!(
            "Missing or invalid {field}"
        )));
    }
    Ok(())
}

/// POST /api/chat — process one turn for a session.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    require("sessionId", &body.session_id)?;
    require("message", &body.message)?;

    let request_id = uuid::Uuid::now_v7();
    tracing::info!(%request_id, session_id = %body.session_id, "Chat turn accepted");

    let reply = state.chat.handle_turn(&body.session_id, &body.message).await?;

    Ok(Json(ChatResponse { reply }))
}
