//! GET /api/history — read a session's stored conversation.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use parley_types::message::Message;

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    #[serde(default)]
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<Message>,
}

/// GET /api/history?sessionId=... — full ordered history.
///
/// A session with no history returns 200 with an empty list.
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    if query.session_id.trim().is_empty() {
        return Err(ApiError::Validation("Missing sessionId".to_string()));
    }

    let messages = state.chat.history(&query.session_id).await?;
    Ok(Json(HistoryResponse { messages }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parses_camel_case() {
        let query: HistoryQuery = serde_json::from_str(r#"{"sessionId": "s1"}"#).unwrap();
        assert_eq!(query.session_id, "s1");
    }

    #[test]
    fn test_response_shape_is_role_content_pairs() {
        let resp = HistoryResponse {
            messages: vec![Message::user("hi"), Message::assistant("hello")],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hello");
    }
}
