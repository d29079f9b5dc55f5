//! Gateway error type mapping to HTTP status codes.
//!
//! Only three classes ever leave the gateway: validation failures
//! (4xx), storage failures (503 -- the one domain error that aborts a
//! turn), and unexpected internal errors (5xx). Backend failures never
//! appear here; the core converts them into assistant text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use parley_types::error::{StorageError, TurnError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing request fields.
    Validation(String),
    /// Durable store unreachable; the turn was not completed.
    Storage(StorageError),
    /// Anything else.
    Internal(String),
}

impl From<TurnError> for ApiError {
    fn from(e: TurnError) -> Self {
        match e {
            TurnError::InvalidInput(msg) => ApiError::Validation(msg),
            TurnError::Storage(e) => ApiError::Storage(e),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Storage(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::Storage(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORAGE_UNAVAILABLE",
                e.to_string(),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_error_mapping() {
        let err: ApiError = TurnError::InvalidInput("empty".to_string()).into();
        assert!(matches!(err, ApiError::Validation(_)));

        let err: ApiError = TurnError::Storage(StorageError::Unavailable("down".to_string())).into();
        assert!(matches!(err, ApiError::Storage(_)));
    }

    #[test]
    fn test_status_codes() {
        let resp = ApiError::Validation("bad".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError::Storage(StorageError::Unavailable("down".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let resp = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
