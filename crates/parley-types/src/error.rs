use thiserror::Error;

/// Errors from the durable conversation store.
///
/// Storage failures are the only errors that abort a turn: a turn is not
/// complete until both of its messages are durable.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("corrupt conversation record: {0}")]
    Corrupt(String),
}

/// Errors from the external completion backend.
///
/// These never abort a turn; the completion client converts them into a
/// tagged assistant reply so the conversation continues.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    #[error("rate limited")]
    RateLimited,

    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unrecognized response shape: {0}")]
    MalformedResponse(String),
}

/// Errors surfaced to the caller of a conversation turn.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "storage unavailable: connection refused");
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::Status {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));
    }

    #[test]
    fn test_turn_error_from_storage() {
        let err: TurnError = StorageError::Unavailable("down".to_string()).into();
        assert!(matches!(err, TurnError::Storage(_)));
        assert!(err.to_string().contains("down"));
    }
}
