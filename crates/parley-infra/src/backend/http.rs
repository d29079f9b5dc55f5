//! HttpCompletionBackend -- concrete [`CompletionBackend`] over HTTP.
//!
//! Posts the completion request as JSON to a configured endpoint and
//! extracts the reply via the ordered strategies in [`super::extract`].
//! At most one attempt per turn; retry policy belongs to callers.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use parley_core::completion::CompletionBackend;
use parley_types::error::BackendError;
use parley_types::message::CompletionRequest;

use super::extract::extract_reply;

/// HTTP completion backend.
pub struct HttpCompletionBackend {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl HttpCompletionBackend {
    /// Per-request timeout. Longer than typical generation, short
    /// enough that a hung backend degrades the turn instead of
    /// pinning the session actor indefinitely.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    /// Create a new backend targeting `endpoint`.
    pub fn new(endpoint: String, api_key: Option<SecretString>) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    fn classify(err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout
        } else {
            BackendError::Request(err.to_string())
        }
    }
}

impl CompletionBackend for HttpCompletionBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BackendError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(Self::classify)?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(BackendError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: serde_json::Value = response.json().await.map_err(Self::classify)?;

        extract_reply(&envelope).ok_or_else(|| {
            tracing::warn!(envelope = %envelope, "No known reply shape in backend response");
            BackendError::MalformedResponse(
                "no known reply field in response envelope".to_string(),
            )
        })
    }
}
