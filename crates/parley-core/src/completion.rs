//! Completion backend seam and the degraded-mode client policy.
//!
//! [`CompletionClient::complete`] never fails: backend errors and
//! offline operation are converted into clearly tagged assistant text.
//! A dropped turn cannot be retried transparently from the user's
//! perspective once their message is in the log, so conversational
//! continuity wins over strict error propagation.

use parley_types::config::ServiceConfig;
use parley_types::error::BackendError;
use parley_types::message::{CompletionRequest, Message, MessageRole};

/// A completion backend that turns a conversation into a reply string.
///
/// Implementations live in parley-infra (e.g. `HttpCompletionBackend`).
pub trait CompletionBackend: Send + Sync {
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<String, BackendError>> + Send;
}

/// Wraps a backend with the service's reply policy.
///
/// `backend: None` is offline mode: the pipeline stays exercisable
/// without the external dependency, replies are tagged placeholders.
pub struct CompletionClient<B: CompletionBackend> {
    backend: Option<B>,
    model: String,
    system_prompt: String,
    max_tokens: u32,
}

impl<B: CompletionBackend> CompletionClient<B> {
    pub fn new(backend: Option<B>, config: &ServiceConfig) -> Self {
        Self {
            backend,
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Produce a reply for the given ordered history.
    ///
    /// The history must already include the just-appended user turn.
    /// Always returns some assistant text; failures are recorded as
    /// content rather than propagated.
    pub async fn complete(&self, history: &[Message]) -> String {
        let latest_user = history
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        let Some(backend) = &self.backend else {
            return format!("LOCAL MODE (no backend): stored message \"{latest_user}\"");
        };

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: history.to_vec(),
            system: Some(self.system_prompt.clone()),
            max_tokens: self.max_tokens,
        };

        match backend.complete(&request).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "Completion backend failed, degrading turn");
                format!("backend error: {err}")
            }
        }
    }
}
