//! Shared test doubles for the store and backend seams.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use parley_types::error::{BackendError, StorageError};
use parley_types::message::{CompletionRequest, Message, MessageRole};

use crate::completion::CompletionBackend;
use crate::store::ConversationStore;

/// In-memory `ConversationStore` with switchable write failures.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    data: Mutex<HashMap<String, Vec<Message>>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl ConversationStore for MemoryStore {
    async fn load(&self, session_id: &str) -> Result<Vec<Message>, StorageError> {
        let data = self.inner.data.lock().unwrap();
        Ok(data.get(session_id).cloned().unwrap_or_default())
    }

    async fn save(&self, session_id: &str, messages: &[Message]) -> Result<(), StorageError> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("simulated outage".to_string()));
        }
        let mut data = self.inner.data.lock().unwrap();
        data.insert(session_id.to_string(), messages.to_vec());
        Ok(())
    }
}

/// Deterministic `CompletionBackend` for tests.
pub struct ScriptedBackend {
    mode: BackendMode,
}

enum BackendMode {
    /// Reply with `echo: <latest user message>`.
    Echo,
    /// Like `Echo`, after sleeping for the given duration.
    SlowEcho(Duration),
    /// Always fail with a transient request error.
    Failing,
}

impl ScriptedBackend {
    pub fn echo() -> Self {
        Self {
            mode: BackendMode::Echo,
        }
    }

    pub fn slow_echo(delay: Duration) -> Self {
        Self {
            mode: BackendMode::SlowEcho(delay),
        }
    }

    pub fn failing() -> Self {
        Self {
            mode: BackendMode::Failing,
        }
    }

    fn latest_user(request: &CompletionRequest) -> String {
        request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.clone())
            .unwrap_or_default()
    }
}

impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BackendError> {
        match &self.mode {
            BackendMode::Echo => Ok(format!("echo: {}", Self::latest_user(request))),
            BackendMode::SlowEcho(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(format!("echo: {}", Self::latest_user(request)))
            }
            BackendMode::Failing => Err(BackendError::Request("connection reset".to_string())),
        }
    }
}
