//! Chat service orchestrating routing, actors, and persistence.
//!
//! `ChatService` is what the gateway talks to: it resolves the target
//! actor via the router and forwards the operation. Generic over the
//! store and backend seams so parley-core never depends on parley-infra.

use parley_types::config::ServiceConfig;
use parley_types::error::{StorageError, TurnError};
use parley_types::message::Message;

use crate::completion::{CompletionBackend, CompletionClient};
use crate::router::SessionRouter;
use crate::store::ConversationStore;

/// Routes each request to its session actor and runs the operation.
pub struct ChatService<S: ConversationStore, B: CompletionBackend> {
    store: S,
    client: CompletionClient<B>,
    router: SessionRouter,
}

impl<S: ConversationStore, B: CompletionBackend> ChatService<S, B> {
    /// Wire the service. `backend: None` runs in offline mode.
    pub fn new(store: S, backend: Option<B>, config: &ServiceConfig) -> Self {
        Self {
            store,
            client: CompletionClient::new(backend, config),
            router: SessionRouter::new(),
        }
    }

    /// Process one turn for a session: resolve the actor, run the
    /// serialized mutation, return the reply once it is durable.
    pub async fn handle_turn(&self, session_id: &str, message: &str) -> Result<String, TurnError> {
        if session_id.trim().is_empty() {
            return Err(TurnError::InvalidInput(
                "sessionId must not be empty".to_string(),
            ));
        }

        let actor = self.router.resolve(session_id);
        actor.handle_turn(&self.store, &self.client, message).await
    }

    /// Read the full ordered history for a session.
    ///
    /// Empty for an unseen session, never an error for absence.
    pub async fn history(&self, session_id: &str) -> Result<Vec<Message>, StorageError> {
        let actor = self.router.resolve(session_id);
        actor.history(&self.store).await
    }

    /// Evict the live actor for a session; state survives in the store.
    pub fn evict(&self, session_id: &str) {
        self.router.evict(session_id);
    }
}
