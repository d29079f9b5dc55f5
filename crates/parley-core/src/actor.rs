//! Session actor: the single owner of one session's conversation state.
//!
//! All mutation goes through [`SessionActor::handle_turn`], which runs
//! under a per-actor async mutex. Tokio's `Mutex` queues waiters in
//! FIFO order, so turns for one session are processed strictly in
//! arrival order while other sessions' actors proceed untouched.
//!
//! A turn runs to completion once accepted: success, a degraded reply,
//! or a storage failure. There is no mid-flight cancellation and no
//! partial state observable by callers.

use tokio::sync::Mutex;

use parley_types::error::{StorageError, TurnError};
use parley_types::message::Message;

use crate::completion::{CompletionBackend, CompletionClient};
use crate::log::ConversationLog;
use crate::store::ConversationStore;

/// One logical actor per session key.
///
/// The log is loaded lazily on first touch and kept resident. Eviction
/// loses only warmth: the actor's entire state is reconstructible from
/// the durable store.
pub struct SessionActor {
    session_id: String,
    /// `None` until the first turn or history read hydrates the log.
    log: Mutex<Option<ConversationLog>>,
}

impl SessionActor {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            log: Mutex::new(None),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Process one conversation turn.
    ///
    /// Appends the user message, obtains a reply from the completion
    /// client (which never fails), appends the assistant message, and
    /// persists the whole log. Only after both messages are durable is
    /// the reply returned. If persistence fails, the in-memory tail is
    /// unwound so resident state never runs ahead of durable state, and
    /// the caller sees `TurnError::Storage`.
    pub async fn handle_turn<S, B>(
        &self,
        store: &S,
        client: &CompletionClient<B>,
        user_text: &str,
    ) -> Result<String, TurnError>
    where
        S: ConversationStore,
        B: CompletionBackend,
    {
        // The gateway validates first; the actor re-asserts the invariant.
        if user_text.trim().is_empty() {
            return Err(TurnError::InvalidInput(
                "message must not be empty".to_string(),
            ));
        }

        let mut guard = self.log.lock().await;
        let log = self.hydrate(&mut guard, store).await?;
        let checkpoint = log.len();

        log.append(Message::user(user_text));
        let reply = client.complete(log.messages()).await;
        log.append(Message::assistant(reply.clone()));

        if let Err(err) = store.save(&self.session_id, log.messages()).await {
            tracing::error!(
                session_id = %self.session_id,
                error = %err,
                "Persist failed, unwinding turn"
            );
            log.truncate(checkpoint);
            return Err(err.into());
        }

        tracing::debug!(
            session_id = %self.session_id,
            log_len = log.len(),
            "Turn persisted"
        );
        Ok(reply)
    }

    /// Read the full ordered history for this session.
    ///
    /// Takes the actor lock, so a history read never observes a turn
    /// half-applied. Returns an empty sequence for an unseen session.
    pub async fn history<S: ConversationStore>(
        &self,
        store: &S,
    ) -> Result<Vec<Message>, StorageError> {
        let mut guard = self.log.lock().await;
        let log = self.hydrate(&mut guard, store).await?;
        Ok(log.messages().to_vec())
    }

    /// Load the log from the store if this actor is cold.
    async fn hydrate<'a, S: ConversationStore>(
        &self,
        guard: &'a mut Option<ConversationLog>,
        store: &S,
    ) -> Result<&'a mut ConversationLog, StorageError> {
        if guard.is_none() {
            let messages = store.load(&self.session_id).await?;
            tracing::debug!(
                session_id = %self.session_id,
                loaded = messages.len(),
                "Hydrated session from store"
            );
            *guard = Some(ConversationLog::from_messages(messages));
        }
        Ok(guard.as_mut().expect("log hydrated above"))
    }
}
