//! In-memory conversation log.
//!
//! An append-only ordered sequence of role-tagged messages for one
//! session. Appends are pure (no I/O); durability is the store's job.
//! A persisted prefix is never rewritten or reordered.

use parley_types::message::Message;

/// The ordered message log for one session.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    /// Wrap a message sequence loaded from durable storage.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Append a message to the in-memory tail. No I/O.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The full ordered sequence, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop messages appended after `len`.
    ///
    /// Used to unwind a turn whose persist failed, so resident state
    /// never runs ahead of durable state. Never shortens below an
    /// already-persisted prefix.
    pub fn truncate(&mut self, len: usize) {
        self.messages.truncate(len);
    }
}
