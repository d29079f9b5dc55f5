//! ConversationStore trait definition.
//!
//! The durable store holds one record per session: the full ordered
//! message sequence, replaced wholesale on save. It is the only
//! resource shared across session actors, and it is partitioned by
//! session key, so no cross-session transaction is ever needed.
//!
//! Implementations live in parley-infra (e.g. `SqliteConversationStore`).
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use parley_types::error::StorageError;
use parley_types::message::Message;

/// Durable get/put-whole-value storage for conversation logs.
pub trait ConversationStore: Send + Sync {
    /// Load the ordered message sequence for a session.
    ///
    /// Returns an empty sequence (never an absent value) when the
    /// session has no prior history.
    fn load(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, StorageError>> + Send;

    /// Durably write the full current sequence for a session,
    /// atomically replacing any prior snapshot.
    fn save(
        &self,
        session_id: &str,
        messages: &[Message],
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}
