//! SQLite conversation store implementation.
//!
//! Implements `ConversationStore` from `parley-core` using sqlx with
//! split read/write pools. Each session owns one row; the message log
//! is stored as JSON text and replaced wholesale on save, so a reader
//! never observes a partial write.

use chrono::Utc;
use sqlx::Row;

use parley_core::store::ConversationStore;
use parley_types::error::StorageError;
use parley_types::message::Message;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationStore`.
pub struct SqliteConversationStore {
    pool: DatabasePool,
}

impl SqliteConversationStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl ConversationStore for SqliteConversationStore {
    async fn load(&self, session_id: &str) -> Result<Vec<Message>, StorageError> {
        let row = sqlx::query("SELECT messages FROM conversations WHERE session_id = ?")
            .bind(session_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        match row {
            Some(row) => {
                let raw: String = row
                    .try_get("messages")
                    .map_err(|e| StorageError::Unavailable(e.to_string()))?;
                serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, session_id: &str, messages: &[Message]) -> Result<(), StorageError> {
        let now = Utc::now().to_rfc3339();
        let raw = serde_json::to_string(messages)
            .map_err(|e| StorageError::Corrupt(format!("failed to serialize log: {e}")))?;

        sqlx::query(
            r#"INSERT INTO conversations (session_id, messages, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (session_id) DO UPDATE SET messages = excluded.messages, updated_at = excluded.updated_at"#,
        )
        .bind(session_id)
        .bind(&raw)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;

    async fn test_store() -> SqliteConversationStore {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        SqliteConversationStore::new(DatabasePool::new(&url).await.unwrap())
    }

    fn sample_log() -> Vec<Message> {
        vec![Message::user("Hello"), Message::assistant("Hi there")]
    }

    #[tokio::test]
    async fn test_save_load_roundtrip() {
        let store = test_store().await;

        store.save("s1", &sample_log()).await.unwrap();

        let loaded = store.load("s1").await.unwrap();
        assert_eq!(loaded, sample_log());
    }

    #[tokio::test]
    async fn test_load_unseen_session_returns_empty() {
        let store = test_store().await;
        let loaded = store.load("missing").await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_prior_snapshot() {
        let store = test_store().await;

        store.save("s1", &sample_log()).await.unwrap();

        let mut grown = sample_log();
        grown.push(Message::user("Again"));
        grown.push(Message::assistant("Still here"));
        store.save("s1", &grown).await.unwrap();

        let loaded = store.load("s1").await.unwrap();
        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded, grown);
    }

    #[tokio::test]
    async fn test_sessions_partitioned_by_key() {
        let store = test_store().await;

        store.save("a", &[Message::user("for a")]).await.unwrap();
        store.save("b", &[Message::user("for b")]).await.unwrap();

        assert_eq!(store.load("a").await.unwrap()[0].content, "for a");
        assert_eq!(store.load("b").await.unwrap()[0].content, "for b");
    }

    #[tokio::test]
    async fn test_save_empty_log() {
        let store = test_store().await;
        store.save("s1", &[]).await.unwrap();
        assert!(store.load("s1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_record_surfaces_as_corrupt() {
        let store = test_store().await;
        sqlx::query(
            "INSERT INTO conversations (session_id, messages, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind("bad")
        .bind("not json")
        .bind(Utc::now().to_rfc3339())
        .bind(Utc::now().to_rfc3339())
        .execute(&store.pool.writer)
        .await
        .unwrap();

        let err = store.load("bad").await.unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}
