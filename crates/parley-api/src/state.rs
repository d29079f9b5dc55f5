//! Application state wiring the service to its infrastructure.
//!
//! The core service is generic over store and backend traits; AppState
//! pins it to the concrete infra implementations.

use std::sync::Arc;

use parley_core::service::ChatService;
use parley_infra::backend::HttpCompletionBackend;
use parley_infra::sqlite::conversation::SqliteConversationStore;
use parley_infra::sqlite::pool::{default_database_url, DatabasePool};
use parley_types::config::ServiceConfig;

/// The service generics pinned to the infra implementations.
pub type ConcreteChatService = ChatService<SqliteConversationStore, HttpCompletionBackend>;

/// Shared application state for HTTP handlers and CLI commands.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ConcreteChatService>,
}

impl AppState {
    /// Connect to the database and wire the chat service.
    ///
    /// `backend: None` runs the service in offline mode.
    pub async fn init(
        db_url: Option<String>,
        config: &ServiceConfig,
        backend: Option<HttpCompletionBackend>,
    ) -> anyhow::Result<Self> {
        let db_url = match db_url {
            Some(url) => url,
            None => {
                let data_dir = std::env::var("PARLEY_DATA_DIR").unwrap_or_else(|_| {
                    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                    format!("{home}/.parley")
                });
                tokio::fs::create_dir_all(&data_dir).await?;
                default_database_url()
            }
        };

        let db_pool = DatabasePool::new(&db_url).await?;
        let store = SqliteConversationStore::new(db_pool);
        let chat = ChatService::new(store, backend, config);

        Ok(Self {
            chat: Arc::new(chat),
        })
    }
}
