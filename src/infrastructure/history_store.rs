//! Conversation history store
//!
//! The history API (server functions and REST routes) goes through the
//! [`ConversationStore`] trait. The in-memory implementation keeps summaries
//! in a concurrent map and can be seeded from a JSON file at startup.

use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::config::ServerConfig;
use crate::domain::models::ConversationSummary;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

/// Capabilities of a conversation history backend
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// All conversations, most recent first
    async fn fetch_all(&self) -> Result<Vec<ConversationSummary>>;

    /// Record a new conversation opened by `user_message`
    async fn store(&self, user_message: String) -> Result<ConversationSummary>;

    /// One conversation by id
    async fn get(&self, id: i64) -> Result<ConversationSummary>;
}

pub type SharedConversationStore = Arc<dyn ConversationStore>;

#[derive(Debug, Default)]
pub struct InMemoryConversationStore {
    conversations: DashMap<i64, ConversationSummary>,
    last_id: AtomicI64,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `seed`. New ids continue after the highest seeded id.
    pub fn with_conversations(seed: Vec<ConversationSummary>) -> Self {
        let store = Self::new();
        let mut max_id = 0;
        for conv in seed {
            max_id = max_id.max(conv.id);
            store.conversations.insert(conv.id, conv);
        }
        store.last_id.store(max_id, Ordering::SeqCst);
        store
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn fetch_all(&self) -> Result<Vec<ConversationSummary>> {
        let mut list: Vec<ConversationSummary> = self
            .conversations
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // Most recent first; undated (seeded) entries fall back to id order
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(list)
    }

    async fn store(&self, user_message: String) -> Result<ConversationSummary> {
        if user_message.trim().is_empty() {
            return Err(AppError::EmptyMessage);
        }

        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let summary = ConversationSummary {
            id,
            user_message: Some(user_message),
            created_at: Some(Utc::now()),
        };
        self.conversations.insert(id, summary.clone());

        logging::log_history_stored(id, summary.label().chars().count());
        Ok(summary)
    }

    async fn get(&self, id: i64) -> Result<ConversationSummary> {
        self.conversations
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(AppError::ConversationNotFound(id))
    }
}

/// Parse a JSON array of conversations
pub fn parse_seed(json: &str) -> Result<Vec<ConversationSummary>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a seed file from disk
pub fn load_seed_file(path: &Path) -> anyhow::Result<Vec<ConversationSummary>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading history seed {}", path.display()))?;
    let seed = parse_seed(&content)
        .with_context(|| format!("parsing history seed {}", path.display()))?;
    Ok(seed)
}

/// Build a store from configuration. A broken seed file is logged and skipped.
pub fn build_store(config: &ServerConfig) -> InMemoryConversationStore {
    let Some(path) = config.history_file.as_deref() else {
        return InMemoryConversationStore::new();
    };

    match load_seed_file(path) {
        Ok(seed) => {
            tracing::info!(
                operation = logging::LogOperation::HistoryStore.as_str(),
                seed_count = seed.len(),
                path = %path.display(),
                "History store seeded"
            );
            InMemoryConversationStore::with_conversations(seed)
        }
        Err(e) => {
            tracing::warn!(
                operation = logging::LogOperation::HistoryStore.as_str(),
                path = %path.display(),
                "Ignoring history seed: {:#}",
                e
            );
            InMemoryConversationStore::new()
        }
    }
}

/// Global store instance
static CONVERSATION_STORE: OnceLock<SharedConversationStore> = OnceLock::new();

/// Install the global store. Returns false if one was already installed.
pub fn init_conversation_store(store: SharedConversationStore) -> bool {
    CONVERSATION_STORE.set(store).is_ok()
}

/// Get the global store, building it from the environment on first use
pub fn get_conversation_store() -> SharedConversationStore {
    CONVERSATION_STORE
        .get_or_init(|| Arc::new(build_store(&ServerConfig::from_env())))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_store_assigns_increasing_ids() {
        let store = InMemoryConversationStore::new();
        let first = store.store("first".into()).await.unwrap();
        let second = store.store("second".into()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at.is_some());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_store_rejects_blank_message() {
        let store = InMemoryConversationStore::new();
        let result = store.store("  \n ".into()).await;
        assert!(matches!(result, Err(AppError::EmptyMessage)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_most_recent_first() {
        let store = InMemoryConversationStore::with_conversations(vec![
            ConversationSummary::new(3, "seeded three"),
            ConversationSummary::new(5, "seeded five"),
        ]);
        let fresh = store.store("fresh".into()).await.unwrap();
        assert_eq!(fresh.id, 6);

        let ids: Vec<i64> = store.fetch_all().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![6, 5, 3]);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let store = InMemoryConversationStore::new();
        let stored = store.store("hello".into()).await.unwrap();
        assert_eq!(store.get(stored.id).await.unwrap(), stored);
        assert!(matches!(store.get(99).await, Err(AppError::ConversationNotFound(99))));
    }

    #[test]
    fn test_parse_seed() {
        let seed = parse_seed(r#"[{"id": 1, "user_message": "a"}, {"id": 2, "user_message": null}]"#)
            .unwrap();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[1].user_message, None);
        assert!(matches!(parse_seed("{"), Err(AppError::SerializationError(_))));
    }

    #[test]
    fn test_build_store_skips_missing_seed() {
        let config = ServerConfig {
            history_file: Some(PathBuf::from("/nonexistent/chat-shell/history.json")),
        };
        assert!(build_store(&config).is_empty());
        assert!(build_store(&ServerConfig::default()).is_empty());
    }

    #[test]
    fn test_build_store_from_seed_file() {
        let path = std::env::temp_dir().join(format!("chat-shell-seed-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"id": 10, "user_message": "from disk"}]"#).unwrap();
        let config = ServerConfig {
            history_file: Some(path.clone()),
        };
        let store = build_store(&config);
        let _ = std::fs::remove_file(&path);
        assert_eq!(store.len(), 1);
    }
}
