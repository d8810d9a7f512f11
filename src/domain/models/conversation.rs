use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the conversation history, as returned by the history API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: i64,
    #[serde(default)]
    pub user_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ConversationSummary {
    pub fn new(id: i64, user_message: impl Into<String>) -> Self {
        Self {
            id,
            user_message: Some(user_message.into()),
            created_at: None,
        }
    }

    /// Case-insensitive match against an already lower-cased query.
    /// An absent message never matches a non-empty query.
    pub fn matches_lowercase(&self, query_lower: &str) -> bool {
        if query_lower.is_empty() {
            return true;
        }
        self.user_message
            .as_deref()
            .map(|msg| msg.to_lowercase().contains(query_lower))
            .unwrap_or(false)
    }

    /// Text shown in a sidebar row
    pub fn label(&self) -> &str {
        self.user_message.as_deref().unwrap_or("")
    }
}

/// Body of a store request (`POST /api/chat-history`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConversationRequest {
    pub user_message: String,
}

/// Returns the conversations whose message contains `query`, ignoring case.
/// An empty query returns every conversation. Order is preserved.
pub fn filter_conversations<'a>(
    conversations: &'a [ConversationSummary],
    query: &str,
) -> Vec<&'a ConversationSummary> {
    let query_lower = query.to_lowercase();
    conversations
        .iter()
        .filter(|conv| conv.matches_lowercase(&query_lower))
        .collect()
}
