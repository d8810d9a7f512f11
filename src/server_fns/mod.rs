//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::domain::models::ConversationSummary;

/// List the conversation history, most recent first
#[server]
pub async fn fetch_conversation_history() -> Result<Vec<ConversationSummary>, ServerFnError> {
    use crate::infrastructure::get_conversation_store;

    let conversations = get_conversation_store()
        .fetch_all()
        .await
        .map_err(ServerFnError::new)?;

    tracing::debug!("fetch_conversation_history: {} conversations", conversations.len());

    Ok(conversations)
}

/// Store a conversation opened by `user_message`
#[server]
pub async fn store_conversation(user_message: String) -> Result<ConversationSummary, ServerFnError> {
    use crate::infrastructure::get_conversation_store;

    get_conversation_store()
        .store(user_message)
        .await
        .map_err(ServerFnError::new)
}

/// Load a single conversation by id
#[server]
pub async fn get_conversation(id: i64) -> Result<ConversationSummary, ServerFnError> {
    use crate::infrastructure::get_conversation_store;

    get_conversation_store()
        .get(id)
        .await
        .map_err(ServerFnError::new)
}
