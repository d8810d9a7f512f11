//! Structured logging for the chat shell
//!
//! Provides consistent, contextual log lines for sidebar, composer and
//! history store operations. Uses tracing with structured fields.

/// Operations that emit log lines
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    HistoryFetch,
    HistoryStore,
    ConversationSelect,
    ConversationCreate,
    MessageSend,
    FileUpload,
    DockTransition,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::HistoryFetch => "history_fetch",
            LogOperation::HistoryStore => "history_store",
            LogOperation::ConversationSelect => "conversation_select",
            LogOperation::ConversationCreate => "conversation_create",
            LogOperation::MessageSend => "message_send",
            LogOperation::FileUpload => "file_upload",
            LogOperation::DockTransition => "dock_transition",
        }
    }
}

/// Log a successful history load
pub fn log_history_loaded(count: usize) {
    tracing::info!(
        operation = LogOperation::HistoryFetch.as_str(),
        conversation_count = count,
        "Conversation history loaded"
    );
}

/// Log a failed history load (the sidebar falls back to an empty list)
pub fn log_history_fetch_error(error: &str) {
    tracing::error!(
        operation = LogOperation::HistoryFetch.as_str(),
        error = error,
        "Error loading conversations"
    );
}

/// Log a conversation written to the store
pub fn log_history_stored(conversation_id: i64, char_count: usize) {
    tracing::info!(
        operation = LogOperation::HistoryStore.as_str(),
        conversation_id = conversation_id,
        char_count = char_count,
        "Conversation stored"
    );
}

/// Log a store write that failed
pub fn log_history_store_error(error: &str) {
    tracing::warn!(
        operation = LogOperation::HistoryStore.as_str(),
        error = error,
        "Failed to store conversation"
    );
}

/// Log a conversation picked in the sidebar
pub fn log_conversation_selected(conversation_id: i64, overlay: bool) {
    tracing::debug!(
        operation = LogOperation::ConversationSelect.as_str(),
        conversation_id = conversation_id,
        overlay = overlay,
        "Conversation selected"
    );
}

/// Log a "new conversation" request
pub fn log_conversation_created(overlay: bool) {
    tracing::debug!(
        operation = LogOperation::ConversationCreate.as_str(),
        overlay = overlay,
        "New conversation requested"
    );
}

/// Log a message handed to the send callback
pub fn log_message_sent(char_count: usize, line_count: usize) {
    tracing::debug!(
        operation = LogOperation::MessageSend.as_str(),
        char_count = char_count,
        line_count = line_count,
        "Message sent"
    );
}

/// Log a file handed to the upload callback
pub fn log_file_selected(file_name: &str, size: u64, matches_accept_hint: bool) {
    if matches_accept_hint {
        tracing::debug!(
            operation = LogOperation::FileUpload.as_str(),
            file_name = file_name,
            size_bytes = size,
            "File selected"
        );
    } else {
        tracing::debug!(
            operation = LogOperation::FileUpload.as_str(),
            file_name = file_name,
            size_bytes = size,
            "File outside accept hint forwarded anyway"
        );
    }
}

/// Log the one-time composer dock
pub fn log_dock_transition(trigger: &str) {
    tracing::trace!(
        operation = LogOperation::DockTransition.as_str(),
        trigger = trigger,
        "Composer docked"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::HistoryFetch.as_str(), "history_fetch");
        assert_eq!(LogOperation::HistoryStore.as_str(), "history_store");
        assert_eq!(LogOperation::ConversationSelect.as_str(), "conversation_select");
        assert_eq!(LogOperation::ConversationCreate.as_str(), "conversation_create");
        assert_eq!(LogOperation::MessageSend.as_str(), "message_send");
        assert_eq!(LogOperation::FileUpload.as_str(), "file_upload");
        assert_eq!(LogOperation::DockTransition.as_str(), "dock_transition");
    }
}
