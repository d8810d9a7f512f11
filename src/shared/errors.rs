use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load conversation history: {0}")]
    HistoryFetchFailed(String),

    #[error("Conversation not found: {0}")]
    ConversationNotFound(i64),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
