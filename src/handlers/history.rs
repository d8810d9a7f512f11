use axum::{
    extract::Path,
    http::StatusCode,
    Extension, Json,
};

use crate::domain::models::{ConversationSummary, StoreConversationRequest};
use crate::infrastructure::SharedConversationStore;
use crate::shared::errors::AppError;
use crate::shared::logging;

fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::EmptyMessage => StatusCode::BAD_REQUEST,
        AppError::ConversationNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /api/chat-history
/// List every stored conversation, most recent first
pub async fn list_history_handler(
    Extension(store): Extension<SharedConversationStore>,
) -> Result<Json<Vec<ConversationSummary>>, StatusCode> {
    let conversations = store.fetch_all().await.map_err(|e| {
        logging::log_history_fetch_error(&e.to_string());
        status_for(&e)
    })?;

    Ok(Json(conversations))
}

/// POST /api/chat-history
/// Store a conversation opened by `user_message`
pub async fn store_history_handler(
    Extension(store): Extension<SharedConversationStore>,
    Json(request): Json<StoreConversationRequest>,
) -> Result<(StatusCode, Json<ConversationSummary>), StatusCode> {
    let summary = store.store(request.user_message).await.map_err(|e| {
        logging::log_history_store_error(&e.to_string());
        status_for(&e)
    })?;

    Ok((StatusCode::CREATED, Json(summary)))
}

/// GET /api/chat-history/{id}
pub async fn get_history_handler(
    Extension(store): Extension<SharedConversationStore>,
    Path(id): Path<i64>,
) -> Result<Json<ConversationSummary>, StatusCode> {
    let summary = store.get(id).await.map_err(|e| {
        tracing::debug!(conversation_id = id, "Conversation lookup failed: {}", e);
        status_for(&e)
    })?;

    Ok(Json(summary))
}
