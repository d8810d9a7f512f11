//! REST routes for the conversation history API

/// Chat history list/store/get handlers
pub mod history;

use axum::{routing::get, Extension, Router};

use crate::infrastructure::SharedConversationStore;

pub use history::{get_history_handler, list_history_handler, store_history_handler};

/// History routes with the store attached as an Extension
pub fn history_routes(store: SharedConversationStore) -> Router {
    // NOTE: Axum 0.8 uses {param} syntax instead of :param
    Router::new()
        .route(
            "/api/chat-history",
            get(list_history_handler).post(store_history_handler),
        )
        .route("/api/chat-history/{id}", get(get_history_handler))
        .layer(Extension(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::domain::models::ConversationSummary;
    use crate::infrastructure::InMemoryConversationStore;

    fn app() -> Router {
        history_routes(Arc::new(InMemoryConversationStore::with_conversations(vec![
            ConversationSummary::new(1, "seeded"),
        ])))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat-history")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_history() {
        let response = app()
            .oneshot(Request::get("/api/chat-history").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let list: Vec<ConversationSummary> = body_json(response).await;
        assert_eq!(list, vec![ConversationSummary::new(1, "seeded")]);
    }

    #[tokio::test]
    async fn test_store_then_list() {
        let app = app();
        let response = app
            .clone()
            .oneshot(post_json(r#"{"user_message": "hello there"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let stored: ConversationSummary = body_json(response).await;
        assert_eq!(stored.id, 2);
        assert_eq!(stored.user_message.as_deref(), Some("hello there"));

        let response = app
            .oneshot(Request::get("/api/chat-history").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let list: Vec<ConversationSummary> = body_json(response).await;
        assert_eq!(list.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_store_blank_message_is_bad_request() {
        let response = app().oneshot(post_json(r#"{"user_message": "   "}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_history_by_id() {
        let app = app();
        let response = app
            .clone()
            .oneshot(Request::get("/api/chat-history/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/api/chat-history/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
