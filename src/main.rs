//! Chat Shell - Main Entry Point
//!
//! Serves the Dioxus application together with the chat history REST routes.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use chat_shell::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use std::sync::Arc;

    use chat_shell::config::ServerConfig;
    use chat_shell::handlers::history_routes;
    use chat_shell::infrastructure::{build_store, get_conversation_store, init_conversation_store};

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Chat Shell...");

    let config = ServerConfig::from_env();
    if !init_conversation_store(Arc::new(build_store(&config))) {
        tracing::warn!("Conversation store was already initialized");
    }

    dioxus::serve(|| async move {
        // Server functions and REST routes share the same store
        let router = dioxus::server::router(App).merge(history_routes(get_conversation_store()));
        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Chat Shell - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
