//! Standalone chat history API server (without Dioxus frontend)
//! Use this for API-only testing or backend development.
//!
//! Run with: cargo run --bin server --features server -- --port 3003

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use chat_shell::config::{ServerArgs, ServerConfig};
use chat_shell::handlers::history_routes;
use chat_shell::infrastructure::build_store;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = ServerArgs::parse();
    tracing::info!("Starting Chat Shell history API server (standalone)...");

    let store = Arc::new(build_store(&ServerConfig::from(&args)));

    let app = history_routes(store)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
