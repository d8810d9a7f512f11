//! Server-side infrastructure: conversation history storage

pub mod history_store;

pub use history_store::{
    build_store, get_conversation_store, init_conversation_store, load_seed_file,
    ConversationStore, InMemoryConversationStore, SharedConversationStore,
};
