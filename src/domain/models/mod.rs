// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod conversation;
pub mod file;

pub use conversation::{filter_conversations, ConversationSummary, StoreConversationRequest};
pub use file::SelectedFile;
