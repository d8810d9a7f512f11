pub mod chat;
pub mod routes;

pub use chat::ChatPage;
