pub mod conversation_sidebar;
pub mod emoji_picker;
pub mod icons;
pub mod message_composer;

pub use conversation_sidebar::ConversationSidebar;
pub use emoji_picker::{EmojiPicker, EMOJI_PALETTE};
pub use message_composer::MessageComposer;
