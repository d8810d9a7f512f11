use dioxus::prelude::*;

/// Emoji offered by the picker, grouped in rows of eight
pub const EMOJI_PALETTE: &[&str] = &[
    "😀", "😂", "😊", "😍", "🤔", "😅", "😎", "😢",
    "👍", "👎", "👏", "🙏", "💪", "👋", "🤝", "✌️",
    "❤️", "🔥", "✨", "🎉", "✅", "❌", "⚠️", "💡",
    "🚀", "📎", "📄", "🐛", "🧪", "⏳", "☕", "🦀",
];

#[component]
pub fn EmojiPicker(on_emoji_click: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "c-emoji-picker",
            role: "listbox",
            aria_label: "Emoji picker",
            for emoji in EMOJI_PALETTE.iter().copied() {
                button {
                    key: "{emoji}",
                    r#type: "button",
                    class: "c-emoji-picker__item",
                    role: "option",
                    onclick: move |_| on_emoji_click.call(emoji.to_string()),
                    "{emoji}"
                }
            }
        }
    }
}
