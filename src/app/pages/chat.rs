use dioxus::prelude::*;

use crate::app::components::{ConversationSidebar, MessageComposer};
use crate::domain::models::{ConversationSummary, SelectedFile};
use crate::server_fns::{get_conversation, store_conversation};
use crate::shared::logging;

/// One line of the on-page transcript
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptEntry {
    User(String),
    Attachment { name: String, size: u64 },
    Notice(String),
}

/// Human-readable file size for attachment chips
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Transcript shown after a conversation is picked from the sidebar
pub fn conversation_transcript(summary: ConversationSummary) -> Vec<TranscriptEntry> {
    summary
        .user_message
        .map(|msg| vec![TranscriptEntry::User(msg)])
        .unwrap_or_default()
}

#[component]
pub fn ChatPage() -> Element {
    let mut transcript = use_signal(Vec::<TranscriptEntry>::new);

    let on_send_message = move |text: String| {
        transcript.write().push(TranscriptEntry::User(text.clone()));
        spawn(async move {
            if let Err(e) = store_conversation(text).await {
                logging::log_history_store_error(&e.to_string());
                transcript
                    .write()
                    .push(TranscriptEntry::Notice("Message could not be saved".to_string()));
            }
        });
    };

    let on_file_upload = move |file: SelectedFile| {
        transcript.write().push(TranscriptEntry::Attachment {
            name: file.name,
            size: file.size,
        });
    };

    let on_select_conversation = move |id: i64| {
        spawn(async move {
            match get_conversation(id).await {
                Ok(summary) => transcript.set(conversation_transcript(summary)),
                Err(e) => {
                    tracing::warn!(conversation_id = id, "Failed to load conversation: {}", e);
                    transcript.set(vec![TranscriptEntry::Notice(format!(
                        "Conversation {} is not available",
                        id
                    ))]);
                }
            }
        });
    };

    let on_new_conversation = move |_: ()| {
        transcript.set(Vec::new());
    };

    rsx! {
        div { class: "c-chat",
            ConversationSidebar {
                on_select_conversation,
                on_new_conversation,
            }

            main { class: "c-chat__main",
                div { class: "c-chat__transcript",
                    for (index, entry) in transcript.read().iter().enumerate() {
                        TranscriptLine { key: "{index}", entry: entry.clone() }
                    }
                }

                MessageComposer {
                    on_send_message,
                    on_file_upload,
                }
            }
        }
    }
}

#[component]
fn TranscriptLine(entry: TranscriptEntry) -> Element {
    match entry {
        TranscriptEntry::User(text) => rsx! {
            div { class: "c-chat__bubble c-chat__bubble--user", "{text}" }
        },
        TranscriptEntry::Attachment { name, size } => rsx! {
            div { class: "c-chat__attachment",
                span { class: "c-chat__attachment-name", "📎 {name}" }
                span { class: "c-chat__attachment-size", "{format_file_size(size)}" }
            }
        },
        TranscriptEntry::Notice(text) => rsx! {
            div { class: "c-chat__notice", "{text}" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_conversation_transcript() {
        assert_eq!(
            conversation_transcript(ConversationSummary::new(7, "hello")),
            vec![TranscriptEntry::User("hello".to_string())]
        );

        let empty = ConversationSummary {
            id: 8,
            user_message: None,
            created_at: None,
        };
        assert!(conversation_transcript(empty).is_empty());
    }
}
