//! Message composer: auto-growing textarea, emoji picker, file upload, send.
//!
//! Starts centered on screen and docks to the bottom on first interaction.

use dioxus::prelude::*;

use crate::app::components::emoji_picker::EmojiPicker;
use crate::app::components::icons::{EmojiIcon, SendIcon, UploadIcon};
use crate::config::{COMPOSER_FILE_INPUT_ID, COMPOSER_TEXTAREA_ID, FILE_ACCEPT_HINT};
use crate::domain::models::SelectedFile;
use crate::shared::state::{key_intent, ComposerState, DockTrigger, KeyIntent};
use crate::shared::utils::dom;

#[component]
pub fn MessageComposer(
    on_send_message: EventHandler<String>,
    on_file_upload: EventHandler<SelectedFile>,
) -> Element {
    let mut state = use_signal(ComposerState::new);
    let mut is_composing = use_signal(|| false);

    // Re-measure the textarea after every text change
    use_effect(move || {
        let _ = state.read().text.len(); // Subscribe to text changes
        if let Some(natural) = dom::measure_scroll_height(COMPOSER_TEXTAREA_ID) {
            if state.peek().height_px != ComposerState::clamp_height(natural) {
                state.write().measure(natural);
            }
        }
    });

    let mut send = move || {
        let message = state.write().send();
        if let Some(message) = message {
            on_send_message.call(message);
        }
    };

    let handle_keydown = move |evt: Event<KeyboardData>| {
        match key_intent(&evt.key(), evt.modifiers(), is_composing()) {
            KeyIntent::Send => {
                evt.prevent_default();
                send();
            }
            KeyIntent::InsertNewline | KeyIntent::Passthrough => {}
        }
    };

    let (text, container_style, textarea_style, can_send, picker_visible) = {
        let s = state.read();
        (
            s.text.clone(),
            s.dock.container_style(),
            s.textarea_style(),
            s.can_send(),
            s.emoji_picker_visible,
        )
    };

    rsx! {
        div {
            class: "c-composer",
            style: "{container_style}",

            div { class: "c-composer__box",
                textarea {
                    id: COMPOSER_TEXTAREA_ID,
                    class: "c-composer__textarea",
                    placeholder: "Message..",
                    rows: "1",
                    style: "{textarea_style}",
                    value: "{text}",
                    oninput: move |evt| state.write().set_text(evt.value()),
                    onkeydown: handle_keydown,
                    onfocus: move |_| {
                        state.write().dock(DockTrigger::Focus);
                    },
                    oncompositionstart: move |_| is_composing.set(true),
                    oncompositionend: move |_| is_composing.set(false),
                }

                div { class: "c-composer__actions",
                    div { class: "c-composer__left-actions",
                        div { class: "c-composer__emoji",
                            button {
                                r#type: "button",
                                class: "c-composer__action",
                                aria_label: "Toggle emoji picker",
                                onclick: move |_| {
                                    state.write().toggle_emoji_picker();
                                    dom::focus_element(COMPOSER_TEXTAREA_ID);
                                },
                                EmojiIcon { class: "c-icon" }
                            }
                            if picker_visible {
                                div { class: "c-composer__emoji-popover",
                                    EmojiPicker {
                                        on_emoji_click: move |emoji: String| {
                                            state.write().insert_emoji(&emoji);
                                            dom::focus_element(COMPOSER_TEXTAREA_ID);
                                        },
                                    }
                                }
                            }
                        }

                        button {
                            r#type: "button",
                            class: "c-composer__action",
                            aria_label: "Upload file",
                            onclick: move |_| {
                                dom::click_element(COMPOSER_FILE_INPUT_ID);
                                state.write().dock(DockTrigger::FileButton);
                            },
                            UploadIcon { class: "c-icon" }
                        }
                        input {
                            id: COMPOSER_FILE_INPUT_ID,
                            r#type: "file",
                            class: "c-composer__file-input",
                            accept: FILE_ACCEPT_HINT,
                            onchange: move |_| {
                                let picked = dom::take_selected_file(COMPOSER_FILE_INPUT_ID);
                                let forwarded = state.peek().select_file(picked);
                                if let Some(file) = forwarded {
                                    on_file_upload.call(file);
                                }
                            },
                        }
                    }

                    button {
                        r#type: "button",
                        class: if can_send { "c-composer__send" } else { "c-composer__send c-composer__send--disabled" },
                        aria_label: "Send message",
                        disabled: !can_send,
                        onclick: move |_| send(),
                        SendIcon { class: "c-icon" }
                    }
                }
            }
        }
    }
}
