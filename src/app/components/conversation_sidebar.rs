//! Conversation history sidebar
//!
//! Wide viewports get a rail that collapses to icons; narrow viewports get a
//! toggle button and an overlay panel with a dismissing backdrop. Only the
//! presentation matching the current [`LayoutMode`] is rendered.

use dioxus::prelude::*;

use crate::app::components::icons::{ChatBubbleIcon, CloseIcon, NewChatIcon, PlusCircleIcon};
use crate::domain::models::ConversationSummary;
use crate::shared::hooks::{use_layout_mode, use_sidebar_state};
use crate::shared::state::{LayoutMode, SidebarState};

#[component]
pub fn ConversationSidebar(
    on_select_conversation: EventHandler<i64>,
    on_new_conversation: EventHandler<()>,
) -> Element {
    let state = use_sidebar_state();
    let layout = use_layout_mode();

    match layout() {
        LayoutMode::Rail => rsx! {
            SidebarRail { state, on_select_conversation, on_new_conversation }
        },
        LayoutMode::Overlay => rsx! {
            SidebarOverlay { state, on_select_conversation, on_new_conversation }
        },
    }
}

#[component]
fn SearchInput(state: Signal<SidebarState>) -> Element {
    let mut state = state;
    rsx! {
        input {
            r#type: "text",
            class: "c-sidebar__search",
            placeholder: "Search Conversations",
            value: "{state.read().search_query}",
            oninput: move |evt| state.write().set_search_query(evt.value()),
        }
    }
}

/// Rows for the current filter. `show_labels` hides text but keeps the icons.
fn conversation_rows(
    conversations: Vec<ConversationSummary>,
    show_labels: bool,
    on_click: EventHandler<i64>,
) -> Element {
    rsx! {
        ul { class: "c-sidebar__list",
            for conv in conversations {
                li {
                    key: "{conv.id}",
                    class: "c-sidebar__row",
                    title: "{conv.label()}",
                    onclick: move |_| on_click.call(conv.id),
                    ChatBubbleIcon { class: "c-sidebar__row-icon" }
                    if show_labels {
                        span { class: "c-sidebar__row-label", "{conv.label()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarRail(
    state: Signal<SidebarState>,
    on_select_conversation: EventHandler<i64>,
    on_new_conversation: EventHandler<()>,
) -> Element {
    let mut state = state;
    let (is_open, width, toggle_label, rows) = {
        let s = state.read();
        let rows: Vec<ConversationSummary> = s.filtered().into_iter().cloned().collect();
        (s.is_open, s.rail_width_px(), s.toggle_label(), rows)
    };

    let select = move |id: i64| {
        let id = state.write().select_conversation(id, LayoutMode::Rail);
        on_select_conversation.call(id);
    };

    rsx! {
        aside {
            class: if is_open { "c-sidebar c-sidebar--rail c-sidebar--open" } else { "c-sidebar c-sidebar--rail" },
            style: "width: {width}px;",

            div { class: "c-sidebar__toggle-row",
                button {
                    class: "c-sidebar__toggle",
                    aria_label: "{toggle_label}",
                    onclick: move |_| state.write().toggle_open(),
                    if is_open {
                        CloseIcon { class: "c-icon" }
                    } else {
                        ChatBubbleIcon { class: "c-icon" }
                    }
                }
            }

            div { class: "c-sidebar__content",
                div { class: "c-sidebar__new-row",
                    button {
                        class: "c-sidebar__new",
                        aria_label: "New conversation",
                        onclick: move |_| {
                            state.write().start_new_conversation(LayoutMode::Rail);
                            on_new_conversation.call(());
                        },
                        NewChatIcon { class: "c-icon c-icon--primary" }
                        if is_open {
                            span { class: "c-sidebar__new-label", "New" }
                        }
                    }
                }

                if is_open {
                    div { class: "c-sidebar__search-row",
                        SearchInput { state }
                    }
                }

                {conversation_rows(rows, is_open, EventHandler::new(select))}
            }
        }
    }
}

#[component]
fn SidebarOverlay(
    state: Signal<SidebarState>,
    on_select_conversation: EventHandler<i64>,
    on_new_conversation: EventHandler<()>,
) -> Element {
    let mut state = state;
    let (visible, toggle_label, rows) = {
        let s = state.read();
        let rows: Vec<ConversationSummary> = s.filtered().into_iter().cloned().collect();
        (s.overlay_visible(LayoutMode::Overlay), s.toggle_label(), rows)
    };

    let select = move |id: i64| {
        let id = state.write().select_conversation(id, LayoutMode::Overlay);
        on_select_conversation.call(id);
    };

    rsx! {
        div { class: "c-sidebar-toggle",
            button {
                class: "c-sidebar-toggle__button",
                aria_label: "{toggle_label}",
                onclick: move |_| state.write().toggle_open(),
                if visible {
                    CloseIcon { class: "c-icon" }
                } else {
                    ChatBubbleIcon { class: "c-icon" }
                }
            }
        }

        if visible {
            div {
                class: "c-sidebar-backdrop",
                onclick: move |_| state.write().close(),
            }
            aside { class: "c-sidebar c-sidebar--overlay",
                div { class: "c-sidebar__header",
                    h2 { class: "c-sidebar__title", "Conversations" }
                    button {
                        class: "c-sidebar__close",
                        aria_label: "Close sidebar",
                        onclick: move |_| state.write().close(),
                        CloseIcon { class: "c-icon c-icon--sm" }
                    }
                }

                div { class: "c-sidebar__new-row c-sidebar__new-row--centered",
                    button {
                        class: "c-sidebar__new c-sidebar__new--round",
                        aria_label: "New conversation",
                        onclick: move |_| {
                            state.write().start_new_conversation(LayoutMode::Overlay);
                            on_new_conversation.call(());
                        },
                        PlusCircleIcon { class: "c-icon c-icon--lg c-icon--primary" }
                    }
                }

                div { class: "c-sidebar__search-row",
                    SearchInput { state }
                }

                {conversation_rows(rows, true, EventHandler::new(select))}
            }
        }
    }
}
