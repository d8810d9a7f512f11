use dioxus::prelude::*;

use crate::server_fns::fetch_conversation_history;
use crate::shared::errors::AppError;
use crate::shared::state::SidebarState;

/// Sidebar state, with the conversation history fetched once on mount.
///
/// The fetch task belongs to the component scope: if the sidebar unmounts
/// before it resolves, the result is dropped with it.
pub fn use_sidebar_state() -> Signal<SidebarState> {
    let mut state = use_signal(SidebarState::new);

    use_effect(move || {
        spawn(async move {
            let result = fetch_conversation_history()
                .await
                .map_err(|e| AppError::HistoryFetchFailed(e.to_string()));
            state.write().apply_history(result);
        });
    });

    state
}
