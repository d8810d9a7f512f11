//! Sidebar state: loaded history, search filter, open/closed layout
//!
//! The component renders exactly one presentation, picked by [`LayoutMode`].
//! Both presentations read the same `is_open` flag and the same filtered list.

use crate::config::{MOBILE_BREAKPOINT_PX, SIDEBAR_COLLAPSED_WIDTH_PX, SIDEBAR_EXPANDED_WIDTH_PX};
use crate::domain::models::{filter_conversations, ConversationSummary};
use crate::shared::errors::AppError;
use crate::shared::logging;

/// Which sidebar presentation the viewport calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Persistent rail on the left edge (wide viewports)
    #[default]
    Rail,
    /// Full-height panel over the page with a dismissing backdrop (narrow viewports)
    Overlay,
}

impl LayoutMode {
    pub fn from_viewport_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            LayoutMode::Overlay
        } else {
            LayoutMode::Rail
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, LayoutMode::Overlay)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarState {
    pub conversations: Vec<ConversationSummary>,
    pub search_query: String,
    pub is_open: bool,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of the history fetch. A failure is logged and the
    /// list stays empty; there is no retry.
    pub fn apply_history(&mut self, result: Result<Vec<ConversationSummary>, AppError>) {
        match result {
            Ok(conversations) => {
                logging::log_history_loaded(conversations.len());
                self.conversations = conversations;
            }
            Err(e) => {
                logging::log_history_fetch_error(&e.to_string());
            }
        }
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    pub fn filtered(&self) -> Vec<&ConversationSummary> {
        filter_conversations(&self.conversations, &self.search_query)
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Row click. Returns the id to forward; the overlay closes itself.
    pub fn select_conversation(&mut self, id: i64, mode: LayoutMode) -> i64 {
        logging::log_conversation_selected(id, mode.is_overlay());
        if mode.is_overlay() {
            self.close();
        }
        id
    }

    /// "New" button. The overlay closes itself; the rail stays as it is.
    pub fn start_new_conversation(&mut self, mode: LayoutMode) {
        logging::log_conversation_created(mode.is_overlay());
        if mode.is_overlay() {
            self.close();
        }
    }

    pub fn rail_width_px(&self) -> u32 {
        if self.is_open {
            SIDEBAR_EXPANDED_WIDTH_PX
        } else {
            SIDEBAR_COLLAPSED_WIDTH_PX
        }
    }

    /// Rail rows always show their icon; text labels only when expanded
    pub fn shows_row_labels(&self) -> bool {
        self.is_open
    }

    pub fn overlay_visible(&self, mode: LayoutMode) -> bool {
        mode.is_overlay() && self.is_open
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_open {
            "Collapse sidebar"
        } else {
            "Expand sidebar"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> SidebarState {
        let mut state = SidebarState::new();
        state.apply_history(Ok(vec![
            ConversationSummary::new(1, "Rust lifetimes"),
            ConversationSummary::new(2, "Dinner plans"),
            ConversationSummary::new(3, "rust async traits"),
        ]));
        state
    }

    #[test]
    fn test_initial_state_is_closed_and_collapsed() {
        let state = SidebarState::new();
        assert!(!state.is_open);
        assert!(state.conversations.is_empty());
        assert_eq!(state.rail_width_px(), SIDEBAR_COLLAPSED_WIDTH_PX);
        assert!(!state.shows_row_labels());
    }

    #[test]
    fn test_fetch_failure_leaves_list_empty() {
        let mut state = SidebarState::new();
        state.apply_history(Err(AppError::HistoryFetchFailed("timeout".into())));
        assert!(state.conversations.is_empty());
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_filtered_uses_search_query() {
        let mut state = loaded();
        state.set_search_query("RUST".into());
        let ids: Vec<i64> = state.filtered().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);

        state.set_search_query(String::new());
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn test_toggle_round_trip_restores_rail() {
        let mut state = loaded();
        let width = state.rail_width_px();
        let labels = state.shows_row_labels();

        state.toggle_open();
        assert_eq!(state.rail_width_px(), SIDEBAR_EXPANDED_WIDTH_PX);
        assert!(state.shows_row_labels());

        state.toggle_open();
        assert_eq!(state.rail_width_px(), width);
        assert_eq!(state.shows_row_labels(), labels);
    }

    #[test]
    fn test_select_closes_overlay_only() {
        let mut state = loaded();
        state.toggle_open();
        assert_eq!(state.select_conversation(2, LayoutMode::Rail), 2);
        assert!(state.is_open);

        assert_eq!(state.select_conversation(3, LayoutMode::Overlay), 3);
        assert!(!state.is_open);
    }

    #[test]
    fn test_new_conversation_closes_overlay_only() {
        let mut state = loaded();
        state.toggle_open();
        state.start_new_conversation(LayoutMode::Rail);
        assert!(state.is_open);
        state.start_new_conversation(LayoutMode::Overlay);
        assert!(!state.is_open);
    }

    #[test]
    fn test_overlay_visibility_follows_mode_and_open_flag() {
        let mut state = SidebarState::new();
        assert!(!state.overlay_visible(LayoutMode::Overlay));
        state.toggle_open();
        assert!(state.overlay_visible(LayoutMode::Overlay));
        assert!(!state.overlay_visible(LayoutMode::Rail));
    }

    #[test]
    fn test_layout_mode_breakpoint() {
        assert_eq!(LayoutMode::from_viewport_width(375.0), LayoutMode::Overlay);
        assert_eq!(LayoutMode::from_viewport_width(767.9), LayoutMode::Overlay);
        assert_eq!(LayoutMode::from_viewport_width(768.0), LayoutMode::Rail);
        assert_eq!(LayoutMode::from_viewport_width(1440.0), LayoutMode::Rail);
    }

    #[test]
    fn test_search_query_survives_toggling() {
        let mut state = loaded();
        state.set_search_query("dinner".into());
        state.toggle_open();
        state.select_conversation(2, LayoutMode::Overlay);
        assert_eq!(state.search_query, "dinner");
    }
}
