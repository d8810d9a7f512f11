//! Composer state: text, auto-grow height, emoji picker, dock transition
//!
//! The dock is a one-way state machine (`Undocked` -> `Docked`). What fires it
//! lives here; how a docked composer looks is [`DockState::container_style`].

use keyboard_types::{Key, Modifiers};

use crate::config::{
    COMPOSER_LINE_HEIGHT_PX, COMPOSER_MAX_HEIGHT_PX, COMPOSER_MIN_HEIGHT_PX,
    COMPOSER_SCROLL_LINE_THRESHOLD, COMPOSER_VERTICAL_PADDING_PX, DOCK_TRANSITION,
};
use crate::domain::models::SelectedFile;
use crate::shared::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockState {
    /// Centered on screen, before any interaction
    #[default]
    Undocked,
    /// Pinned near the bottom edge. Terminal.
    Docked,
}

impl DockState {
    pub fn is_docked(&self) -> bool {
        matches!(self, DockState::Docked)
    }

    pub fn container_style(&self) -> String {
        match self {
            DockState::Undocked => format!(
                "bottom: 50%; transform: translate(-50%, 50%); transition: {DOCK_TRANSITION};"
            ),
            DockState::Docked => format!(
                "bottom: 1rem; transform: translate(-50%, 0); transition: {DOCK_TRANSITION};"
            ),
        }
    }
}

/// Interactions that dock the composer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockTrigger {
    Focus,
    TextChange,
    FileButton,
}

impl DockTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            DockTrigger::Focus => "focus",
            DockTrigger::TextChange => "text_change",
            DockTrigger::FileButton => "file_button",
        }
    }
}

/// What a keydown in the textarea should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Plain Enter: send and suppress the newline
    Send,
    /// Shift+Enter: let the browser insert the newline
    InsertNewline,
    /// Anything else, including Enter while an IME composition is open
    Passthrough,
}

pub fn key_intent(key: &Key, modifiers: Modifiers, is_composing: bool) -> KeyIntent {
    if *key != Key::Enter || is_composing {
        return KeyIntent::Passthrough;
    }
    if modifiers.contains(Modifiers::SHIFT) {
        KeyIntent::InsertNewline
    } else {
        KeyIntent::Send
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposerState {
    pub text: String,
    pub emoji_picker_visible: bool,
    pub dock: DockState,
    pub height_px: u32,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self {
            text: String::new(),
            emoji_picker_visible: false,
            dock: DockState::Undocked,
            height_px: COMPOSER_MIN_HEIGHT_PX,
        }
    }
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the dock transition. Returns true only for the first trigger.
    pub fn dock(&mut self, trigger: DockTrigger) -> bool {
        if self.dock.is_docked() {
            return false;
        }
        self.dock = DockState::Docked;
        logging::log_dock_transition(trigger.as_str());
        true
    }

    /// Replace the whole text (textarea input event)
    pub fn set_text(&mut self, value: String) {
        self.text = value;
        self.dock(DockTrigger::TextChange);
        self.measure(self.estimated_natural_height());
    }

    /// Append a chunk (emoji insertion, programmatic keystrokes)
    pub fn append_text(&mut self, chunk: &str) {
        self.text.push_str(chunk);
        self.dock(DockTrigger::TextChange);
        self.measure(self.estimated_natural_height());
    }

    /// Emoji chosen in the picker. The picker stays open.
    pub fn insert_emoji(&mut self, emoji: &str) {
        self.append_text(emoji);
    }

    pub fn toggle_emoji_picker(&mut self) {
        self.emoji_picker_visible = !self.emoji_picker_visible;
    }

    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Take the text for sending. Whitespace-only text is left untouched and
    /// nothing is returned. The returned text is not trimmed.
    pub fn send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let message = std::mem::take(&mut self.text);
        self.height_px = COMPOSER_MIN_HEIGHT_PX;
        logging::log_message_sent(message.chars().count(), message.split('\n').count());
        Some(message)
    }

    pub fn clamp_height(natural_height_px: u32) -> u32 {
        natural_height_px.clamp(COMPOSER_MIN_HEIGHT_PX, COMPOSER_MAX_HEIGHT_PX)
    }

    /// Record the textarea's natural content height
    pub fn measure(&mut self, natural_height_px: u32) {
        self.height_px = Self::clamp_height(natural_height_px);
    }

    /// Height estimate from the line count, used until the DOM reports a real one
    pub fn estimated_natural_height(&self) -> u32 {
        let lines = u32::try_from(self.line_count()).unwrap_or(u32::MAX);
        lines
            .saturating_mul(COMPOSER_LINE_HEIGHT_PX)
            .saturating_add(COMPOSER_VERTICAL_PADDING_PX)
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Scrolling is keyed to the line count, not to the height cap
    pub fn scroll_enabled(&self) -> bool {
        self.line_count() > COMPOSER_SCROLL_LINE_THRESHOLD
    }

    pub fn textarea_style(&self) -> String {
        let overflow = if self.scroll_enabled() { "auto" } else { "hidden" };
        format!("height: {}px; overflow-y: {};", self.height_px, overflow)
    }

    /// File picked through the native control. Every pick is forwarded; the
    /// control itself is cleared by the caller after reading it.
    pub fn select_file(&self, file: Option<SelectedFile>) -> Option<SelectedFile> {
        let file = file?;
        logging::log_file_selected(&file.name, file.size, file.matches_accept_hint());
        Some(file)
    }
}
