// Local UI state for the sidebar and the composer
// Plain structs, driven by the components through signals

pub mod composer;
pub mod sidebar;

pub use composer::{key_intent, ComposerState, DockState, DockTrigger, KeyIntent};
pub use sidebar::{LayoutMode, SidebarState};
