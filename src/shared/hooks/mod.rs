// Custom Dioxus hooks
pub mod use_layout_mode;
pub mod use_sidebar_state;

pub use use_layout_mode::use_layout_mode;
pub use use_sidebar_state::use_sidebar_state;
