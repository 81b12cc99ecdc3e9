pub mod code_preview;
pub mod footer;
pub mod modal;
pub mod navbar;
pub mod reveal;
pub mod scroll_top;
pub mod search;
pub mod theme_toggle;
