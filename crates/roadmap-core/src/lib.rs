//! # roadmap-core - Domain Logic
//!
//! Foundation crate for the Java Backend Roadmap site. Provides the lesson
//! content table and the pure state math behind navigation, theming, and
//! filtering. Everything here is browser-free and unit-testable on the host.
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`Lesson`] - One lesson topic: title, description, key points, code
//!   sample, and tips
//! - [`lessons()`] - The full ordered lesson table
//! - [`lesson()`] - Look up a lesson by topic id (`None` for unknown ids)
//!
//! ### Navigation (`nav`)
//! - [`navbar_scrolled()`], [`scroll_top_visible()`] - Scroll threshold checks
//! - [`active_section()`] - Scroll-spy: which section owns the viewport
//! - [`scroll_target()`] - Navbar-offset-adjusted scroll destination
//!
//! ### Theme (`theme`)
//! - [`Theme`] - Light/dark display mode with string round-tripping and
//!   storage key
//!
//! ### Filtering (`filter`)
//! - [`matches()`] - Case-insensitive substring match for card filtering
//!
//! ### Mobile menu (`menu`)
//! - [`hamburger_bar_styles()`] - Per-bar presentation for the open/closed
//!   hamburger glyph
//!
//! ## Prelude
//!
//! Import commonly used items with:
//! ```rust
//! use roadmap_core::prelude::*;
//! ```

pub mod content;
pub mod filter;
pub mod menu;
pub mod nav;
pub mod theme;

pub use content::{lesson, lessons, Lesson};
pub use filter::matches;
pub use menu::{hamburger_bar_styles, BarStyle};
pub use nav::{
    active_section, navbar_scrolled, scroll_target, scroll_top_visible, SectionPosition,
};
pub use theme::{ParseThemeError, Theme};

/// Prelude for common imports used throughout the site crates
pub mod prelude {
    pub use crate::content::{lesson, lessons, Lesson};
    pub use crate::filter::matches;
    pub use crate::menu::{hamburger_bar_styles, BarStyle};
    pub use crate::nav::{
        active_section, navbar_scrolled, scroll_target, scroll_top_visible, SectionPosition,
    };
    pub use crate::theme::Theme;
}
