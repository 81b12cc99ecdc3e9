//! Application context shared by every component.
//!
//! One bundle of signals constructed in [`crate::App`] and passed through
//! Leptos' context instead of module-level DOM handles. Components read and
//! write view state here; the DOM is touched only at the edges (`crate::dom`).

use leptos::prelude::*;
use roadmap_core::Theme;

use crate::dom;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Last observed `window.scrollY`, updated by the global scroll listener.
    pub scroll_y: RwSignal<f64>,
    /// Mobile slide-out menu state.
    pub menu_open: RwSignal<bool>,
    /// Section id the scroll-spy currently considers active, if any.
    pub active_section: RwSignal<Option<String>>,
    /// Topic shown in the lesson modal; `None` means the modal is closed.
    pub open_topic: RwSignal<Option<&'static str>>,
    pub theme: RwSignal<Theme>,
    /// Live search query for the content filter.
    pub query: RwSignal<String>,
}

impl AppContext {
    /// Build the context, seeding the theme from durable storage.
    fn new() -> Self {
        Self {
            scroll_y: RwSignal::new(0.0),
            menu_open: RwSignal::new(false),
            active_section: RwSignal::new(None),
            open_topic: RwSignal::new(None),
            theme: RwSignal::new(dom::stored_theme()),
            query: RwSignal::new(String::new()),
        }
    }

    /// Construct once and register with the reactive system. Called a single
    /// time from the root component.
    pub fn provide() -> Self {
        let ctx = Self::new();
        provide_context(ctx);
        ctx
    }

    /// Grab the context provided by the root component.
    pub fn expect() -> Self {
        expect_context::<AppContext>()
    }
}
