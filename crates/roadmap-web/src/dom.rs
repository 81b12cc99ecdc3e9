//! Browser glue: window, document, storage, and scrolling.
//!
//! Every helper here absorbs a missing window/document/element as a no-op.
//! This is presentation code; when a lookup fails the only correct outcome
//! is that nothing visibly happens.

use roadmap_core::nav::{self, SectionPosition};
use roadmap_core::theme::{self, Theme};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Storage, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Current vertical scroll offset, 0 when unavailable.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smooth-scroll back to the very top of the page.
pub fn scroll_to_top() {
    scroll_to(0.0);
}

/// Smooth-scroll so the named section lands below the fixed navbar.
/// Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(section) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let Ok(section) = section.dyn_into::<HtmlElement>() else {
        return;
    };
    scroll_to(nav::scroll_target(f64::from(section.offset_top())));
}

/// Freeze or restore background scrolling while the modal is open.
pub fn lock_body_scroll(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let overflow = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

/// Measure the page sections the scroll-spy tracks, in document order.
pub fn section_positions() -> Vec<SectionPosition> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(".hero, .section") else {
        return Vec::new();
    };

    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let id = element.id();
        if id.is_empty() {
            continue;
        }
        sections.push(SectionPosition::new(id, f64::from(element.offset_top())));
    }
    sections
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted theme; missing or unparseable values mean light mode.
pub fn stored_theme() -> Theme {
    let value = local_storage().and_then(|s| s.get_item(theme::STORAGE_KEY).ok().flatten());
    Theme::from_stored(value.as_deref())
}

/// Persist the theme choice for the next visit.
pub fn store_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(theme::STORAGE_KEY, theme.as_str());
    }
}

/// Apply the theme as a presentation class on `<body>`.
pub fn apply_theme(theme: Theme) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let class_list = body.class_list();
        let _ = if theme.is_dark() {
            class_list.add_1("dark-theme")
        } else {
            class_list.remove_1("dark-theme")
        };
    }
}

/// Open the browser's print dialog for the whole roadmap.
pub fn print_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.print();
    }
}
