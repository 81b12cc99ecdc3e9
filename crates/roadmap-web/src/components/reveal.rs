//! Scroll-triggered fade-in for cards.
//!
//! One shared `IntersectionObserver` watches every registered card. Cards
//! start transparent and offset; the first time one crosses into the
//! viewport its resting style is applied. Entries are never unobserved, so a
//! later crossing re-applies the same resting style, which is harmless.

use std::cell::OnceCell;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Fraction of a card that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the observation box 50px from the bottom so cards reveal slightly
/// before they would naturally enter the viewport edge.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

thread_local! {
    static OBSERVER: OnceCell<Option<IntersectionObserver>> = const { OnceCell::new() };
}

/// Register a card for reveal-on-scroll. Call once per card with its node
/// ref; the element is hidden immediately and revealed on first intersection.
pub fn reveal_on_scroll(node_ref: NodeRef<Div>) {
    Effect::new(move || {
        let Some(element) = node_ref.get() else { return };

        let style = HtmlElement::style(&element);
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(30px)");
        let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");

        OBSERVER.with(|cell| {
            if let Some(observer) = cell.get_or_init(build_observer) {
                observer.observe(&element);
            }
        });
    });
}

fn build_observer() -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                continue;
            };
            let style = target.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    callback.forget();
    Some(observer)
}
