pub mod components;
pub mod context;
pub mod data;
pub mod dom;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use components::footer::Footer;
use components::modal::{close_modal, Modal};
use components::navbar::Navbar;
use components::scroll_top::ScrollTopButton;
use context::AppContext;
use pages::home::Home;
use roadmap_core::active_section;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let ctx = AppContext::provide();

    dom::apply_theme(ctx.theme.get_untracked());
    install_scroll_tracker(ctx);
    install_escape_listener(ctx);

    view! {
        <Title text="Java Backend Roadmap"/>
        <Meta
            name="description"
            content="A practical roadmap from Java fundamentals to production backend development."
        />

        <Navbar />
        <main>
            <Home />
        </main>
        <Footer />
        <Modal />
        <ScrollTopButton />
    }
}

/// Track `window.scrollY` for the navbar, the scroll-to-top button, and the
/// scroll-spy. Section offsets are re-measured on every event so the spy
/// stays correct as cards reveal and the layout shifts.
fn install_scroll_tracker(ctx: AppContext) {
    let Some(window) = dom::window() else { return };

    let callback = Closure::<dyn FnMut()>::new(move || {
        let y = dom::scroll_y();
        ctx.scroll_y.set(y);

        let sections = dom::section_positions();
        let active = active_section(y, &sections).map(str::to_string);
        ctx.active_section.set(active);
    });
    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    // Page-lifetime listener, never removed.
    callback.forget();
}

/// Escape closes the modal while it is open. No other keys are intercepted.
fn install_escape_listener(ctx: AppContext) {
    let Some(document) = dom::document() else { return };

    let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" && ctx.open_topic.get_untracked().is_some() {
                close_modal(ctx);
            }
        },
    );
    let _ = document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
    callback.forget();
}
