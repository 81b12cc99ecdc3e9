use leptos::prelude::*;
use roadmap_core::scroll_top_visible;

use crate::context::AppContext;
use crate::dom;

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let ctx = AppContext::expect();

    view! {
        <button
            id="scrollTop"
            class="scroll-top"
            class:visible=move || scroll_top_visible(ctx.scroll_y.get())
            aria-label="Scroll back to top"
            on:click=move |_| dom::scroll_to_top()
        >
            "\u{2191}"
        </button>
    }
}
