use leptos::prelude::*;

use crate::context::AppContext;

/// Live search box driving the content filter. Every keystroke updates the
/// shared query; cards match on a case-insensitive substring of their text.
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = AppContext::expect();

    view! {
        <input
            type="search"
            class="content-search"
            placeholder="Search topics..."
            prop:value=move || ctx.query.get()
            on:input=move |ev| ctx.query.set(event_target_value(&ev))
        />
    }
}
