use leptos::prelude::*;

use crate::context::AppContext;
use crate::dom;

/// Flips light/dark mode, applies the `dark-theme` body class, and persists
/// the choice under the `"theme"` storage key.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = AppContext::expect();

    let toggle = move |_| {
        let next = ctx.theme.get_untracked().toggled();
        dom::apply_theme(next);
        dom::store_theme(next);
        ctx.theme.set(next);
    };

    let glyph = move || {
        if ctx.theme.get().is_dark() {
            "\u{263E}"
        } else {
            "\u{2600}"
        }
    };

    view! {
        <button class="theme-toggle" title="Toggle theme" on:click=toggle>
            {glyph}
        </button>
    }
}
