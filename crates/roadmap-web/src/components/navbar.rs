use leptos::prelude::*;
use roadmap_core::{hamburger_bar_styles, navbar_scrolled};

use super::theme_toggle::ThemeToggle;
use crate::context::AppContext;
use crate::dom;

/// (section id, label) pairs, in page order.
const NAV_LINKS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("topics", "Topics"),
    ("concepts", "Concepts"),
    ("projects", "Projects"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = AppContext::expect();

    let bars = move || hamburger_bar_styles(ctx.menu_open.get());

    view! {
        <header
            id="navbar"
            class="navbar"
            class:scrolled=move || navbar_scrolled(ctx.scroll_y.get())
        >
            <div class="nav-container">
                <a
                    href="#hero"
                    class="nav-logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        dom::scroll_to_top();
                    }
                >
                    "\u{2615} Java Backend Roadmap"
                </a>

                <ul id="navMenu" class="nav-menu" class:active=move || ctx.menu_open.get()>
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <li>
                                    <a
                                        href=format!("#{id}")
                                        class="nav-link"
                                        class:active=move || {
                                            ctx.active_section.get().as_deref() == Some(id)
                                        }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            // Explicit override; the next scroll event
                                            // recomputes the active section.
                                            ctx.active_section.set(Some(id.to_string()));
                                            ctx.menu_open.set(false);
                                            dom::scroll_to_section(id);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li>
                        <ThemeToggle />
                    </li>
                </ul>

                <button
                    id="hamburger"
                    class="hamburger"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| ctx.menu_open.update(|open| *open = !*open)
                >
                    <span
                        style:transform=move || bars()[0].transform
                        style:opacity=move || bars()[0].opacity
                    ></span>
                    <span
                        style:transform=move || bars()[1].transform
                        style:opacity=move || bars()[1].opacity
                    ></span>
                    <span
                        style:transform=move || bars()[2].transform
                        style:opacity=move || bars()[2].opacity
                    ></span>
                </button>
            </div>
        </header>
    }
}
