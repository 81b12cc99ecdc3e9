use leptos::prelude::*;

use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <p>"\u{00A9} 2026 Java Backend Roadmap. Built for aspiring backend developers."</p>
                <div class="footer-links">
                    <a
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            dom::print_page();
                        }
                    >
                        "Print Roadmap"
                    </a>
                    <a href="https://dev.java" target="_blank" rel="noreferrer">
                        "Learn Java"
                    </a>
                    <a href="https://spring.io" target="_blank" rel="noreferrer">
                        "Spring"
                    </a>
                </div>
            </div>
        </footer>
    }
}
