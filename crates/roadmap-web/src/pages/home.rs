use leptos::html::Div;
use leptos::prelude::*;
use roadmap_core::{lessons, matches};

use crate::components::code_preview::CodePreview;
use crate::components::modal::open_modal;
use crate::components::reveal::reveal_on_scroll;
use crate::components::search::SearchBox;
use crate::context::AppContext;
use crate::data::{concepts, projects};
use crate::dom;

const HERO_SNIPPET: &str = r#"public static void main(String[] args) {
    SpringApplication.run(BackendApplication.class, args);
}"#;

#[component]
pub fn Home() -> impl IntoView {
    let ctx = AppContext::expect();

    view! {
        <section id="hero" class="hero">
            <h1>"Become a Java Backend Developer"</h1>
            <p class="hero-tagline">
                "A practical roadmap from language fundamentals to production services. "
                "Click any topic card for a deep dive with code examples."
            </p>
            <div class="hero-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| dom::scroll_to_section("topics")
                >
                    "Start Learning"
                </button>
            </div>
            <CodePreview code=HERO_SNIPPET />
        </section>

        <section id="topics" class="section">
            <h2>"Core Java Topics"</h2>
            <p class="section-intro">
                "The language features every backend developer leans on daily."
            </p>
            <SearchBox />
            <div class="card-grid">
                {lessons()
                    .iter()
                    .map(|lesson| {
                        let id = lesson.id;
                        let text = lesson.search_text();
                        let card_ref = NodeRef::<Div>::new();
                        reveal_on_scroll(card_ref);
                        view! {
                            <div
                                class="topic-card"
                                node_ref=card_ref
                                style:display=move || {
                                    if matches(&text, &ctx.query.get()) { "block" } else { "none" }
                                }
                                on:click=move |_| open_modal(ctx, id)
                            >
                                <h3>{lesson.title}</h3>
                                <p>{lesson.description}</p>
                                <span class="card-link">"Learn More \u{2192}"</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="concepts" class="section">
            <h2>"Beyond the Language"</h2>
            <div class="card-grid">
                {concepts()
                    .into_iter()
                    .map(|concept| {
                        let text = format!("{} {}", concept.title, concept.desc);
                        let card_ref = NodeRef::<Div>::new();
                        reveal_on_scroll(card_ref);
                        view! {
                            <div
                                class="concept-card"
                                node_ref=card_ref
                                style:display=move || {
                                    if matches(&text, &ctx.query.get()) { "block" } else { "none" }
                                }
                            >
                                <h3>{concept.title}</h3>
                                <p>{concept.desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="projects" class="section">
            <h2>"Projects to Build"</h2>
            <div class="card-grid">
                {projects()
                    .into_iter()
                    .map(|project| {
                        let text =
                            format!("{} {} {}", project.title, project.desc, project.stack);
                        let card_ref = NodeRef::<Div>::new();
                        reveal_on_scroll(card_ref);
                        view! {
                            <div
                                class="project-card"
                                node_ref=card_ref
                                style:display=move || {
                                    if matches(&text, &ctx.query.get()) { "block" } else { "none" }
                                }
                            >
                                <h3>{project.title}</h3>
                                <p>{project.desc}</p>
                                <span class="project-stack">{project.stack}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
