//! Lesson detail modal.
//!
//! Renders the [`roadmap_core::Lesson`] view-model directly into the view
//! tree; there is no string templating. At most one lesson is shown at a
//! time, and opening an unknown topic id does nothing.

use leptos::prelude::*;
use roadmap_core::lesson;

use super::code_preview::CodePreview;
use crate::context::AppContext;
use crate::dom;

/// Show the modal for `topic`, locking background scroll. A topic id that is
/// not in the content table is silently ignored.
pub fn open_modal(ctx: AppContext, topic: &'static str) {
    if lesson(topic).is_none() {
        return;
    }
    ctx.open_topic.set(Some(topic));
    dom::lock_body_scroll(true);
}

/// Hide the modal and restore background scroll, whatever topic was shown.
pub fn close_modal(ctx: AppContext) {
    ctx.open_topic.set(None);
    dom::lock_body_scroll(false);
}

#[component]
pub fn Modal() -> impl IntoView {
    let ctx = AppContext::expect();

    let body = move || {
        ctx.open_topic.get().and_then(lesson).map(|lesson| {
            view! {
                <h2 class="modal-title">{lesson.title}</h2>
                <p class="modal-description">{lesson.description}</p>

                <h3 class="modal-heading">"\u{1F3AF} " {lesson.importance}</h3>
                <ul class="modal-points">
                    {lesson
                        .points
                        .iter()
                        .map(|point| view! { <li>{*point}</li> })
                        .collect_view()}
                </ul>

                <h3 class="modal-heading">"\u{1F4BB} Code Examples"</h3>
                <CodePreview code=lesson.code_sample />

                <h3 class="modal-heading">"\u{1F4A1} Best Practices"</h3>
                <ul class="modal-tips">
                    {lesson
                        .tips
                        .iter()
                        .map(|tip| view! { <li>{*tip}</li> })
                        .collect_view()}
                </ul>
            }
        })
    };

    view! {
        <div
            id="modal"
            class="modal"
            class:active=move || ctx.open_topic.get().is_some()
            // Clicks that reach the overlay were outside the content area.
            on:click=move |_| close_modal(ctx)
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button
                    class="modal-close"
                    aria-label="Close"
                    on:click=move |_| close_modal(ctx)
                >
                    "\u{00D7}"
                </button>
                <div id="modalBody">{body}</div>
            </div>
        </div>
    }
}
