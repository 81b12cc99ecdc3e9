use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::dom;

/// How long the "Copied!" confirmation stays on screen.
const TOAST_MS: i32 = 2000;

/// A code block that copies its text to the clipboard when clicked and
/// confirms with a transient centered toast. A rejected clipboard write
/// leaves no visible trace.
#[component]
pub fn CodePreview(code: &'static str) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let handle_copy = move |_| {
        let code = code.to_string();
        leptos::task::spawn_local(async move {
            let Some(window) = dom::window() else { return };
            let clipboard = window.navigator().clipboard();
            if JsFuture::from(clipboard.write_text(&code)).await.is_err() {
                return;
            }
            set_copied.set(true);

            let cb = Closure::once(move || set_copied.set(false));
            if let Some(window) = dom::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    TOAST_MS,
                );
            }
            cb.forget();
        });
    };

    view! {
        <div class="code-preview-wrap">
            <pre class="code-preview" title="Click to copy" on:click=handle_copy>
                {code}
            </pre>
            <Show when=move || copied.get()>
                <div class="copy-toast">"Copied!"</div>
            </Show>
        </div>
    }
}
