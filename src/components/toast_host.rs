//! Overlay rendering the transient notification queue.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Toast overlay; mounts once at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id.clone()
                children=move |toast: Toast| {
                    let id = toast.id.clone();
                    let body = toast.body.clone();
                    let has_body = !body.is_empty();
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.as_str())>
                            <div class="toast__text">
                                <p class="toast__title">{toast.title.clone()}</p>
                                <Show when=move || has_body>
                                    <p class="toast__body">{body.clone()}</p>
                                </Show>
                            </div>
                            <button
                                class="toast__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    toasts.update(|state| {
                                        state.dismiss(&id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
