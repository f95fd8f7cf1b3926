//! Catch-all 404 view.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    // Surface bad links in the console the way server logs would.
    Effect::new(move || {
        log::error!("attempted to access non-existent route: {}", location.pathname.get());
    });

    view! {
        <div class="fallback-view fallback-view--page">
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <p class="fallback-view__path">
                "Path: " <code>{move || location.pathname.get()}</code>
            </p>
            <a href="/" class="btn btn--primary">"Home"</a>
        </div>
    }
}
