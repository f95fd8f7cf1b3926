//! Light/dark mode toggle button.

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeState};

/// Toggle between light and dark mode; persistence and DOM application
/// happen in the app-level theme effect.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let glyph = move || match theme.get().theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| theme.update(|t| t.theme = t.theme.toggled())
        >
            {glyph}
        </button>
    }
}
