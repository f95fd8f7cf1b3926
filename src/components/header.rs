//! Fixed top navigation bar.

use leptos::prelude::*;

use crate::state::session::SessionState;

use super::theme_toggle::ThemeToggle;

/// Site header with brand, primary navigation, theme toggle, and the
/// session's sign-in/sign-out affordance.
#[component]
pub fn Header(#[prop(optional)] hide_nav: bool) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dispatcher = expect_context::<crate::app::SharedDispatcher>();

    let email = move || {
        session
            .get()
            .user()
            .and_then(|u| u.email.clone())
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "csr")]
        {
            let dispatcher = dispatcher.clone();
            leptos::task::spawn_local(async move {
                dispatcher.sign_out().await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &dispatcher;
        }
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href="/" class="site-header__brand">
                    "EcoVerify"
                    <span class="site-header__brand-dot">"."</span>
                </a>

                <Show when=move || !hide_nav>
                    <nav class="site-header__nav">
                        <a href="/">"Dashboard"</a>
                        <a href="/verification">"Verifications"</a>
                        <a href="/documents">"Documents"</a>
                        <a href="/admin">"Admin"</a>
                    </nav>
                </Show>

                <div class="site-header__actions">
                    <ThemeToggle/>
                    <a href="/notifications" class="site-header__icon-link" title="Notifications">
                        <svg class="site-header__bell" viewBox="0 0 24 24" aria-hidden="true">
                            <path d="M12 3a6 6 0 0 0-6 6v4l-2 3h16l-2-3V9a6 6 0 0 0-6-6z"></path>
                            <path d="M10 19a2 2 0 0 0 4 0"></path>
                        </svg>
                    </a>
                    <Show
                        when=move || session.get().is_authenticated()
                        fallback=|| view! { <a href="/login" class="site-header__login">"Login"</a> }
                    >
                        <span class="site-header__email">{email}</span>
                        <button class="site-header__logout" on:click=on_sign_out.clone()>
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
