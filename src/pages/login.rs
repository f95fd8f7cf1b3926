//! Admin portal login form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::state::session::SessionState;
use crate::util::auth::install_auth_redirect;
use crate::util::forms::{validate_email, validate_password};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dispatcher = expect_context::<crate::app::SharedDispatcher>();

    // Already signed in: skip the form entirely.
    install_auth_redirect(session, use_navigate(), "/admin");

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);

    let busy = move || session.get().loading;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }

        let email_value = match validate_email(&email.get_untracked()) {
            Ok(value) => {
                email_error.set(None);
                Some(value)
            }
            Err(message) => {
                email_error.set(Some(message));
                None
            }
        };
        let password_ok = match validate_password(&password.get_untracked()) {
            Ok(()) => {
                password_error.set(None);
                true
            }
            Err(message) => {
                password_error.set(Some(message));
                false
            }
        };
        let (Some(email_value), true) = (email_value, password_ok) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let dispatcher = dispatcher.clone();
            let password_value = password.get_untracked();
            leptos::task::spawn_local(async move {
                // Failures are toasted by the dispatcher; the form stays open.
                let _ = dispatcher.sign_in(&email_value, &password_value).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&dispatcher, email_value);
        }
    };

    view! {
        <div class="page">
            <Header hide_nav=true/>
            <main class="auth-page">
                <div class="auth-card">
                    <h1>"Login to Admin Portal"</h1>
                    <p class="auth-card__subtitle">
                        "Enter your credentials to access the admin dashboard"
                    </p>

                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__field">
                            "Email"
                            <input
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <Show when=move || email_error.get().is_some()>
                                <span class="auth-form__error">{move || email_error.get().unwrap_or_default()}</span>
                            </Show>
                        </label>

                        <label class="auth-form__field">
                            "Password"
                            <input
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <Show when=move || password_error.get().is_some()>
                                <span class="auth-form__error">{move || password_error.get().unwrap_or_default()}</span>
                            </Show>
                        </label>

                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=busy>
                            {move || if busy() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>

                    <p class="auth-card__footer">
                        "Don't have an account? " <a href="/signup">"Sign up"</a>
                    </p>
                </div>
            </main>
        </div>
    }
}
