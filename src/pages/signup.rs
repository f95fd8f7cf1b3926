//! Account registration form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::state::session::SessionState;
use crate::util::auth::install_auth_redirect;
use crate::util::forms::{validate_email, validate_password, validate_password_confirmation};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dispatcher = expect_context::<crate::app::SharedDispatcher>();

    install_auth_redirect(session, use_navigate(), "/admin");

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let confirm_error = RwSignal::new(None::<&'static str>);

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
        let password_value = password.get_untracked();
        let password_ok = match validate_password(&password_value) {
            Ok(()) => {
                password_error.set(None);
                true
            }
            Err(message) => {
                password_error.set(Some(message));
                false
            }
        };
        let confirm_ok = match validate_password_confirmation(&password_value, &confirm.get_untracked()) {
            Ok(()) => {
                confirm_error.set(None);
                true
            }
            Err(message) => {
                confirm_error.set(Some(message));
                false
            }
        };
        let (Some(email_value), true, true) = (email_value, password_ok, confirm_ok) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let dispatcher = dispatcher.clone();
            leptos::task::spawn_local(async move {
                let redirect = web_sys::window()
                    .and_then(|w| w.location().origin().ok())
                    .map(|origin| format!("{origin}/login"));
                let _ = dispatcher.sign_up(&email_value, &password_value, redirect.as_deref()).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&dispatcher, email_value, password_value);
        }
    };

    view! {
        <div class="page">
            <Header hide_nav=true/>
            <main class="auth-page">
                <div class="auth-card">
                    <h1>"Create an Account"</h1>
                    <p class="auth-card__subtitle">
                        "Sign up to access the supplier verification portal"
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

                        <label class="auth-form__field">
                            "Confirm password"
                            <input
                                type="password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                            <Show when=move || confirm_error.get().is_some()>
                                <span class="auth-form__error">{move || confirm_error.get().unwrap_or_default()}</span>
                            </Show>
                        </label>

                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=busy>
                            {move || if busy() { "Creating account..." } else { "Create account" }}
                        </button>
                    </form>

                    <p class="auth-card__footer">
                        "Already registered? " <a href="/login">"Log in"</a>
                    </p>
                </div>
            </main>
        </div>
    }
}
