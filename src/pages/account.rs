//! Account screen: profile details and password change.
//!
//! Both forms are local-only; the platform keeps no profile store, so a
//! valid submission simply confirms via toast.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState, push_toast};
use crate::util::forms::{validate_email, validate_min_len, validate_password, validate_password_confirmation};

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let profile_error = RwSignal::new(None::<&'static str>);

    // Seed the email field from the session once it is known.
    Effect::new(move || {
        if let Some(user) = session.get().user() {
            if let Some(address) = &user.email {
                if email.get_untracked().is_empty() {
                    email.set(address.clone());
                }
            }
        }
    });

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let valid = validate_min_len(&display_name.get_untracked(), 2, "Display name must be at least 2 characters")
            .and_then(|_| validate_email(&email.get_untracked()));
        match valid {
            Ok(_) => {
                profile_error.set(None);
                push_toast(toasts, ToastKind::Success, "Profile updated", "Your profile information has been updated");
            }
            Err(message) => profile_error.set(Some(message)),
        }
    };

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_error = RwSignal::new(None::<&'static str>);

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let valid = validate_password(&current_password.get_untracked())
            .and_then(|()| validate_password(&new_password.get_untracked()))
            .and_then(|()| {
                validate_password_confirmation(&new_password.get_untracked(), &confirm_password.get_untracked())
            });
        match valid {
            Ok(()) => {
                password_error.set(None);
                current_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
                push_toast(toasts, ToastKind::Success, "Password changed", "Your password has been changed successfully");
            }
            Err(message) => password_error.set(Some(message)),
        }
    };

    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="page__intro">
                    <div>
                        <h1>"Account"</h1>
                        <p class="page__subtitle">"Manage your profile and credentials"</p>
                    </div>
                </section>

                <div class="account-grid">
                    <form class="card auth-form" on:submit=on_profile_submit>
                        <h2 class="card__title">"Profile"</h2>
                        <label class="auth-form__field">
                            "Display name"
                            <input
                                type="text"
                                placeholder="Your name"
                                prop:value=move || display_name.get()
                                on:input=move |ev| display_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__field">
                            "Email"
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || profile_error.get().is_some()>
                            <span class="auth-form__error">{move || profile_error.get().unwrap_or_default()}</span>
                        </Show>
                        <button class="btn btn--primary" type="submit">"Save profile"</button>
                    </form>

                    <form class="card auth-form" on:submit=on_password_submit>
                        <h2 class="card__title">"Change Password"</h2>
                        <label class="auth-form__field">
                            "Current password"
                            <input
                                type="password"
                                prop:value=move || current_password.get()
                                on:input=move |ev| current_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__field">
                            "New password"
                            <input
                                type="password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__field">
                            "Confirm new password"
                            <input
                                type="password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || password_error.get().is_some()>
                            <span class="auth-form__error">{move || password_error.get().unwrap_or_default()}</span>
                        </Show>
                        <button class="btn btn--primary" type="submit">"Change password"</button>
                    </form>
                </div>
            </main>
        </div>
    }
}
