//! Settings screen: organization profile, notification toggle, theming.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::theme::{ColorTheme, ThemeState};
use crate::state::toast::{ToastKind, ToastState, push_toast};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();

    let org_name = RwSignal::new("EcoVerify".to_owned());
    let support_email = RwSignal::new(String::new());
    let email_notifications = RwSignal::new(true);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        push_toast(toasts, ToastKind::Success, "Settings saved", "Your settings have been updated");
    };

    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="page__intro">
                    <div>
                        <h1>"Settings"</h1>
                        <p class="page__subtitle">"Organization, notification, and appearance preferences"</p>
                    </div>
                </section>

                <form class="settings-grid" on:submit=on_save>
                    <div class="card auth-form">
                        <h2 class="card__title">"Organization"</h2>
                        <label class="auth-form__field">
                            "Organization name"
                            <input
                                type="text"
                                prop:value=move || org_name.get()
                                on:input=move |ev| org_name.set(event_target_value(&ev))
                            />
                            <span class="auth-form__hint">"This name appears in the header and email notifications"</span>
                        </label>
                        <label class="auth-form__field">
                            "Support email"
                            <input
                                type="email"
                                placeholder="support@example.com"
                                prop:value=move || support_email.get()
                                on:input=move |ev| support_email.set(event_target_value(&ev))
                            />
                            <span class="auth-form__hint">"Used for support requests and system notifications"</span>
                        </label>
                        <label class="settings-toggle">
                            <input
                                type="checkbox"
                                prop:checked=move || email_notifications.get()
                                on:change=move |_| email_notifications.update(|v| *v = !*v)
                            />
                            "Send system notifications via email"
                        </label>
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Appearance"</h2>
                        <div class="settings-theme-row">
                            <span>"Light / dark mode"</span>
                            <ThemeToggle/>
                        </div>
                        <h3 class="card__subtitle">"Color theme"</h3>
                        <div class="theme-picker">
                            {ColorTheme::ALL
                                .into_iter()
                                .map(|accent| {
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if theme.get().color_theme == accent {
                                                    "theme-picker__option theme-picker__option--active"
                                                } else {
                                                    "theme-picker__option"
                                                }
                                            }
                                            on:click=move |_| theme.update(|t| t.color_theme = accent)
                                        >
                                            <span class=format!("theme-picker__swatch theme-picker__swatch--{}", accent.as_str())></span>
                                            {accent.label()}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="dialog__actions settings-grid__actions">
                        <button class="btn btn--primary" type="submit">"Save settings"</button>
                    </div>
                </form>
            </main>
        </div>
    }
}
