//! New-supplier intake form with inline validation.
//!
//! Validation runs entirely client-side before any effect; the roster is
//! mock data, so a valid submission toasts and returns to the admin view.

#[cfg(test)]
#[path = "add_supplier_test.rs"]
mod add_supplier_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::data::SupplierTier;
use crate::state::toast::{ToastKind, ToastState, push_toast};
use crate::util::forms::{validate_min_len, validate_optional_email, validate_optional_url};

/// Validated intake form output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSupplier {
    pub name: String,
    pub category: String,
    pub location: String,
    pub tier: SupplierTier,
    pub website: Option<String>,
    pub contact_email: Option<String>,
    pub certifications: Vec<String>,
}

/// Raw field values as held by the form.
#[derive(Clone, Debug, Default)]
pub struct SupplierForm {
    pub name: String,
    pub category: String,
    pub location: String,
    pub tier: String,
    pub website: String,
    pub contact_email: String,
    pub certifications: String,
}

/// Per-field inline errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupplierFormErrors {
    pub name: Option<&'static str>,
    pub category: Option<&'static str>,
    pub location: Option<&'static str>,
    pub website: Option<&'static str>,
    pub contact_email: Option<&'static str>,
}

impl SupplierFormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.location.is_none()
            && self.website.is_none()
            && self.contact_email.is_none()
    }
}

/// Validate the raw form; either a complete [`NewSupplier`] or the full
/// set of inline errors.
///
/// # Errors
///
/// Returns every failing field's message so the form can show them all at
/// once.
pub fn validate_supplier_form(form: &SupplierForm) -> Result<NewSupplier, SupplierFormErrors> {
    let mut errors = SupplierFormErrors::default();

    let name = validate_min_len(&form.name, 2, "Name must be at least 2 characters")
        .map_err(|e| errors.name = Some(e))
        .ok();
    let category = validate_min_len(&form.category, 1, "Please select a category")
        .map_err(|e| errors.category = Some(e))
        .ok();
    let location = validate_min_len(&form.location, 2, "Location must be at least 2 characters")
        .map_err(|e| errors.location = Some(e))
        .ok();
    let website = validate_optional_url(&form.website)
        .map_err(|e| errors.website = Some(e))
        .ok();
    let contact_email = validate_optional_email(&form.contact_email)
        .map_err(|e| errors.contact_email = Some(e))
        .ok();

    if !errors.is_empty() {
        return Err(errors);
    }

    let tier = match form.tier.as_str() {
        "secondary" => SupplierTier::Secondary,
        "tertiary" => SupplierTier::Tertiary,
        _ => SupplierTier::Primary,
    };
    let certifications = form
        .certifications
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_owned)
        .collect();

    Ok(NewSupplier {
        name: name.unwrap_or_default(),
        category: category.unwrap_or_default(),
        location: location.unwrap_or_default(),
        tier,
        website: website.flatten(),
        contact_email: contact_email.flatten(),
        certifications,
    })
}

#[component]
pub fn AddSupplierPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(SupplierForm::default());
    let errors = RwSignal::new(SupplierFormErrors::default());

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            match validate_supplier_form(&form.get_untracked()) {
                Ok(supplier) => {
                    errors.set(SupplierFormErrors::default());
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        "Supplier added",
                        &format!("{} has been submitted for verification", supplier.name),
                    );
                    navigate("/admin", NavigateOptions::default());
                }
                Err(found) => errors.set(found),
            }
        }
    };

    let field_error = move |get: fn(&SupplierFormErrors) -> Option<&'static str>| {
        move || get(&errors.get()).map(|message| view! { <span class="auth-form__error">{message}</span> })
    };

    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <a href="/admin" class="back-link">"← Back to admin"</a>
                <section class="page__intro">
                    <div>
                        <h1>"Add Supplier"</h1>
                        <p class="page__subtitle">"Register a new supplier for sustainability verification"</p>
                    </div>
                </section>

                <form class="card supplier-form" on:submit=on_submit>
                    <label class="auth-form__field">
                        "Name"
                        <input
                            type="text"
                            placeholder="Supplier name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        {field_error(|e| e.name)}
                    </label>

                    <div class="supplier-form__row">
                        <label class="auth-form__field">
                            "Category"
                            <input
                                type="text"
                                placeholder="e.g. Packaging"
                                prop:value=move || form.get().category
                                on:input=move |ev| form.update(|f| f.category = event_target_value(&ev))
                            />
                            {field_error(|e| e.category)}
                        </label>

                        <label class="auth-form__field">
                            "Tier"
                            <select on:change=move |ev| form.update(|f| f.tier = event_target_value(&ev))>
                                {SupplierTier::ALL
                                    .into_iter()
                                    .map(|tier| {
                                        let value = tier.label().to_lowercase();
                                        view! { <option value=value>{tier.label()}</option> }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>

                    <label class="auth-form__field">
                        "Location"
                        <input
                            type="text"
                            placeholder="City, State"
                            prop:value=move || form.get().location
                            on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                        />
                        {field_error(|e| e.location)}
                    </label>

                    <div class="supplier-form__row">
                        <label class="auth-form__field">
                            "Website (optional)"
                            <input
                                type="text"
                                placeholder="https://"
                                prop:value=move || form.get().website
                                on:input=move |ev| form.update(|f| f.website = event_target_value(&ev))
                            />
                            {field_error(|e| e.website)}
                        </label>

                        <label class="auth-form__field">
                            "Contact email (optional)"
                            <input
                                type="text"
                                placeholder="contact@supplier.com"
                                prop:value=move || form.get().contact_email
                                on:input=move |ev| form.update(|f| f.contact_email = event_target_value(&ev))
                            />
                            {field_error(|e| e.contact_email)}
                        </label>
                    </div>

                    <label class="auth-form__field">
                        "Certifications (comma separated, optional)"
                        <input
                            type="text"
                            placeholder="ISO 14001, Fair Trade"
                            prop:value=move || form.get().certifications
                            on:input=move |ev| form.update(|f| f.certifications = event_target_value(&ev))
                        />
                    </label>

                    <div class="dialog__actions">
                        <a href="/admin" class="btn">"Cancel"</a>
                        <button class="btn btn--primary" type="submit">"Add Supplier"</button>
                    </div>
                </form>
            </main>
        </div>
    }
}
