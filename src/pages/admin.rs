//! Admin dashboard: searchable supplier management over the mock dataset.
//!
//! Mutations are optimistic, in-memory edits of the page's own copy; the
//! platform has no supplier backend.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::verification_badge::VerificationBadge;
use crate::data::{self, ActivityStatus, Supplier, VerificationStatus};
use crate::state::toast::{ToastKind, ToastState, push_toast};

/// Case-insensitive search across name, location, and category.
#[must_use]
pub fn filter_suppliers(suppliers: &[Supplier], query: &str) -> Vec<Supplier> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return suppliers.to_vec();
    }
    suppliers
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.location.to_lowercase().contains(&needle)
                || s.category.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}

/// Mean sustainability score, zero for an empty roster.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_score(suppliers: &[Supplier]) -> f64 {
    if suppliers.is_empty() {
        return 0.0;
    }
    let total: u32 = suppliers.iter().map(|s| u32::from(s.sustainability_score)).sum();
    f64::from(total) / suppliers.len() as f64
}

/// Count suppliers currently holding `status`.
#[must_use]
pub fn count_by_status(suppliers: &[Supplier], status: VerificationStatus) -> usize {
    suppliers.iter().filter(|s| s.verification_status == status).count()
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let roster = RwSignal::new(data::suppliers());
    let query = RwSignal::new(String::new());
    let pending_remove = RwSignal::new(None::<Supplier>);

    let visible = move || filter_suppliers(&roster.get(), &query.get());
    let pending_verifications = data::verification_activities()
        .into_iter()
        .filter(|a| a.status != ActivityStatus::Completed)
        .count();

    let on_confirm_remove = move |_| {
        let Some(target) = pending_remove.get_untracked() else {
            return;
        };
        roster.update(|list| list.retain(|s| s.id != target.id));
        pending_remove.set(None);
        push_toast(toasts, ToastKind::Success, "Supplier removed", target.name);
    };

    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="page__intro">
                    <div>
                        <h1>"Admin Dashboard"</h1>
                        <p class="page__subtitle">"Manage suppliers and verification workflows"</p>
                    </div>
                    <div class="page__intro-actions">
                        <a href="/add-supplier" class="btn btn--primary">"Add Supplier"</a>
                    </div>
                </section>

                <section class="stat-row">
                    <div class="stat-card">
                        <p class="stat-card__value">{move || roster.get().len()}</p>
                        <p class="stat-card__label">"Suppliers"</p>
                    </div>
                    <div class="stat-card">
                        <p class="stat-card__value">
                            {move || count_by_status(&roster.get(), VerificationStatus::Verified)}
                        </p>
                        <p class="stat-card__label">"Verified"</p>
                    </div>
                    <div class="stat-card">
                        <p class="stat-card__value">{pending_verifications}</p>
                        <p class="stat-card__label">"Pending verifications"</p>
                    </div>
                    <div class="stat-card">
                        <p class="stat-card__value">
                            {move || format!("{:.0}", average_score(&roster.get()))}
                        </p>
                        <p class="stat-card__label">"Avg. score"</p>
                    </div>
                </section>

                <section class="card">
                    <div class="documents-layout__head">
                        <h2 class="card__title">"Suppliers"</h2>
                        <input
                            type="search"
                            class="search-input"
                            placeholder="Search suppliers..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                    </div>

                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Location"</th>
                                <th>"Category"</th>
                                <th>"Tier"</th>
                                <th>"Score"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=visible
                                key=|supplier| supplier.id
                                children=move |supplier: Supplier| {
                                    view! {
                                        <tr>
                                            <td>
                                                <a href=format!("/supplier/{}", supplier.id)>{supplier.name}</a>
                                            </td>
                                            <td>{supplier.location}</td>
                                            <td>{supplier.category}</td>
                                            <td>{supplier.tier.label()}</td>
                                            <td>{supplier.sustainability_score}</td>
                                            <td>
                                                <VerificationBadge status=supplier.verification_status/>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| pending_remove.set(Some(supplier))
                                                >
                                                    "Remove"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <p class="data-table__count">
                        {move || {
                            let shown = visible().len();
                            let total = roster.get().len();
                            format!("Showing {shown} of {total} suppliers")
                        }}
                    </p>
                </section>
            </main>

            <Show when=move || pending_remove.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| pending_remove.set(None)>
                    <div class="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Remove Supplier"</h2>
                        <p>"Remove this supplier from the roster? Verification history is kept."</p>
                        <p class="dialog__target">
                            {move || pending_remove.get().map(|s| s.name).unwrap_or_default()}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| pending_remove.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=on_confirm_remove>
                                "Remove"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
