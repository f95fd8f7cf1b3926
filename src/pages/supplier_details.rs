//! Supplier detail screen; unknown ids render a dedicated fallback view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::header::Header;
use crate::components::sustainability_score::SustainabilityScore;
use crate::components::verification_badge::VerificationBadge;
use crate::data::{self, Supplier};

#[component]
pub fn SupplierDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let supplier = move || params.read().get("id").and_then(|id| data::supplier_by_id(&id));

    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                {move || match supplier() {
                    Some(supplier) => view! { <SupplierDetails supplier=supplier/> }.into_any(),
                    None => view! { <SupplierMissing/> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn SupplierDetails(supplier: Supplier) -> impl IntoView {
    let activities: Vec<_> = data::verification_activities()
        .into_iter()
        .filter(|a| a.supplier == supplier.name)
        .collect();
    let has_activities = !activities.is_empty();

    view! {
        <article class="supplier-details">
            <a href="/" class="back-link">"← Back to dashboard"</a>
            <header class="supplier-details__head">
                <div>
                    <h1>{supplier.name}</h1>
                    <p class="page__subtitle">
                        {supplier.location} " · " {supplier.category} " · " {supplier.tier.label()} " tier"
                    </p>
                </div>
                <VerificationBadge status=supplier.verification_status/>
            </header>

            <section class="supplier-details__grid">
                <div class="card">
                    <h2 class="card__title">"Sustainability"</h2>
                    <SustainabilityScore score=supplier.sustainability_score/>
                    <p class="supplier-details__verified">
                        "Last verified: " {supplier.last_verified}
                    </p>
                </div>

                <div class="card">
                    <h2 class="card__title">"Certifications"</h2>
                    <ul class="chip-list">
                        {supplier
                            .certifications
                            .iter()
                            .map(|cert| view! { <li class="chip">{*cert}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div class="card">
                    <h2 class="card__title">"Verification History"</h2>
                    <Show
                        when=move || has_activities
                        fallback=|| view! { <p class="empty-note">"No recorded verification activity."</p> }
                    >
                        <ul class="activity-list">
                            {activities
                                .clone()
                                .into_iter()
                                .map(|activity| view! {
                                    <li class="activity-list__item">
                                        <span class=format!("activity-dot activity-dot--{}", activity.status.as_str())></span>
                                        <div>
                                            <p class="activity-list__title">{activity.activity}</p>
                                            <p class="activity-list__meta">
                                                {activity.kind.label()} " · " {activity.date} " · " {activity.status.label()}
                                            </p>
                                        </div>
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </Show>
                </div>
            </section>
        </article>
    }
}

#[component]
fn SupplierMissing() -> impl IntoView {
    view! {
        <div class="fallback-view">
            <h1>"Supplier not found"</h1>
            <p>"The supplier you are looking for does not exist or has been removed."</p>
            <a href="/" class="btn btn--primary">"Back to dashboard"</a>
        </div>
    }
}
