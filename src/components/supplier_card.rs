//! Card summarizing one supplier in dashboard grids.

use leptos::prelude::*;

use crate::data::Supplier;

use super::verification_badge::VerificationBadge;

#[component]
pub fn SupplierCard(supplier: Supplier) -> impl IntoView {
    let href = format!("/supplier/{}", supplier.id);

    view! {
        <a href=href class="supplier-card">
            <div class="supplier-card__top">
                <div>
                    <h3 class="supplier-card__name">{supplier.name}</h3>
                    <p class="supplier-card__meta">{supplier.location} " · " {supplier.category}</p>
                </div>
                <VerificationBadge status=supplier.verification_status/>
            </div>
            <div class="supplier-card__score">
                <span class="supplier-card__score-value">{supplier.sustainability_score}</span>
                <span class="supplier-card__score-label">"Sustainability score"</span>
            </div>
            <div class="supplier-card__bottom">
                <span class="supplier-card__tier">{supplier.tier.label()} " tier"</span>
                <ul class="supplier-card__certs">
                    {supplier
                        .certifications
                        .iter()
                        .map(|cert| view! { <li class="supplier-card__cert">{*cert}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </a>
    }
}
