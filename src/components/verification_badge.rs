//! Pill badge for a supplier's verification status.

use leptos::prelude::*;

use crate::data::VerificationStatus;

#[component]
pub fn VerificationBadge(status: VerificationStatus) -> impl IntoView {
    view! {
        <span class=format!("verification-badge verification-badge--{}", status.as_str())>
            {status.label()}
        </span>
    }
}
