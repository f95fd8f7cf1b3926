//! Verification process feed with status and type filters.

#[cfg(test)]
#[path = "verification_test.rs"]
mod verification_test;

use leptos::prelude::*;

use crate::components::header::Header;
use crate::data::{self, ActivityStatus, ActivityType, VerificationActivity};

/// Apply the optional status and type filters to the activity feed.
#[must_use]
pub fn filter_activities(
    activities: &[VerificationActivity],
    status: Option<ActivityStatus>,
    kind: Option<ActivityType>,
) -> Vec<VerificationActivity> {
    activities
        .iter()
        .filter(|a| status.is_none_or(|s| a.status == s))
        .filter(|a| kind.is_none_or(|k| a.kind == k))
        .copied()
        .collect()
}

#[component]
pub fn VerificationPage() -> impl IntoView {
    let status_filter = RwSignal::new(None::<ActivityStatus>);
    let kind_filter = RwSignal::new(None::<ActivityType>);

    let visible = move || filter_activities(&data::verification_activities(), status_filter.get(), kind_filter.get());

    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="page__intro">
                    <div>
                        <h1>"Verification Processes"</h1>
                        <p class="page__subtitle">
                            "Audits, certifications, and reports across the supplier network"
                        </p>
                    </div>
                </section>

                <div class="filter-bar">
                    <div class="filter-bar__group">
                        <button
                            class=move || filter_class(status_filter.get().is_none())
                            on:click=move |_| status_filter.set(None)
                        >
                            "All statuses"
                        </button>
                        {ActivityStatus::ALL
                            .into_iter()
                            .map(|status| view! {
                                <button
                                    class=move || filter_class(status_filter.get() == Some(status))
                                    on:click=move |_| status_filter.set(Some(status))
                                >
                                    {status.label()}
                                </button>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="filter-bar__group">
                        <button
                            class=move || filter_class(kind_filter.get().is_none())
                            on:click=move |_| kind_filter.set(None)
                        >
                            "All types"
                        </button>
                        {ActivityType::ALL
                            .into_iter()
                            .map(|kind| view! {
                                <button
                                    class=move || filter_class(kind_filter.get() == Some(kind))
                                    on:click=move |_| kind_filter.set(Some(kind))
                                >
                                    {kind.label()}
                                </button>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                {move || {
                    let activities = visible();
                    if activities.is_empty() {
                        view! { <p class="empty-note">"No verification activity matches the selected filters."</p> }
                            .into_any()
                    } else {
                        view! {
                            <ul class="verification-list">
                                {activities
                                    .into_iter()
                                    .map(|activity| view! {
                                        <li class="verification-list__item">
                                            <span class=format!("activity-dot activity-dot--{}", activity.status.as_str())></span>
                                            <div class="verification-list__body">
                                                <p class="activity-list__title">{activity.activity}</p>
                                                <p class="activity-list__meta">
                                                    {activity.supplier} " · " {activity.kind.label()} " · " {activity.date}
                                                </p>
                                            </div>
                                            <span class="verification-list__status">{activity.status.label()}</span>
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    }
                }}
            </main>
        </div>
    }
}

fn filter_class(active: bool) -> &'static str {
    if active { "filter-chip filter-chip--active" } else { "filter-chip" }
}
