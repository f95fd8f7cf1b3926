//! Home dashboard: metrics, supplier grid, and program summary.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::metrics_panel::MetricsPanel;
use crate::components::supplier_card::SupplierCard;
use crate::data;

#[component]
pub fn IndexPage() -> impl IntoView {
    let summary = data::performance_summary();

    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="page__intro">
                    <div>
                        <h1>"Supply Chain Verification"</h1>
                        <p class="page__subtitle">
                            "Monitor and verify sustainability across your supply chain"
                        </p>
                    </div>
                    <div class="page__intro-actions">
                        <a href="/verification" class="btn">"View Verifications"</a>
                        <a href="/admin" class="btn btn--primary">"Admin Dashboard"</a>
                    </div>
                </section>

                <MetricsPanel metrics=data::sustainability_metrics()/>

                <section class="dashboard-grid">
                    <div class="card">
                        <h2 class="card__title">"Program Performance"</h2>
                        <dl class="summary-list">
                            <div class="summary-list__row">
                                <dt>"Overall score"</dt>
                                <dd>{summary.overall_score}</dd>
                            </div>
                            <div class="summary-list__row">
                                <dt>"Supplier compliance"</dt>
                                <dd>{format!("{}%", summary.supplier_compliance)}</dd>
                            </div>
                            <div class="summary-list__row">
                                <dt>"Verified claims"</dt>
                                <dd>{format!("{}%", summary.verified_claims)}</dd>
                            </div>
                            <div class="summary-list__row">
                                <dt>"Improvement rate"</dt>
                                <dd>{format!("{}%", summary.improvement_rate)}</dd>
                            </div>
                            <div class="summary-list__row">
                                <dt>"Risk level"</dt>
                                <dd>{summary.risk_level}</dd>
                            </div>
                            <div class="summary-list__row">
                                <dt>"Top performer"</dt>
                                <dd>{summary.top_performer}</dd>
                            </div>
                        </dl>
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Recent Verifications"</h2>
                        <ul class="activity-list">
                            {data::verification_activities()
                                .into_iter()
                                .take(3)
                                .map(|activity| view! {
                                    <li class="activity-list__item">
                                        <span class=format!("activity-dot activity-dot--{}", activity.status.as_str())></span>
                                        <div>
                                            <p class="activity-list__title">{activity.activity}</p>
                                            <p class="activity-list__meta">
                                                {activity.supplier} " · " {activity.date}
                                            </p>
                                        </div>
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                        <a href="/verification" class="card__footer-link">"View all verifications"</a>
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Recent Milestones"</h2>
                        <ul class="milestone-list">
                            {summary
                                .recent_milestones
                                .iter()
                                .map(|milestone| view! { <li>{*milestone}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                        <h3 class="card__subtitle">"Improvement areas"</h3>
                        <ul class="chip-list">
                            {summary
                                .improvement_areas
                                .iter()
                                .map(|area| view! { <li class="chip">{*area}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </section>

                <section>
                    <h2 class="section-title">"Suppliers"</h2>
                    <div class="supplier-grid">
                        {data::suppliers()
                            .into_iter()
                            .map(|supplier| view! { <SupplierCard supplier=supplier/> })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </main>
        </div>
    }
}
