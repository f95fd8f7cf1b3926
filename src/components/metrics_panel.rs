//! Grid of sustainability metric cards with progress-to-target bars.

use leptos::prelude::*;

use crate::data::{MetricTrend, SustainabilityMetric};

#[component]
pub fn MetricsPanel(metrics: Vec<SustainabilityMetric>) -> impl IntoView {
    view! {
        <div class="metrics-panel">
            {metrics
                .into_iter()
                .map(|metric| view! { <MetricCard metric=metric/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn MetricCard(metric: SustainabilityMetric) -> impl IntoView {
    let trend_class = if metric.trend_is_favorable() {
        "metric-card__trend metric-card__trend--good"
    } else {
        "metric-card__trend metric-card__trend--bad"
    };
    let arrow = match metric.trend {
        MetricTrend::Up => "▲",
        MetricTrend::Down => "▼",
        MetricTrend::Stable => "–",
    };
    let progress = metric.progress_percent();

    view! {
        <div class="metric-card">
            <div class="metric-card__top">
                <div>
                    <p class="metric-card__name">{metric.name}</p>
                    <p class="metric-card__value">
                        <span>{format_value(metric.value)}</span>
                        <span class="metric-card__unit">{metric.unit}</span>
                    </p>
                </div>
                <span class=trend_class>{arrow} " " {format!("{}%", metric.change)}</span>
            </div>
            <div class="metric-card__progress">
                <div class="metric-card__progress-head">
                    <span>"Progress to target"</span>
                    <span>{format!("{}%", progress.round())}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style:width=format!("{progress}%")></div>
                </div>
                <div class="metric-card__progress-foot">
                    <span>{metric.period_label}</span>
                    <span>"Target: " {format_value(metric.target)} {metric.unit}</span>
                </div>
            </div>
        </div>
    }
}

/// Whole numbers render without a decimal point.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
