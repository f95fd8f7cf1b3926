//! Large score readout with a qualitative band.

#[cfg(test)]
#[path = "sustainability_score_test.rs"]
mod sustainability_score_test;

use leptos::prelude::*;

/// Qualitative band for a 0–100 sustainability score.
#[must_use]
pub fn score_band(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => "Excellent",
        80..=89 => "Good",
        70..=79 => "Fair",
        _ => "Needs attention",
    }
}

/// Class-name fragment matching [`score_band`].
#[must_use]
pub fn score_class(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => "excellent",
        80..=89 => "good",
        70..=79 => "fair",
        _ => "low",
    }
}

#[component]
pub fn SustainabilityScore(score: u8) -> impl IntoView {
    view! {
        <div class=format!("score score--{}", score_class(score))>
            <span class="score__value">{score}</span>
            <div class="score__detail">
                <span class="score__band">{score_band(score)}</span>
                <div class="progress-track">
                    <div class="progress-fill" style:width=format!("{score}%")></div>
                </div>
            </div>
        </div>
    }
}
