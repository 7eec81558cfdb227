//! Stat Card Component

use leptos::prelude::*;

use crate::context::use_locale;

/// Dashboard figure with a trend badge
#[component]
pub fn StatCard(
    title_key: &'static str,
    icon: &'static str,
    #[prop(into)] value: String,
    change: &'static str,
    trend_up: bool,
) -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="card stat-card">
            <div class="stat-card-header">
                <span class="stat-icon">{icon}</span>
                <span class=if trend_up { "stat-change up" } else { "stat-change down" }>{change}</span>
            </div>
            <h3 class="stat-title">{move || locale.t(title_key)}</h3>
            <p class="stat-value">{value}</p>
        </div>
    }
}
