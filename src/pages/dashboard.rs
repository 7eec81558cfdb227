//! Dashboard Page
//!
//! Overview cards. Figures are fixed; no domain page feeds them.

use leptos::prelude::*;

use crate::components::StatCard;
use crate::context::use_locale;
use crate::format;

/// Overview figures are quoted in PKR; record tables use the configured prefix
const OVERVIEW_CURRENCY: &str = "PKR";

#[component]
pub fn Dashboard() -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="page dashboard">
            <header class="page-header">
                <h1>{move || locale.t("dashboard")}</h1>
                <p class="page-subtitle">{move || locale.t("welcome")}</p>
            </header>

            <div class="stat-grid">
                <StatCard
                    title_key="totalSales"
                    icon="🛒"
                    value=format::currency(OVERVIEW_CURRENCY, 125000.0)
                    change="+12.5%"
                    trend_up=true
                />
                <StatCard
                    title_key="inventoryItems"
                    icon="📦"
                    value=format::integer(342)
                    change="-2.3%"
                    trend_up=false
                />
                <StatCard
                    title_key="monthlyRevenue"
                    icon="💵"
                    value=format::currency(OVERVIEW_CURRENCY, 45000.0)
                    change="+8.1%"
                    trend_up=true
                />
                <StatCard
                    title_key="activeOrders"
                    icon="📊"
                    value=format::integer(12)
                    change="+3.2%"
                    trend_up=true
                />
            </div>

            <div class="panel-grid">
                <section class="card">
                    <h3>{move || locale.t("recentOrders")}</h3>
                    <p class="muted">{move || locale.t("comingSoon")}</p>
                </section>
                <section class="card">
                    <h3>{move || locale.t("inventoryStatus")}</h3>
                    <p class="muted">{move || locale.t("comingSoon")}</p>
                </section>
            </div>
        </div>
    }
}
