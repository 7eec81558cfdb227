//! Record Page
//!
//! Header, search, add form and table for one domain. The page owns its
//! collection; leaving the page drops it.

use leptos::prelude::*;

use crate::components::{record_form, record_table};
use crate::config::use_config;
use crate::context::use_locale;
use crate::controller::RecordList;
use crate::models::Record;

pub fn record_page<R: Record>() -> impl IntoView {
    let config = use_config();
    let locale = use_locale();
    let domain = R::DOMAIN;

    let list = RwSignal::new(RecordList::<R>::seeded(config.id_policy));
    let (query, set_query) = signal(String::new());

    view! {
        <div class="page record-page">
            <header class="page-header">
                <h1>{move || locale.t(domain.key())}</h1>
                <p class="page-subtitle">{move || locale.t("managementSystem")}</p>
            </header>

            <section class="card">
                <div class="card-toolbar">
                    <h2>{move || locale.t(domain.list_key())}</h2>
                    <input
                        type="search"
                        class="search-input"
                        placeholder=move || locale.t("search")
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <button class="primary" on:click=move |_| list.update(|l| l.begin_add())>
                        "＋ " {move || locale.t(domain.add_key())}
                    </button>
                </div>

                <Show when=move || list.with(|l| l.is_composing())>
                    {record_form(list)}
                </Show>

                {record_table(list, query)}
            </section>
        </div>
    }
}
