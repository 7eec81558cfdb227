//! Sidebar Component
//!
//! Collapsible navigation listing every page, plus the language toggle.

use leptos::prelude::*;

use crate::context::use_locale;
use crate::pages::Page;
use crate::store::{store_show_page, store_toggle_sidebar, use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let locale = use_locale();
    let store = use_app_store();
    let collapsed = move || store.sidebar_collapsed().get();

    view! {
        <aside class=move || if collapsed() { "sidebar collapsed" } else { "sidebar" }>
            <div class="sidebar-header">
                <Show when=move || !collapsed()>
                    <h1 class="sidebar-title">{move || locale.t("appName")}</h1>
                </Show>
                <button
                    class="sidebar-toggle"
                    title=move || locale.t("toggleSidebar")
                    on:click=move |_| store_toggle_sidebar(&store)
                >
                    "☰"
                </button>
            </div>

            <nav class="sidebar-nav">
                {Page::all().into_iter().map(|page| {
                    let is_active = move || store.current_page().get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |_| store_show_page(&store, page)
                        >
                            <span class="nav-icon">{page.icon()}</span>
                            <Show when=move || !collapsed()>
                                <span class="nav-label">{move || locale.t(page.title_key())}</span>
                            </Show>
                        </button>
                    }
                }).collect_view()}
            </nav>

            <button class="language-toggle" on:click=move |_| locale.toggle()>
                {move || locale.t("switchLanguage")}
            </button>
        </aside>
    }
}
