//! iCap Manager App
//!
//! Root component: sidebar, current page and toasts.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Sidebar, Toaster};
use crate::config::AppConfig;
use crate::context::LocaleContext;
use crate::pages::{render_page, Page};
use crate::store::{AppState, AppStateStoreFields, AppStore, ToastQueue};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    let locale = LocaleContext::provide(config.default_language);
    let store: AppStore = Store::new(AppState::new(Page::Dashboard));
    provide_context(store);
    provide_context(ToastQueue::new(store, config.toast_timeout_ms));
    provide_context(config);

    view! {
        <div
            class="app-layout"
            lang=move || locale.language().code()
            dir=move || locale.language().direction()
        >
            <Sidebar />
            <main class="main-content">
                {move || render_page(store.current_page().get())}
            </main>
            <Toaster />
        </div>
    }
}
