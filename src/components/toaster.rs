//! Toaster Component
//!
//! Renders the store's toasts, translated at render time.

use leptos::prelude::*;

use crate::context::use_locale;
use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let locale = use_locale();
    let store = use_app_store();

    view! {
        <div class="toaster">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let notice = toast.notice;
                    view! {
                        <div class=notice.kind.css_class() role="status">
                            <div class="toast-body">
                                <strong class="toast-title">{move || locale.t(notice.title_key)}</strong>
                                <p class="toast-message">{move || locale.t(notice.message_key)}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
