//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds shell state
//! only; record collections stay with their pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::notify::{Notification, Notifier};
use crate::pages::Page;

/// A notification on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notification,
}

/// Shell state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Page shown in the main area
    pub current_page: Page,
    /// Sidebar shows icons only
    pub sidebar_collapsed: bool,
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Last toast id handed out
    pub last_toast_id: u32,
}

impl AppState {
    pub fn new(page: Page) -> Self {
        Self {
            current_page: page,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch the main area to `page`
pub fn store_show_page(store: &AppStore, page: Page) {
    log::info!("[shell] page -> {:?}", page);
    store.current_page().set(page);
}

pub fn store_toggle_sidebar(store: &AppStore) {
    store.sidebar_collapsed().update(|collapsed| *collapsed = !*collapsed);
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// Notifier that shows toasts and dismisses them after a timeout
#[derive(Clone, Copy)]
pub struct ToastQueue {
    store: AppStore,
    timeout_ms: u32,
}

impl ToastQueue {
    pub fn new(store: AppStore, timeout_ms: u32) -> Self {
        Self { store, timeout_ms }
    }

    pub fn push(&self, notice: Notification) -> u32 {
        let store = self.store;
        store.last_toast_id().update(|id| *id += 1);
        let id = store.last_toast_id().get_untracked();
        store.toasts().write().push(Toast { id, notice });

        #[cfg(target_arch = "wasm32")]
        gloo_timers::callback::Timeout::new(self.timeout_ms, move || {
            store_dismiss_toast(&store, id);
        })
        .forget();

        id
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notice: Notification) {
        self.push(notice);
    }
}

/// Get the toast queue from context
pub fn use_toasts() -> ToastQueue {
    expect_context::<ToastQueue>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{IdPolicy, RecordList};
    use crate::models::{Domain, Reseller};

    #[test]
    fn test_toasts_get_increasing_ids_and_dismiss() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new(Page::Dashboard));
            let toasts = ToastQueue::new(store, 3000);

            let first = toasts.push(Notification::success("itemAdded"));
            let second = toasts.push(Notification::error("fillAllFields"));
            assert_eq!((first, second), (1, 2));
            assert_eq!(store.toasts().get_untracked().len(), 2);

            store_dismiss_toast(&store, first);
            let remaining = store.toasts().get_untracked();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].notice, Notification::error("fillAllFields"));
        });
    }

    #[test]
    fn test_controller_reports_through_toast_queue() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new(Page::Dashboard));
            let mut toasts = ToastQueue::new(store, 3000);
            let mut list = RecordList::<Reseller>::seeded(IdPolicy::Positional);

            list.delete_record(42, &mut toasts);

            assert_eq!(
                store.toasts().get_untracked()[0].notice,
                Notification::success("resellerDeleted")
            );
        });
    }

    #[test]
    fn test_shell_helpers() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new(Page::Dashboard));
            store_show_page(&store, Page::Domain(Domain::Sales));
            store_toggle_sidebar(&store);

            assert_eq!(store.current_page().get_untracked(), Page::Domain(Domain::Sales));
            assert!(store.sidebar_collapsed().get_untracked());
        });
    }
}
