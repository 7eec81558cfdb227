//! UI Components
//!
//! Reusable Leptos components.

mod sidebar;
mod toaster;
mod stat_card;
mod record_form;
mod record_table;
mod delete_confirm_button;

pub use sidebar::Sidebar;
pub use toaster::Toaster;
pub use stat_card::StatCard;
pub use record_form::record_form;
pub use record_table::record_table;
pub use delete_confirm_button::DeleteConfirmButton;
