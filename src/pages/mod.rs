//! Pages
//!
//! The overview page plus one record page per domain.

mod dashboard;
mod record_page;

pub use dashboard::Dashboard;
pub use record_page::record_page;

use leptos::prelude::*;

use crate::models::{Delivery, Domain, Expense, InventoryItem, PackagingItem, Reseller, Sale};

/// Page selection for the main area
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    Domain(Domain),
}

impl Page {
    /// Sidebar order
    pub fn all() -> Vec<Page> {
        std::iter::once(Page::Dashboard)
            .chain(Domain::ALL.into_iter().map(Page::Domain))
            .collect()
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Domain(domain) => domain.key(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "🏠",
            Page::Domain(Domain::Inventory) => "📦",
            Page::Domain(Domain::Expenses) => "💵",
            Page::Domain(Domain::Sales) => "🛒",
            Page::Domain(Domain::Packaging) => "🎁",
            Page::Domain(Domain::Delivery) => "🚚",
            Page::Domain(Domain::Resellers) => "🤝",
        }
    }
}

/// Render `page`. Record pages start fresh on every visit.
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <Dashboard /> }.into_any(),
        Page::Domain(Domain::Inventory) => record_page::<InventoryItem>().into_any(),
        Page::Domain(Domain::Expenses) => record_page::<Expense>().into_any(),
        Page::Domain(Domain::Sales) => record_page::<Sale>().into_any(),
        Page::Domain(Domain::Packaging) => record_page::<PackagingItem>().into_any(),
        Page::Domain(Domain::Delivery) => record_page::<Delivery>().into_any(),
        Page::Domain(Domain::Resellers) => record_page::<Reseller>().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_order() {
        let pages = Page::all();
        assert_eq!(pages.len(), 7);
        assert_eq!(pages[0], Page::Dashboard);
        assert_eq!(pages[6], Page::Domain(Domain::Resellers));
        assert_eq!(pages[3].title_key(), "sales");
    }
}
