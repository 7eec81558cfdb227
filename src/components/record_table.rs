//! Record Table Component
//!
//! One row per record matching the search query, with edit/delete actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::config::use_config;
use crate::context::use_locale;
use crate::controller::RecordList;
use crate::models::Record;
use crate::notify::Notification;
use crate::store::use_toasts;

/// One rendered row. Used whole as the `For` key: positional ids can repeat,
/// so neither the id nor the position alone says which record a row shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRow {
    pub position: usize,
    pub id: u32,
    pub cells: Vec<String>,
}

pub fn table_rows<R: Record>(list: &RecordList<R>, query: &str, currency: &str) -> Vec<TableRow> {
    list.filtered(query, currency)
        .iter()
        .enumerate()
        .map(|(position, record)| TableRow {
            position,
            id: record.id(),
            cells: record.cells(currency),
        })
        .collect()
}

pub fn record_table<R: Record>(
    list: RwSignal<RecordList<R>>,
    query: ReadSignal<String>,
) -> impl IntoView {
    let locale = use_locale();
    let toasts = use_toasts();
    let currency = use_config().currency_prefix;

    let rows = Memo::new(move |_| {
        let query = query.get();
        list.with(|l| table_rows(l, &query, &currency))
    });

    view! {
        <table class="record-table">
            <thead>
                <tr>
                    {R::COLUMNS.iter().map(|column| {
                        let key = column.key;
                        view! { <th>{move || locale.t(key)}</th> }
                    }).collect_view()}
                    <th>{move || locale.t("actions")}</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || rows.with(|rows| rows.is_empty())>
                    <tr class="empty-row">
                        <td colspan={R::COLUMNS.len() + 1}>{move || locale.t("noRecords")}</td>
                    </tr>
                </Show>
                <For
                    each=move || rows.get()
                    key=|row: &TableRow| row.clone()
                    children=move |row: TableRow| {
                        let id = row.id;
                        view! {
                            <tr>
                                {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                <td class="row-actions">
                                    <button
                                        class="icon-btn edit-btn"
                                        title=move || locale.t("edit")
                                        on:click=move |_| {
                                            toasts.push(Notification::info("editNotAvailable"));
                                        }
                                    >
                                        "✎"
                                    </button>
                                    <DeleteConfirmButton on_confirm=Callback::new(move |_| {
                                        let mut sink = toasts;
                                        list.update(|l| {
                                            l.delete_record(id, &mut sink);
                                        });
                                    }) />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::IdPolicy;
    use crate::models::Reseller;

    fn add(list: &mut RecordList<Reseller>, name: &str, notices: &mut Vec<Notification>) {
        list.begin_add();
        list.update_draft_field("resellerName", name);
        list.update_draft_field("contact", "0300");
        list.update_draft_field("commission", "5");
        list.submit_add(notices).unwrap();
    }

    fn names(rows: &[TableRow]) -> Vec<&str> {
        rows.iter().map(|row| row.cells[0].as_str()).collect()
    }

    #[test]
    fn test_rows_follow_records_after_id_collision() {
        let mut list = RecordList::<Reseller>::new(Vec::new(), IdPolicy::Positional);
        let mut notices = Vec::new();
        add(&mut list, "A", &mut notices);
        add(&mut list, "B", &mut notices);
        add(&mut list, "C", &mut notices);
        list.delete_record(2, &mut notices);
        add(&mut list, "D", &mut notices);

        let before = table_rows(&list, "", "Rs.");
        assert_eq!(names(&before), vec!["A", "C", "D"]);
        assert_eq!(before.iter().map(|row| row.id).collect::<Vec<_>>(), vec![1, 3, 3]);

        list.delete_record(1, &mut notices);
        let after = table_rows(&list, "", "Rs.");
        assert_eq!(names(&after), vec!["C", "D"]);

        // (position 1, id 3) showed C before; D must get a fresh key
        assert_eq!((after[1].position, after[1].id), (1, 3));
        assert!(!before.contains(&after[1]));
    }

    #[test]
    fn test_rows_respect_query() {
        let list = RecordList::<Reseller>::seeded(IdPolicy::Positional);
        let rows = table_rows(&list, "malik", "Rs.");
        assert_eq!(names(&rows), vec!["Malik Enterprises"]);
        assert_eq!(rows[0].position, 0);
        assert_eq!(rows[0].cells[3], "Rs. 230,000");
    }
}
