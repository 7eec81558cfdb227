//! Record List Controller
//!
//! One in-memory collection plus its add-form draft. Instantiated once per
//! domain page; every operation is synchronous and reports its outcome to a
//! `Notifier`.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::{Draft, Record};
use crate::notify::{Notification, Notifier};

/// How new records get their identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// `size + 1` at insert time. Can reuse an id that is still present after a delete.
    #[default]
    Positional,
    /// One past the highest id ever seen by this list
    Monotonic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordList<R: Record> {
    records: Vec<R>,
    draft: Draft,
    composing: bool,
    policy: IdPolicy,
    high_water: u32,
}

impl<R: Record> RecordList<R> {
    pub fn new(records: Vec<R>, policy: IdPolicy) -> Self {
        let high_water = records.iter().map(Record::id).max().unwrap_or(0);
        Self {
            records,
            draft: Draft::new(),
            composing: false,
            policy,
            high_water,
        }
    }

    /// List pre-filled with the domain's sample rows
    pub fn seeded(policy: IdPolicy) -> Self {
        Self::new(R::seed(), policy)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn begin_add(&mut self) {
        self.composing = true;
    }

    pub fn update_draft_field(&mut self, field: &str, raw: impl Into<String>) {
        self.draft.set(field, raw);
    }

    pub fn cancel_add(&mut self) {
        self.composing = false;
        self.draft.clear();
    }

    /// Validate the draft and append it as a new record.
    ///
    /// On failure nothing changes except the error notification.
    pub fn submit_add(&mut self, notifier: &mut impl Notifier) -> Result<&R, ValidationError> {
        let record = match self.build_from_draft() {
            Ok(record) => record,
            Err(err) => {
                notifier.notify(Notification::from(&err));
                return Err(err);
            }
        };

        log::debug!("[{}] added record #{}", R::DOMAIN.key(), record.id());
        self.high_water = self.high_water.max(record.id());
        self.records.push(record);
        self.draft.clear();
        self.composing = false;
        notifier.notify(Notification::success(R::DOMAIN.added_key()));

        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Remove every record carrying `id`. A missing id is a silent no-op;
    /// the success notification is raised either way.
    pub fn delete_record(&mut self, id: u32, notifier: &mut impl Notifier) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        let removed = before - self.records.len();

        log::debug!("[{}] delete #{} removed {} record(s)", R::DOMAIN.key(), id, removed);
        notifier.notify(Notification::success(R::DOMAIN.deleted_key()));
        removed
    }

    /// Records whose rendered cells contain `query`, case-insensitively
    pub fn filtered(&self, query: &str, currency: &str) -> Vec<R> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|record| {
                record
                    .cells(currency)
                    .iter()
                    .any(|cell| cell.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    fn next_id(&self) -> u32 {
        match self.policy {
            IdPolicy::Positional => self.records.len() as u32 + 1,
            IdPolicy::Monotonic => self.high_water + 1,
        }
    }

    fn build_from_draft(&self) -> Result<R, ValidationError> {
        self.draft.check_required(R::FIELDS)?;
        R::from_draft(self.next_id(), &self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Delivery, Expense, FieldKind, FieldSpec, FieldValue, InventoryItem, PackagingItem,
        Reseller, Sale,
    };
    use crate::notify::NoticeKind;
    use rstest::rstest;

    fn sample_input(field: &FieldSpec) -> &'static str {
        match field.kind {
            FieldKind::Text => "sample",
            FieldKind::Date => "2024-02-01",
            FieldKind::Integer => "0",
            FieldKind::Decimal | FieldKind::Currency | FieldKind::Percent => " 12.5 ",
        }
    }

    fn fill_draft<R: Record>(list: &mut RecordList<R>) {
        for field in R::FIELDS {
            list.update_draft_field(field.key, sample_input(field));
        }
    }

    fn check_empty_field_rejected<R: Record>() {
        for skipped in R::FIELDS {
            let mut list = RecordList::<R>::seeded(IdPolicy::Positional);
            let before = list.records().to_vec();
            list.begin_add();
            fill_draft(&mut list);
            list.update_draft_field(skipped.key, "");

            let mut notices = Vec::new();
            let result = list.submit_add(&mut notices);

            assert_eq!(result.unwrap_err(), ValidationError::EmptyField(skipped.key));
            assert_eq!(list.records(), before.as_slice());
            assert!(list.is_composing());
            assert_eq!(notices, vec![Notification::error("fillAllFields")]);
        }
    }

    fn check_populated_draft_appended<R: Record>() {
        let mut list = RecordList::<R>::seeded(IdPolicy::Positional);
        let before = list.len();
        list.begin_add();
        fill_draft(&mut list);
        let expected: Vec<FieldValue> = R::FIELDS
            .iter()
            .map(|field| list.draft().coerce(field).unwrap())
            .collect();

        let mut notices = Vec::new();
        let added = list.submit_add(&mut notices).unwrap().clone();

        assert_eq!(list.len(), before + 1);
        assert_eq!(added.id() as usize, before + 1);
        for (field, value) in R::FIELDS.iter().zip(expected) {
            assert_eq!(added.value(field.key), Some(value), "{}", field.key);
        }
        assert_eq!(list.records().last(), Some(&added));
        assert!(!list.is_composing());
        assert!(list.draft().is_empty());
        assert_eq!(notices, vec![Notification::success(R::DOMAIN.added_key())]);
    }

    #[rstest]
    #[case::inventory(check_empty_field_rejected::<InventoryItem> as fn())]
    #[case::expenses(check_empty_field_rejected::<Expense> as fn())]
    #[case::sales(check_empty_field_rejected::<Sale> as fn())]
    #[case::packaging(check_empty_field_rejected::<PackagingItem> as fn())]
    #[case::delivery(check_empty_field_rejected::<Delivery> as fn())]
    #[case::resellers(check_empty_field_rejected::<Reseller> as fn())]
    fn test_submit_with_empty_field_is_rejected(#[case] check: fn()) {
        check();
    }

    #[rstest]
    #[case::inventory(check_populated_draft_appended::<InventoryItem> as fn())]
    #[case::expenses(check_populated_draft_appended::<Expense> as fn())]
    #[case::sales(check_populated_draft_appended::<Sale> as fn())]
    #[case::packaging(check_populated_draft_appended::<PackagingItem> as fn())]
    #[case::delivery(check_populated_draft_appended::<Delivery> as fn())]
    #[case::resellers(check_populated_draft_appended::<Reseller> as fn())]
    fn test_submit_with_populated_draft_appends(#[case] check: fn()) {
        check();
    }

    #[test]
    fn test_untouched_draft_is_rejected() {
        let mut list = RecordList::<Reseller>::seeded(IdPolicy::Positional);
        let mut notices = Vec::new();
        assert!(list.submit_add(&mut notices).is_err());
        assert_eq!(list.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::Error);
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        let mut list = RecordList::<InventoryItem>::seeded(IdPolicy::Positional);
        list.update_draft_field("itemName", "Bucket Hat");
        list.update_draft_field("quantity", "ten");
        list.update_draft_field("price", "500");
        list.update_draft_field("reorderPoint", "5");

        let mut notices = Vec::new();
        let err = list.submit_add(&mut notices).unwrap_err();

        assert_eq!(err.field(), "quantity");
        assert_eq!(list.len(), 2);
        assert_eq!(list.draft().get("quantity"), "ten");
        assert_eq!(notices, vec![Notification::error("invalidNumber")]);
    }

    #[test]
    fn test_delete_existing_record() {
        let mut list = RecordList::<Reseller>::seeded(IdPolicy::Positional);
        let mut notices = Vec::new();

        assert_eq!(list.delete_record(1, &mut notices), 1);

        assert_eq!(list.len(), 1);
        assert_eq!(list.records()[0].name, "Malik Enterprises");
        assert_eq!(notices, vec![Notification::success("resellerDeleted")]);
    }

    #[test]
    fn test_delete_missing_record_still_notifies() {
        let mut list = RecordList::<Expense>::seeded(IdPolicy::Positional);
        let before = list.records().to_vec();
        let mut notices = Vec::new();

        assert_eq!(list.delete_record(99, &mut notices), 0);

        assert_eq!(list.records(), before.as_slice());
        assert_eq!(notices, vec![Notification::success("expenseDeleted")]);
    }

    #[test]
    fn test_positional_ids_collide_after_delete() {
        let mut list = RecordList::<Reseller>::seeded(IdPolicy::Positional);
        let mut notices = Vec::new();

        list.delete_record(1, &mut notices);
        assert_eq!(list.records().iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);

        list.begin_add();
        list.update_draft_field("resellerName", "Raza Traders");
        list.update_draft_field("contact", "+92 333 5550000");
        list.update_draft_field("commission", "10");
        let new_id = list.submit_add(&mut notices).unwrap().id;

        assert_eq!(new_id, 2);
        assert_eq!(list.records().iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 2]);

        // both rows carry id 2, so one delete takes both
        assert_eq!(list.delete_record(2, &mut notices), 2);
        assert!(list.is_empty());
    }

    #[test]
    fn test_monotonic_ids_never_collide() {
        let mut list = RecordList::<Reseller>::seeded(IdPolicy::Monotonic);
        let mut notices = Vec::new();

        list.delete_record(2, &mut notices);
        list.update_draft_field("resellerName", "Raza Traders");
        list.update_draft_field("contact", "+92 333 5550000");
        list.update_draft_field("commission", "10");
        let new_id = list.submit_add(&mut notices).unwrap().id;

        assert_eq!(new_id, 3);
        assert_eq!(list.records().iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut list = RecordList::<Delivery>::seeded(IdPolicy::Positional);
        list.begin_add();
        assert!(list.is_composing());
        list.update_draft_field("customer", "Bilal");

        list.cancel_add();

        assert!(!list.is_composing());
        assert!(list.draft().is_empty());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_begin_add_leaves_records_alone() {
        let mut list = RecordList::<Sale>::seeded(IdPolicy::Positional);
        let before = list.records().to_vec();
        list.begin_add();
        list.update_draft_field("customer", "Bilal");
        assert_eq!(list.records(), before.as_slice());
        assert_eq!(list.draft().get("customer"), "Bilal");
    }

    #[rstest]
    #[case("", 2)]
    #[case("ahmed", 1)]
    #[case("15%", 1)]
    #[case("230,000", 1)]
    #[case("nobody", 0)]
    fn test_filtered(#[case] query: &str, #[case] expected: usize) {
        let list = RecordList::<Reseller>::seeded(IdPolicy::Positional);
        assert_eq!(list.filtered(query, "Rs.").len(), expected);
    }
}
