//! Frontend Models
//!
//! Record types for the six business domains, plus the draft they are built from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::format;

/// Business area owning one record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Inventory,
    Expenses,
    Sales,
    Packaging,
    Delivery,
    Resellers,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Inventory,
        Domain::Expenses,
        Domain::Sales,
        Domain::Packaging,
        Domain::Delivery,
        Domain::Resellers,
    ];

    /// Page title key, also used as the log target suffix
    pub fn key(self) -> &'static str {
        match self {
            Domain::Inventory => "inventory",
            Domain::Expenses => "expenses",
            Domain::Sales => "sales",
            Domain::Packaging => "packaging",
            Domain::Delivery => "delivery",
            Domain::Resellers => "resellers",
        }
    }

    pub fn list_key(self) -> &'static str {
        match self {
            Domain::Inventory => "inventoryItems",
            Domain::Expenses => "expensesList",
            Domain::Sales => "salesList",
            Domain::Packaging => "packagingList",
            Domain::Delivery => "deliveriesList",
            Domain::Resellers => "resellersList",
        }
    }

    pub fn add_key(self) -> &'static str {
        match self {
            Domain::Inventory => "addItem",
            Domain::Expenses => "addExpense",
            Domain::Sales => "newSale",
            Domain::Packaging => "addPackaging",
            Domain::Delivery => "addDelivery",
            Domain::Resellers => "addReseller",
        }
    }

    /// Heading of the add form
    pub fn form_title_key(self) -> &'static str {
        match self {
            Domain::Resellers => "addNewReseller",
            other => other.add_key(),
        }
    }

    pub fn added_key(self) -> &'static str {
        match self {
            Domain::Inventory => "itemAdded",
            Domain::Expenses => "expenseAdded",
            Domain::Sales => "saleAdded",
            Domain::Packaging => "packagingAdded",
            Domain::Delivery => "deliveryAdded",
            Domain::Resellers => "resellerAdded",
        }
    }

    pub fn deleted_key(self) -> &'static str {
        match self {
            Domain::Inventory => "itemDeleted",
            Domain::Expenses => "expenseDeleted",
            Domain::Sales => "saleDeleted",
            Domain::Packaging => "packagingDeleted",
            Domain::Delivery => "deliveryDeleted",
            Domain::Resellers => "resellerDeleted",
        }
    }
}

/// How a field is entered, coerced and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Integer,
    Decimal,
    Currency,
    Percent,
}

impl FieldKind {
    pub fn is_numeric(self) -> bool {
        !matches!(self, FieldKind::Text | FieldKind::Date)
    }

    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Date => "date",
            _ => "number",
        }
    }
}

/// One attribute of a record. `key` is also its translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(key: &'static str, kind: FieldKind) -> Self {
        Self { key, kind }
    }
}

/// Coerced field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl FieldValue {
    pub fn display(&self, kind: FieldKind, currency: &str) -> String {
        match (self, kind) {
            (FieldValue::Text(text), _) => text.clone(),
            (FieldValue::Integer(value), _) => format::integer(*value),
            (FieldValue::Decimal(value), FieldKind::Currency) => format::currency(currency, *value),
            (FieldValue::Decimal(value), FieldKind::Percent) => format::percent(*value),
            (FieldValue::Decimal(value), _) => format::number(*value),
        }
    }
}

/// Not-yet-submitted form state: field key -> raw input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    values: BTreeMap<String, String>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, raw: impl Into<String>) {
        self.values.insert(field.to_string(), raw.into());
    }

    /// Raw input for `field`, empty when never set
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// First required field left empty, in form order
    pub fn check_required(&self, fields: &[FieldSpec]) -> Result<(), ValidationError> {
        match fields.iter().find(|field| self.get(field.key).is_empty()) {
            Some(field) => Err(ValidationError::EmptyField(field.key)),
            None => Ok(()),
        }
    }

    pub fn coerce(&self, field: &FieldSpec) -> Result<FieldValue, ValidationError> {
        match field.kind {
            FieldKind::Text | FieldKind::Date => self.text(field.key).map(FieldValue::Text),
            FieldKind::Integer => self.integer(field.key).map(FieldValue::Integer),
            FieldKind::Decimal | FieldKind::Currency | FieldKind::Percent => {
                self.decimal(field.key).map(FieldValue::Decimal)
            }
        }
    }

    pub fn text(&self, field: &'static str) -> Result<String, ValidationError> {
        let raw = self.get(field);
        if raw.is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
        Ok(raw.to_string())
    }

    pub fn integer(&self, field: &'static str) -> Result<i64, ValidationError> {
        let raw = self.text(field)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::NotANumber { field, value: raw })
    }

    pub fn decimal(&self, field: &'static str) -> Result<f64, ValidationError> {
        let raw = self.text(field)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ValidationError::NotANumber { field, value: raw }),
        }
    }
}

/// A domain record held by a `RecordList`
pub trait Record: Clone + std::fmt::Debug + PartialEq + Send + Sync + 'static {
    const DOMAIN: Domain;
    /// Draft fields, all required, in form order
    const FIELDS: &'static [FieldSpec];
    /// Table columns, in display order
    const COLUMNS: &'static [FieldSpec] = Self::FIELDS;

    fn id(&self) -> u32;

    fn from_draft(id: u32, draft: &Draft) -> Result<Self, ValidationError>;

    fn value(&self, field: &str) -> Option<FieldValue>;

    /// Rows a freshly opened page starts with
    fn seed() -> Vec<Self>;

    fn cells(&self, currency: &str) -> Vec<String> {
        Self::COLUMNS
            .iter()
            .map(|column| {
                self.value(column.key)
                    .map(|value| value.display(column.kind, currency))
                    .unwrap_or_default()
            })
            .collect()
    }
}

// ========================
// Inventory
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub reorder_point: i64,
}

impl Record for InventoryItem {
    const DOMAIN: Domain = Domain::Inventory;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("itemName", FieldKind::Text),
        FieldSpec::new("quantity", FieldKind::Integer),
        FieldSpec::new("price", FieldKind::Currency),
        FieldSpec::new("reorderPoint", FieldKind::Integer),
    ];

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: &Draft) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: draft.text("itemName")?,
            quantity: draft.integer("quantity")?,
            unit_price: draft.decimal("price")?,
            reorder_point: draft.integer("reorderPoint")?,
        })
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "itemName" => Some(FieldValue::Text(self.name.clone())),
            "quantity" => Some(FieldValue::Integer(self.quantity)),
            "price" => Some(FieldValue::Decimal(self.unit_price)),
            "reorderPoint" => Some(FieldValue::Integer(self.reorder_point)),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            InventoryItem {
                id: 1,
                name: "Baseball Cap - Black".to_string(),
                quantity: 120,
                unit_price: 850.0,
                reorder_point: 30,
            },
            InventoryItem {
                id: 2,
                name: "Snapback Cap - Navy".to_string(),
                quantity: 18,
                unit_price: 1200.0,
                reorder_point: 20,
            },
        ]
    }
}

// ========================
// Expenses
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u32,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
}

impl Record for Expense {
    const DOMAIN: Domain = Domain::Expenses;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("category", FieldKind::Text),
        FieldSpec::new("description", FieldKind::Text),
        FieldSpec::new("amount", FieldKind::Currency),
        FieldSpec::new("date", FieldKind::Date),
    ];

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: &Draft) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            category: draft.text("category")?,
            description: draft.text("description")?,
            amount: draft.decimal("amount")?,
            date: draft.text("date")?,
        })
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "category" => Some(FieldValue::Text(self.category.clone())),
            "description" => Some(FieldValue::Text(self.description.clone())),
            "amount" => Some(FieldValue::Decimal(self.amount)),
            "date" => Some(FieldValue::Text(self.date.clone())),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Expense {
                id: 1,
                category: "Raw Materials".to_string(),
                description: "Cotton twill fabric".to_string(),
                amount: 45000.0,
                date: "2024-01-15".to_string(),
            },
            Expense {
                id: 2,
                category: "Utilities".to_string(),
                description: "Workshop electricity bill".to_string(),
                amount: 12500.0,
                date: "2024-01-20".to_string(),
            },
        ]
    }
}

// ========================
// Sales
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: u32,
    pub customer: String,
    pub product: String,
    pub quantity: i64,
    pub total: f64,
    pub date: String,
}

impl Record for Sale {
    const DOMAIN: Domain = Domain::Sales;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("customer", FieldKind::Text),
        FieldSpec::new("product", FieldKind::Text),
        FieldSpec::new("quantity", FieldKind::Integer),
        FieldSpec::new("total", FieldKind::Currency),
        FieldSpec::new("saleDate", FieldKind::Date),
    ];

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: &Draft) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            customer: draft.text("customer")?,
            product: draft.text("product")?,
            quantity: draft.integer("quantity")?,
            total: draft.decimal("total")?,
            date: draft.text("saleDate")?,
        })
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "customer" => Some(FieldValue::Text(self.customer.clone())),
            "product" => Some(FieldValue::Text(self.product.clone())),
            "quantity" => Some(FieldValue::Integer(self.quantity)),
            "total" => Some(FieldValue::Decimal(self.total)),
            "saleDate" => Some(FieldValue::Text(self.date.clone())),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Sale {
                id: 1,
                customer: "Ali Khan".to_string(),
                product: "Baseball Cap - Black".to_string(),
                quantity: 10,
                total: 8500.0,
                date: "2024-01-18".to_string(),
            },
            Sale {
                id: 2,
                customer: "Sara Ahmed".to_string(),
                product: "Snapback Cap - Navy".to_string(),
                quantity: 4,
                total: 4800.0,
                date: "2024-01-22".to_string(),
            },
        ]
    }
}

// ========================
// Packaging
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagingItem {
    pub id: u32,
    pub packaging_type: String,
    pub materials: String,
    pub quantity: i64,
    pub unit_cost: f64,
}

impl Record for PackagingItem {
    const DOMAIN: Domain = Domain::Packaging;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("packagingType", FieldKind::Text),
        FieldSpec::new("materials", FieldKind::Text),
        FieldSpec::new("quantity", FieldKind::Integer),
        FieldSpec::new("price", FieldKind::Currency),
    ];

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: &Draft) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            packaging_type: draft.text("packagingType")?,
            materials: draft.text("materials")?,
            quantity: draft.integer("quantity")?,
            unit_cost: draft.decimal("price")?,
        })
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "packagingType" => Some(FieldValue::Text(self.packaging_type.clone())),
            "materials" => Some(FieldValue::Text(self.materials.clone())),
            "quantity" => Some(FieldValue::Integer(self.quantity)),
            "price" => Some(FieldValue::Decimal(self.unit_cost)),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            PackagingItem {
                id: 1,
                packaging_type: "Printed Box".to_string(),
                materials: "Cardboard".to_string(),
                quantity: 500,
                unit_cost: 25.0,
            },
            PackagingItem {
                id: 2,
                packaging_type: "Poly Bag".to_string(),
                materials: "Plastic".to_string(),
                quantity: 1000,
                unit_cost: 4.5,
            },
        ]
    }
}

// ========================
// Delivery
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: u32,
    pub customer: String,
    pub address: String,
    pub tracking_number: String,
    pub status: String,
}

impl Record for Delivery {
    const DOMAIN: Domain = Domain::Delivery;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("customer", FieldKind::Text),
        FieldSpec::new("address", FieldKind::Text),
        FieldSpec::new("trackingNumber", FieldKind::Text),
        FieldSpec::new("deliveryStatus", FieldKind::Text),
    ];

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: &Draft) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            customer: draft.text("customer")?,
            address: draft.text("address")?,
            tracking_number: draft.text("trackingNumber")?,
            status: draft.text("deliveryStatus")?,
        })
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "customer" => Some(FieldValue::Text(self.customer.clone())),
            "address" => Some(FieldValue::Text(self.address.clone())),
            "trackingNumber" => Some(FieldValue::Text(self.tracking_number.clone())),
            "deliveryStatus" => Some(FieldValue::Text(self.status.clone())),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Delivery {
                id: 1,
                customer: "Ali Khan".to_string(),
                address: "House 12, Gulberg III, Lahore".to_string(),
                tracking_number: "TCS-102938".to_string(),
                status: "In Transit".to_string(),
            },
            Delivery {
                id: 2,
                customer: "Sara Ahmed".to_string(),
                address: "Flat 4, Block 5, Clifton, Karachi".to_string(),
                tracking_number: "LCS-556677".to_string(),
                status: "Delivered".to_string(),
            },
        ]
    }
}

// ========================
// Resellers
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reseller {
    pub id: u32,
    pub name: String,
    pub contact: String,
    pub commission: f64,
    pub total_sales: f64,
}

impl Record for Reseller {
    const DOMAIN: Domain = Domain::Resellers;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("resellerName", FieldKind::Text),
        FieldSpec::new("contact", FieldKind::Text),
        FieldSpec::new("commission", FieldKind::Percent),
    ];
    const COLUMNS: &'static [FieldSpec] = &[
        FieldSpec::new("resellerName", FieldKind::Text),
        FieldSpec::new("contact", FieldKind::Text),
        FieldSpec::new("commission", FieldKind::Percent),
        FieldSpec::new("totalSales", FieldKind::Currency),
    ];

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: &Draft) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: draft.text("resellerName")?,
            contact: draft.text("contact")?,
            commission: draft.decimal("commission")?,
            total_sales: 0.0,
        })
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "resellerName" => Some(FieldValue::Text(self.name.clone())),
            "contact" => Some(FieldValue::Text(self.contact.clone())),
            "commission" => Some(FieldValue::Decimal(self.commission)),
            "totalSales" => Some(FieldValue::Decimal(self.total_sales)),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Reseller {
                id: 1,
                name: "Ahmed Trading".to_string(),
                contact: "+92 300 1234567".to_string(),
                commission: 15.0,
                total_sales: 150000.0,
            },
            Reseller {
                id: 2,
                name: "Malik Enterprises".to_string(),
                contact: "+92 321 9876543".to_string(),
                commission: 12.0,
                total_sales: 230000.0,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reseller_draft(name: &str, contact: &str, commission: &str) -> Draft {
        let mut draft = Draft::new();
        draft.set("resellerName", name);
        draft.set("contact", contact);
        draft.set("commission", commission);
        draft
    }

    #[test]
    fn test_check_required_reports_first_empty_field() {
        let draft = reseller_draft("Ahmed Trading", "", "");
        assert_eq!(
            draft.check_required(Reseller::FIELDS),
            Err(ValidationError::EmptyField("contact"))
        );
    }

    #[test]
    fn test_zero_is_not_empty() {
        let draft = reseller_draft("Ahmed Trading", "+92 300 1234567", "0");
        assert!(draft.check_required(Reseller::FIELDS).is_ok());
        let reseller = Reseller::from_draft(3, &draft).unwrap();
        assert_eq!(reseller.commission, 0.0);
        assert_eq!(reseller.total_sales, 0.0);
    }

    #[rstest]
    #[case(" 12 ", 12)]
    #[case("0", 0)]
    #[case("-5", -5)]
    fn test_integer_coercion(#[case] raw: &str, #[case] expected: i64) {
        let mut draft = Draft::new();
        draft.set("quantity", raw);
        assert_eq!(draft.integer("quantity"), Ok(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("NaN")]
    #[case("inf")]
    #[case("   ")]
    fn test_decimal_rejects_non_numbers(#[case] raw: &str) {
        let mut draft = Draft::new();
        draft.set("price", raw);
        assert_eq!(
            draft.decimal("price"),
            Err(ValidationError::NotANumber { field: "price", value: raw.to_string() })
        );
    }

    #[test]
    fn test_reseller_cells() {
        let reseller = &Reseller::seed()[0];
        assert_eq!(
            reseller.cells("Rs."),
            vec!["Ahmed Trading", "+92 300 1234567", "15%", "Rs. 150,000"]
        );
    }

    #[test]
    fn test_inventory_cells() {
        let item = &InventoryItem::seed()[0];
        assert_eq!(item.cells("Rs."), vec!["Baseball Cap - Black", "120", "Rs. 850", "30"]);
    }

    #[test]
    fn test_seed_ids_are_positional() {
        fn check<R: Record>() {
            for (index, record) in R::seed().iter().enumerate() {
                assert_eq!(record.id() as usize, index + 1, "{:?}", R::DOMAIN);
            }
        }
        check::<InventoryItem>();
        check::<Expense>();
        check::<Sale>();
        check::<PackagingItem>();
        check::<Delivery>();
        check::<Reseller>();
    }

    #[test]
    fn test_every_column_has_a_value() {
        fn check<R: Record>() {
            for record in R::seed() {
                for column in R::COLUMNS {
                    assert!(record.value(column.key).is_some(), "{:?}.{}", R::DOMAIN, column.key);
                }
            }
        }
        check::<InventoryItem>();
        check::<Expense>();
        check::<Sale>();
        check::<PackagingItem>();
        check::<Delivery>();
        check::<Reseller>();
    }

    #[test]
    fn test_form_titles_are_translated() {
        use crate::i18n::{Language, TranslationTable};

        let table = TranslationTable::builtin();
        assert_eq!(
            table.get(Language::English, Domain::Resellers.form_title_key()),
            Some("Add New Reseller")
        );
        assert_eq!(Domain::Inventory.form_title_key(), "addItem");
        for domain in Domain::ALL {
            assert!(table.get(Language::Urdu, domain.form_title_key()).is_some(), "{:?}", domain);
        }
    }
}
