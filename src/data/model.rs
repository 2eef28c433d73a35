use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// SaleRecord – one cleaned row of the point-of-sale export
// ---------------------------------------------------------------------------

/// A single product line item after cleaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRecord {
    /// Row id taken from the export's unnamed index column.
    pub id: i64,
    pub date: NaiveDate,
    pub product: String,
    pub quantity: f64,
    /// Unit price in euros, never negative.
    pub unit_price: f64,
    /// `quantity * unit_price`, never zero for a retained record.
    pub sales: f64,
    /// Columns the dashboard does not interpret (`time`, `ticket_number`, ...).
    #[serde(skip)]
    pub extra: BTreeMap<String, String>,
}

impl SaleRecord {
    /// Build a record, deriving `sales` from quantity and unit price.
    pub fn new(
        id: i64,
        date: NaiveDate,
        product: impl Into<String>,
        quantity: f64,
        unit_price: f64,
    ) -> Self {
        SaleRecord {
            id,
            date,
            product: product.into(),
            quantity,
            unit_price,
            sales: quantity * unit_price,
            extra: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// SalesTable – the complete cleaned table
// ---------------------------------------------------------------------------

/// The cleaned table with its product index.
#[derive(Debug, Clone, Default)]
pub struct SalesTable {
    /// All retained records, in file order.
    pub records: Vec<SaleRecord>,
    /// Distinct product names in order of first appearance.
    pub products: Vec<String>,
}

impl SalesTable {
    /// Build the product index from the cleaned records.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut products = Vec::new();
        for rec in &records {
            if seen.insert(rec.product.as_str()) {
                products.push(rec.product.clone());
            }
        }
        SalesTable { records, products }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve row indices (as produced by the filter) into records.
    pub fn rows(&self, indices: &[usize]) -> Vec<&SaleRecord> {
        indices.iter().filter_map(|&i| self.records.get(i)).collect()
    }
}
