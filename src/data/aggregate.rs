use std::collections::BTreeMap;

use super::model::SaleRecord;

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

/// Transaction count, quantity and sales over a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalesMetrics {
    pub transaction_count: usize,
    pub total_quantity: f64,
    pub total_sales: f64,
}

impl SalesMetrics {
    /// Total sales with two decimals, as displayed.
    pub fn total_sales_display(&self) -> String {
        format!("{:.2}", self.total_sales)
    }
}

/// Compute the headline metrics. An empty input gives all zeros.
pub fn sales_metrics(rows: &[&SaleRecord]) -> SalesMetrics {
    if rows.is_empty() {
        return SalesMetrics {
            transaction_count: 0,
            total_quantity: 0.0,
            total_sales: 0.0,
        };
    }
    SalesMetrics {
        transaction_count: rows.len(),
        total_quantity: rows.iter().map(|r| r.quantity).sum(),
        total_sales: rows.iter().map(|r| r.sales).sum(),
    }
}

// ---------------------------------------------------------------------------
// Sales grouped by product
// ---------------------------------------------------------------------------

/// Total sales of one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    pub product: String,
    pub total_sales: f64,
}

/// Sum sales per product, sorted by ascending total (ties by name).
/// Only products that appear in `rows` are present.
pub fn sales_by_product(rows: &[&SaleRecord]) -> Vec<ProductSales> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for rec in rows {
        *totals.entry(rec.product.as_str()).or_default() += rec.sales;
    }
    let mut grouped: Vec<ProductSales> = totals
        .into_iter()
        .map(|(product, total_sales)| ProductSales {
            product: product.to_string(),
            total_sales,
        })
        .collect();
    // BTreeMap order makes the sort stable on names for equal totals.
    grouped.sort_by(|a, b| a.total_sales.total_cmp(&b.total_sales));
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn record(product: &str, quantity: f64, unit_price: f64) -> SaleRecord {
        let day = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
        SaleRecord::new(0, day, product, quantity, unit_price)
    }

    #[test]
    fn empty_input_is_all_zero() {
        let metrics = sales_metrics(&[]);
        assert_eq!(metrics.transaction_count, 0);
        assert_eq!(metrics.total_quantity, 0.0);
        assert_eq!(metrics.total_sales, 0.0);
        assert_eq!(metrics.total_sales_display(), "0.00");
        assert!(sales_by_product(&[]).is_empty());
    }

    #[test]
    fn sums_quantity_and_sales() {
        let records = vec![
            record("Croissant", 2.0, 1.10),
            record("BAGUETTE", 3.0, 0.90),
            record("Croissant", 1.0, 1.10),
        ];
        let rows: Vec<&SaleRecord> = records.iter().collect();
        let metrics = sales_metrics(&rows);
        assert_eq!(metrics.transaction_count, 3);
        assert_eq!(metrics.total_quantity, 6.0);
        assert_eq!(metrics.total_sales_display(), "6.00");
    }

    #[test]
    fn groups_ascending_by_total() {
        let records = vec![
            record("Croissant", 2.0, 1.10),
            record("BAGUETTE", 1.0, 0.90),
            record("TARTELETTE", 1.0, 2.00),
            record("Croissant", 1.0, 1.10),
        ];
        let rows: Vec<&SaleRecord> = records.iter().collect();
        let grouped = sales_by_product(&rows);
        let names: Vec<&str> = grouped.iter().map(|g| g.product.as_str()).collect();
        assert_eq!(names, vec!["BAGUETTE", "TARTELETTE", "Croissant"]);
        assert!((grouped[2].total_sales - 3.30).abs() < 1e-9);
    }

    #[test]
    fn equal_totals_are_ordered_by_name() {
        let records = vec![record("COUPE", 1.0, 1.0), record("BOULE", 1.0, 1.0)];
        let rows: Vec<&SaleRecord> = records.iter().collect();
        let names: Vec<String> = sales_by_product(&rows).into_iter().map(|g| g.product).collect();
        assert_eq!(names, vec!["BOULE", "COUPE"]);
    }

    fn records_strategy() -> impl Strategy<Value = Vec<SaleRecord>> {
        let names = prop::sample::select(vec!["BAGUETTE", "Croissant", "COUPE", "BOULE 400G"]);
        prop::collection::vec((names, 1u32..20, 1u32..1000), 0..50).prop_map(|rows| {
            rows.into_iter()
                .map(|(p, q, cents)| record(p, q as f64, cents as f64 / 100.0))
                .collect()
        })
    }

    proptest! {
        /// Grouped totals are ascending and add up to the headline total.
        #[test]
        fn grouped_totals_match_metrics(records in records_strategy()) {
            let rows: Vec<&SaleRecord> = records.iter().collect();
            let grouped = sales_by_product(&rows);
            let metrics = sales_metrics(&rows);

            prop_assert!(grouped.windows(2).all(|w| w[0].total_sales <= w[1].total_sales));
            let sum: f64 = grouped.iter().map(|g| g.total_sales).sum();
            prop_assert!((sum - metrics.total_sales).abs() < 1e-6);
            prop_assert_eq!(metrics.transaction_count, records.len());
        }
    }
}
