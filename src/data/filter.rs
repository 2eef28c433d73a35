use std::collections::BTreeSet;

use super::model::SaleRecord;

// ---------------------------------------------------------------------------
// Product selection
// ---------------------------------------------------------------------------

/// The set of product names chosen in the multi-select.
/// An empty set selects nothing.
pub type ProductSelection = BTreeSet<String>;

/// The initial selection: the first and third products, when present.
pub fn default_selection(products: &[String]) -> ProductSelection {
    [0, 2]
        .iter()
        .filter_map(|&i| products.get(i).cloned())
        .collect()
}

/// Keep the records whose product is selected, in their original order.
pub fn filter_by_products<'a, I>(rows: I, selected: &ProductSelection) -> Vec<&'a SaleRecord>
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    rows.into_iter()
        .filter(|rec| selected.contains(&rec.product))
        .collect()
}

/// Indices of the records whose product is selected.
pub fn filtered_indices(records: &[SaleRecord], selected: &ProductSelection) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selected.contains(&rec.product))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    const PRODUCTS: [&str; 4] = ["BAGUETTE", "Croissant", "TRADITIONAL BAGUETTE", "COUPE"];

    fn record(id: i64, product: &str) -> SaleRecord {
        let day = NaiveDate::from_ymd_opt(2021, 7, 14).unwrap();
        SaleRecord::new(id, day, product, 1.0, 1.0)
    }

    fn selection(names: &[&str]) -> ProductSelection {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_selected_products_in_order() {
        let records = vec![
            record(0, "BAGUETTE"),
            record(1, "Croissant"),
            record(2, "COUPE"),
            record(3, "BAGUETTE"),
        ];
        let rows = filter_by_products(&records, &selection(&["BAGUETTE", "COUPE"]));
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 2, 3]);
        assert_eq!(filtered_indices(&records, &selection(&["BAGUETTE", "COUPE"])), vec![0, 2, 3]);
    }

    #[test]
    fn empty_selection_yields_empty_table() {
        let records = vec![record(0, "BAGUETTE"), record(1, "Croissant")];
        assert!(filter_by_products(&records, &ProductSelection::new()).is_empty());
        assert!(filtered_indices(&records, &ProductSelection::new()).is_empty());
    }

    #[test]
    fn default_selection_takes_first_and_third() {
        let products: Vec<String> = PRODUCTS.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            default_selection(&products),
            selection(&["BAGUETTE", "TRADITIONAL BAGUETTE"])
        );
        assert_eq!(default_selection(&products[..2]), selection(&["BAGUETTE"]));
        assert!(default_selection(&[]).is_empty());
    }

    fn records_strategy() -> impl Strategy<Value = Vec<SaleRecord>> {
        prop::collection::vec(0..PRODUCTS.len(), 0..40).prop_map(|picks| {
            picks
                .into_iter()
                .enumerate()
                .map(|(i, p)| record(i as i64, PRODUCTS[p]))
                .collect()
        })
    }

    fn selection_strategy() -> impl Strategy<Value = ProductSelection> {
        prop::sample::subsequence(PRODUCTS.to_vec(), 0..=PRODUCTS.len())
            .prop_map(|names| names.into_iter().map(String::from).collect())
    }

    proptest! {
        /// Filtering the filtered rows again changes nothing.
        #[test]
        fn refiltering_is_idempotent(
            records in records_strategy(),
            selected in selection_strategy(),
        ) {
            let once = filter_by_products(&records, &selected);
            let twice = filter_by_products(once.iter().copied(), &selected);
            prop_assert_eq!(once, twice);
        }

        /// Selecting every product returns the whole table.
        #[test]
        fn selecting_everything_keeps_every_row(records in records_strategy()) {
            let all = selection(&PRODUCTS);
            let rows = filter_by_products(&records, &all);
            prop_assert_eq!(rows.len(), records.len());
            prop_assert!(rows.iter().zip(&records).all(|(a, b)| *a == b));
        }
    }
}
