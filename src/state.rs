use std::path::PathBuf;
use std::sync::Arc;

use bakery_sales::data::aggregate::{ProductSales, SalesMetrics, sales_by_product, sales_metrics};
use bakery_sales::data::filter::{ProductSelection, default_selection, filtered_indices};
use bakery_sales::data::model::{SaleRecord, SalesTable};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded, cleaned table (shared with the process-wide cache).
    pub table: Option<Arc<SalesTable>>,

    /// File the table was read from.
    pub source: Option<PathBuf>,

    /// Products chosen in the multi-select.
    pub selected: ProductSelection,

    /// Indices of records passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Metrics over the visible records.
    pub metrics: SalesMetrics,

    /// Sales by product over the visible records, ascending.
    pub product_sales: Vec<ProductSales>,

    /// Bar colour per product.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            source: None,
            selected: ProductSelection::new(),
            visible_indices: Vec::new(),
            metrics: SalesMetrics::default(),
            product_sales: Vec::new(),
            color_map: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table, select the default products and recompute.
    pub fn set_table(&mut self, table: Arc<SalesTable>, source: PathBuf) {
        self.selected = default_selection(&table.products);
        self.color_map = Some(ColorMap::new(&table.products));
        self.table = Some(table);
        self.source = Some(source);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute visible rows and aggregates after a selection change.
    pub fn refilter(&mut self) {
        let Some(table) = &self.table else {
            return;
        };
        self.visible_indices = filtered_indices(&table.records, &self.selected);
        let rows = table.rows(&self.visible_indices);
        self.metrics = sales_metrics(&rows);
        self.product_sales = sales_by_product(&rows);
        log::debug!(
            "{} of {} products selected, {} rows visible",
            self.selected.len(),
            table.products.len(),
            self.visible_indices.len()
        );
    }

    /// The records passing the current selection.
    pub fn visible_rows(&self) -> Vec<&SaleRecord> {
        match &self.table {
            Some(table) => table.rows(&self.visible_indices),
            None => Vec::new(),
        }
    }

    /// Whether the selection left nothing to show.
    pub fn has_no_data(&self) -> bool {
        self.visible_indices.is_empty()
    }

    /// Toggle a single product in the selection.
    pub fn toggle_product(&mut self, product: &str) {
        if !self.selected.remove(product) {
            self.selected.insert(product.to_string());
        }
        self.refilter();
    }

    /// Select every product.
    pub fn select_all(&mut self) {
        if let Some(table) = &self.table {
            self.selected = table.products.iter().cloned().collect();
            self.refilter();
        }
    }

    /// Deselect every product.
    pub fn select_none(&mut self) {
        self.selected.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn loaded_state() -> AppState {
        let day = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
        let table = SalesTable::from_records(vec![
            SaleRecord::new(0, day, "BAGUETTE", 1.0, 0.9),
            SaleRecord::new(1, day, "Croissant", 2.0, 1.1),
            SaleRecord::new(2, day, "PAIN AU CHOCOLAT", 3.0, 1.2),
            SaleRecord::new(3, day, "BAGUETTE", 2.0, 0.9),
        ]);
        let mut state = AppState::default();
        state.set_table(Arc::new(table), PathBuf::from("bakerysales.csv"));
        state
    }

    #[test]
    fn starts_with_first_and_third_products() {
        let state = loaded_state();
        let expected: ProductSelection =
            ["BAGUETTE", "PAIN AU CHOCOLAT"].iter().map(|s| s.to_string()).collect();
        assert_eq!(state.selected, expected);
        assert_eq!(state.visible_indices, vec![0, 2, 3]);
        assert_eq!(state.metrics.transaction_count, 3);
        assert_eq!(state.metrics.total_quantity, 6.0);
        assert_eq!(state.metrics.total_sales_display(), "6.30");
    }

    #[test]
    fn selecting_nothing_reports_zero_and_no_data() {
        let mut state = loaded_state();
        state.select_none();
        assert!(state.has_no_data());
        assert_eq!(state.metrics.transaction_count, 0);
        assert_eq!(state.metrics.total_quantity, 0.0);
        assert_eq!(state.metrics.total_sales_display(), "0.00");
        assert!(state.product_sales.is_empty());
        assert!(state.visible_rows().is_empty());
    }

    #[test]
    fn selecting_everything_shows_whole_table() {
        let mut state = loaded_state();
        state.select_all();
        let table = state.table.clone().unwrap();
        assert_eq!(state.visible_rows().len(), table.len());
        let total: f64 = table.records.iter().map(|r| r.sales).sum();
        assert!((state.metrics.total_sales - total).abs() < 1e-9);
        assert_eq!(state.product_sales.len(), 3);
    }

    #[test]
    fn toggling_adds_and_removes() {
        let mut state = loaded_state();
        state.toggle_product("Croissant");
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
        state.toggle_product("BAGUETTE");
        assert_eq!(state.visible_indices, vec![1, 2]);
        let names: Vec<&str> = state.product_sales.iter().map(|p| p.product.as_str()).collect();
        assert_eq!(names, vec!["Croissant", "PAIN AU CHOCOLAT"]);
    }

    #[test]
    fn unloaded_state_is_inert() {
        let mut state = AppState::default();
        state.select_all();
        state.toggle_product("BAGUETTE");
        assert!(state.visible_rows().is_empty());
        assert_eq!(state.metrics, SalesMetrics::default());
    }
}
