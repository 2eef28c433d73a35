use bakery_sales::data::aggregate::SalesMetrics;
use eframe::egui::{Color32, RichText, Ui};

use crate::state::AppState;
use crate::ui::{plot, table};

const TITLE: &str = "Bakery Sales App";
const SUBTITLE: &str = "Analyze bakery sales data and gain insights.";
const NO_DATA: &str = "No data available for the selected product(s). Please adjust your filters.";

// ---------------------------------------------------------------------------
// Central panel: metrics, table, chart
// ---------------------------------------------------------------------------

/// Render the central dashboard for the current selection.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ui.heading(RichText::new(TITLE).size(28.0).strong());
    ui.label(SUBTITLE);
    ui.add_space(8.0);

    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a sales export to begin  (File → Open…)");
        });
        return;
    }

    metrics_row(ui, &state.metrics);
    ui.separator();

    if state.has_no_data() {
        ui.label(RichText::new(NO_DATA).color(Color32::from_rgb(230, 160, 0)));
        return;
    }

    table::sales_table(ui, &state.visible_rows());
    ui.add_space(12.0);

    ui.heading("Total Sales of Selected Products");
    plot::sales_chart(ui, state);
}

fn metrics_row(ui: &mut Ui, metrics: &SalesMetrics) {
    ui.heading("Sales Metrics");
    ui.columns(3, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Number of transactions", metrics.transaction_count.to_string());
        metric(&mut cols[1], "Total Quantity Sold", metrics.total_quantity.to_string());
        metric(&mut cols[2], "Total Sales (€)", metrics.total_sales_display());
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(label);
        ui.label(RichText::new(value).size(26.0).strong());
    });
}
