use bakery_sales::data::model::SaleRecord;
use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

const HEADERS: [&str; 5] = ["date", "product", "quantity", "unit_price", "sales"];

/// Render the filtered records as a scrollable table.
pub fn sales_table(ui: &mut Ui, rows: &[&SaleRecord]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(320.0)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(180.0))
        .columns(Column::auto().at_least(70.0), 2)
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for name in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let rec = rows[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(rec.date.format("%Y-%m-%d").to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.product.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.quantity.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", rec.unit_price));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", rec.sales));
                });
            });
        });
}
