use std::sync::Arc;

use bakery_sales::data::export::export_sales;
use bakery_sales::data::loader::load_sales;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

const ABOUT: &str = "This app allows you to analyze bakery sales, visualize total sales by \
product, and understand your bakery's performance.";

// ---------------------------------------------------------------------------
// Left side panel – product filter
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    // Keep the table alive independently of `state` so we can mutate it below.
    let Some(table) = state.table.clone() else {
        ui.label("No sales data loaded.");
        return;
    };

    ui.strong(format!(
        "Choose Product  ({}/{})",
        state.selected.len(),
        table.products.len()
    ));
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .max_height((ui.available_height() - 120.0).max(100.0))
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for product in &table.products {
                let mut checked = state.selected.contains(product);
                let mut text = RichText::new(product);
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(product));
                }
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_product(product);
                }
            }
        });

    ui.separator();
    ui.strong("About this App");
    ui.label(RichText::new(ABOUT).italics());
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let has_rows = !state.has_no_data();
            if ui
                .add_enabled(has_rows, egui::Button::new("Export filtered…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} records loaded, {} visible",
                table.len(),
                state.visible_indices.len()
            ));
        }
        if let Some(source) = &state.source {
            ui.separator();
            ui.label(RichText::new(source.display().to_string()).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sales export")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match load_sales(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} sale records ({} products) from {}",
                    table.len(),
                    table.products.len(),
                    path.display()
                );
                state.set_table(Arc::new(table), path);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered sales")
        .set_file_name("filtered_sales.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = file else {
        return;
    };
    let rows = state.visible_rows();
    match export_sales(&rows, &path) {
        Ok(()) => {
            log::info!("Exported {} rows to {}", rows.len(), path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
