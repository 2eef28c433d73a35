use std::path::PathBuf;
use std::sync::Arc;

use bakery_sales::data::model::SalesTable;
use eframe::egui;

use crate::state::AppState;
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BakerySalesApp {
    pub state: AppState,
}

impl BakerySalesApp {
    /// Start the dashboard on an already loaded table.
    pub fn new(table: Arc<SalesTable>, source: PathBuf) -> Self {
        let mut state = AppState::default();
        state.set_table(table, source);
        Self { state }
    }
}

impl eframe::App for BakerySalesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: product filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, table, chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::central_panel(ui, &self.state);
        });
    }
}
