mod app;
mod cli;
mod color;
mod state;
mod ui;

use anyhow::anyhow;
use app::BakerySalesApp;
use bakery_sales::data::cache::source_cache;
use clap::Parser;
use cli::Cli;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Load before opening the window: a bad export must not show a half-built dashboard.
    let table = source_cache(&cli.source)
        .and_then(|cache| cache.get_or_load())
        .map_err(|e| {
            log::error!("Failed to load sales data: {e:#}");
            e
        })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bakery Sales App",
        options,
        Box::new(move |_cc| Ok(Box::new(BakerySalesApp::new(table, cli.source)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
