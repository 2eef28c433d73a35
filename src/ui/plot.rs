use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Sales-by-product bar chart
// ---------------------------------------------------------------------------

/// Render one bar per selected product, ascending by total sales.
pub fn sales_chart(ui: &mut Ui, state: &AppState) {
    let names: Vec<String> = state
        .product_sales
        .iter()
        .map(|p| p.product.clone())
        .collect();

    let charts: Vec<BarChart> = state
        .product_sales
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let color = state
                .color_map
                .as_ref()
                .map(|cm| cm.color_for(&p.product))
                .unwrap_or(Color32::LIGHT_BLUE);
            let bar = Bar::new(i as f64, p.total_sales)
                .name(&p.product)
                .fill(color)
                .width(0.7);
            BarChart::new(vec![bar]).name(&p.product).color(color)
        })
        .collect();

    Plot::new("sales_by_product")
        .legend(Legend::default())
        .height(320.0)
        .x_axis_label("product")
        .y_axis_label("sales (€)")
        .x_axis_formatter(move |mark: GridMark, _range| product_label(&names, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Axis label for a grid mark: the product name at integer positions.
fn product_label(names: &[String], value: f64) -> String {
    if value < 0.0 || value.fract() != 0.0 {
        return String::new();
    }
    names.get(value as usize).cloned().unwrap_or_default()
}
