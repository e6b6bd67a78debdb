//! # Chart Renderer Module
//!
//! Bar charts for the expenses breakdown and profit-vs-cost datasets.
//!
//! ## Key Functions:
//! - `render_charts_section()` - The three chart cards side by side
//! - `dataset_bars()` - Turn a dataset into plot bars
//! - `render_bar_chart()` - Draw one dataset with egui_plot
//! - `render_chart_legend()` - Category names and values under a chart

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};
use shared::{expenses_breakdown, format_money, format_percent, profit_vs_cost, ChartDataset, LabelKey, Labels};

use crate::ui::app_state::PricerApp;
use crate::ui::components::styling::{card_frame, card_title};
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Height of every chart area
pub const CHART_HEIGHT: f32 = 300.0;

impl PricerApp {
    /// Draw the expenses breakdown, expenses distribution and profit vs cost cards
    pub fn render_charts_section(&self, ui: &mut egui::Ui) {
        let labels = self.labels();
        let expenses = expenses_breakdown(self.session.parameters());
        let profit = profit_vs_cost(self.session.metrics());

        ui.columns(3, |columns| {
            card_frame().show(&mut columns[0], |ui| {
                ui.label(card_title(labels.get(LabelKey::ExpensesBreakdown)));
                render_bar_chart(ui, "expenses_breakdown_chart", &expenses, &labels);
            });

            card_frame().show(&mut columns[1], |ui| {
                ui.label(card_title(labels.get(LabelKey::ExpensesDistribution)));
                self.render_distribution_chart(ui, &expenses, &labels);
            });

            card_frame().show(&mut columns[2], |ui| {
                ui.label(card_title(labels.get(LabelKey::ProfitVsCost)));
                render_bar_chart(ui, "profit_vs_cost_chart", &profit, &labels);
            });
        });
    }
}

/// One plot bar per finite entry, placed at x = entry index
pub fn dataset_bars(dataset: &ChartDataset, labels: &Labels) -> Vec<Bar> {
    dataset
        .entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.value.is_finite())
        .map(|(index, entry)| {
            Bar::new(index as f64, entry.value)
                .name(labels.get(entry.key))
                .width(0.6)
                .fill(CURRENT_THEME.bar_color(entry.value))
        })
        .collect()
}

/// Render a dataset as a bar chart followed by its legend
pub fn render_bar_chart(ui: &mut egui::Ui, id: &str, dataset: &ChartDataset, labels: &Labels) {
    let chart = BarChart::new(dataset_bars(dataset, labels))
        .name(labels.get(dataset.title))
        .color(CURRENT_THEME.chart.bar);

    Plot::new(id)
        .height(CHART_HEIGHT)
        .show_axes([false, true])
        .show_grid([false, true])
        .include_y(0.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_background(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });

    render_chart_legend(ui, dataset, labels, |_, value| CURRENT_THEME.bar_color(value), |_| None);
}

/// Legend rows: color swatch, label, formatted value and an optional share
pub fn render_chart_legend(
    ui: &mut egui::Ui,
    dataset: &ChartDataset,
    labels: &Labels,
    swatch_color: impl Fn(usize, f64) -> egui::Color32,
    share: impl Fn(usize) -> Option<f64>,
) {
    let na = labels.get(LabelKey::NotAvailable);
    for (index, entry) in dataset.entries.iter().enumerate() {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, egui::Rounding::same(2.0), swatch_color(index, entry.value));

            let value = format_money(entry.value).unwrap_or_else(|| na.to_string());
            let text = match share(index) {
                Some(fraction) => format!(
                    "{}: {} ({})",
                    labels.get(entry.key),
                    value,
                    format_percent(fraction * 100.0).unwrap_or_else(|| na.to_string())
                ),
                None => format!("{}: {}", labels.get(entry.key), value),
            };
            ui.label(egui::RichText::new(text).color(colors::LABEL));
        });
    }
}
