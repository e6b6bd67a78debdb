//! # Results Panel
//!
//! Nine result tiles showing the rounded metrics. Non-finite metrics (from a
//! zero cost, zero income or 100% tax) are shown as the localized "N/A".

use eframe::egui;
use shared::{format_money, format_number, format_percent, DisplayMetrics, LabelKey, Labels};

use crate::ui::app_state::PricerApp;
use crate::ui::components::styling::{card_frame, card_title};
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// One tile of the results panel
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTile {
    pub label: LabelKey,
    /// Rounded value, used for coloring negative results
    pub value: f64,
    /// Formatted text, or "N/A" for non-finite values
    pub text: String,
}

/// Build the nine result tiles in display order
pub fn result_tiles(display: &DisplayMetrics, labels: &Labels) -> Vec<ResultTile> {
    let na = labels.get(LabelKey::NotAvailable);
    let money = |value: f64| format_money(value).unwrap_or_else(|| na.to_string());
    let percent = |value: f64| format_percent(value).unwrap_or_else(|| na.to_string());
    let months = |value: f64| match format_number(value, 1) {
        Some(number) => format!("{} {}", number, labels.get(LabelKey::Months)),
        None => na.to_string(),
    };

    vec![
        ResultTile { label: LabelKey::TotalCost, value: display.total_cost, text: money(display.total_cost) },
        ResultTile { label: LabelKey::MaxProfit, value: display.max_profit, text: money(display.max_profit) },
        ResultTile { label: LabelKey::MinProfit, value: display.min_profit, text: money(display.min_profit) },
        ResultTile { label: LabelKey::Roi, value: display.roi, text: percent(display.roi) },
        ResultTile {
            label: LabelKey::BreakEven,
            value: display.break_even_months,
            text: months(display.break_even_months),
        },
        ResultTile {
            label: LabelKey::MonthlyRevenue,
            value: display.monthly_revenue,
            text: money(display.monthly_revenue),
        },
        ResultTile { label: LabelKey::ProfitMargin, value: display.profit_margin, text: percent(display.profit_margin) },
        ResultTile { label: LabelKey::LowestPrice, value: display.lowest_price, text: money(display.lowest_price) },
        ResultTile {
            label: LabelKey::LowestPriceToCall,
            value: display.lowest_price_to_call,
            text: money(display.lowest_price_to_call),
        },
    ]
}

impl PricerApp {
    /// Render the results card
    pub fn render_results_panel(&self, ui: &mut egui::Ui) {
        let labels = self.labels();
        let display = DisplayMetrics::from(self.session.metrics());
        let tiles = result_tiles(&display, &labels);

        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(card_title(labels.get(LabelKey::Results)));
            ui.add_space(8.0);

            let tile_width = ((ui.available_width() - 12.0) / 2.0).max(120.0);
            egui::Grid::new("results_grid")
                .num_columns(2)
                .spacing([12.0, 12.0])
                .show(ui, |ui| {
                    for (index, tile) in tiles.iter().enumerate() {
                        render_tile(ui, tile, &labels, tile_width);
                        if index % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
        });
    }
}

fn render_tile(ui: &mut egui::Ui, tile: &ResultTile, labels: &Labels, width: f32) {
    egui::Frame::none()
        .fill(colors::TILE_BACKGROUND)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.set_width(width - 16.0);
            ui.label(egui::RichText::new(labels.get(tile.label)).color(colors::LABEL));
            ui.label(
                egui::RichText::new(&tile.text)
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(CURRENT_THEME.value_color(tile.value)),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{compute, labels_for, Language, PricingParameters};

    #[test]
    fn test_result_tiles_default_scenario() {
        let display = DisplayMetrics::from(&compute(&PricingParameters::default()));
        let tiles = result_tiles(&display, &labels_for(Language::En));

        assert_eq!(tiles.len(), 9);
        assert_eq!(tiles[0].text, "$105,000.00");
        assert_eq!(tiles[1].text, "-$5,000.00");
        assert_eq!(tiles[3].text, "-4.76%");
        assert_eq!(tiles[4].text, "12.6 months");
        assert_eq!(tiles[5].text, "$8,333.33");
        assert_eq!(tiles[6].text, "-5.00%");
    }

    #[test]
    fn test_result_tiles_show_not_available() {
        let params = PricingParameters { tax_rate_percent: 100.0, ..Default::default() };
        let display = DisplayMetrics::from(&compute(&params));
        let tiles = result_tiles(&display, &labels_for(Language::Pt));

        let lowest = tiles.iter().find(|t| t.label == LabelKey::LowestPrice).unwrap();
        assert_eq!(lowest.text, "N/D");
    }
}
