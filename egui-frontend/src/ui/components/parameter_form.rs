//! # Parameter Form
//!
//! The seven numeric inputs. Edits are collected into a copy of the current
//! parameters and applied once per frame, so several edits in one frame still
//! cause a single recomputation.

use eframe::egui;
use shared::{format_number, parse_number, LabelKey, ParameterField};

use crate::ui::app_state::PricerApp;
use crate::ui::components::styling::{card_frame, card_title};
use crate::ui::components::theme::colors;

impl PricerApp {
    /// Render the input parameters card
    pub fn render_parameter_form(&mut self, ui: &mut egui::Ui) {
        let labels = self.labels();
        let mut parameters = *self.session.parameters();

        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(card_title(labels.get(LabelKey::InputParameters)));
            ui.add_space(8.0);

            egui::Grid::new("parameter_form_grid")
                .num_columns(2)
                .spacing([16.0, 12.0])
                .show(ui, |ui| {
                    for (index, field) in ParameterField::ALL.iter().enumerate() {
                        ui.push_id(field.id(), |ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(labels.get(field.label_key())).color(colors::LABEL));
                                let mut value = field.get(&parameters);
                                if ui.add(number_input(*field, &mut value)).changed() {
                                    field.set(&mut parameters, value);
                                }
                            });
                        });
                        if index % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
        });

        if self.apply_parameters(parameters) {
            log::debug!("🧮 Parameters changed, metrics recomputed");
        }
    }
}

/// Drag value showing thousands separators, two decimals for money and percentages
fn number_input(field: ParameterField, value: &mut f64) -> egui::DragValue<'_> {
    let decimals = if field.is_whole_number() { 0 } else { 2 };
    let speed = if field.is_whole_number() || field.is_percentage() { 0.1 } else { 100.0 };

    egui::DragValue::new(value)
        .speed(speed)
        .min_decimals(decimals)
        .max_decimals(decimals)
        .custom_formatter(move |n, _| format_number(n, decimals).unwrap_or_else(|| n.to_string()))
        .custom_parser(parse_number)
}
