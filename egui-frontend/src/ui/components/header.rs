//! # Header Module
//!
//! Title banner, language selector and feedback messages.

use eframe::egui;
use shared::{LabelKey, Language};

use crate::ui::app_state::PricerApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl PricerApp {
    /// Render the language selector row and the title banner
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let labels = self.labels();

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // right_to_left lays out in reverse, so iterate backwards to keep EN first
            for language in Language::ALL.iter().rev() {
                let selected = *language == self.language;
                let (fill, text_color) = if selected {
                    (colors::ACTIVE_BACKGROUND, colors::TEXT_WHITE)
                } else {
                    (colors::INACTIVE_BACKGROUND, colors::LABEL)
                };

                let button = egui::Button::new(
                    egui::RichText::new(language.native_name()).color(text_color),
                )
                .fill(fill);

                if ui.add(button).clicked() {
                    self.set_language(*language);
                }
            }
            ui.label(egui::RichText::new(labels.get(LabelKey::Language)).color(colors::LABEL));
        });

        ui.add_space(8.0);

        egui::Frame::none()
            .fill(CURRENT_THEME.layout.banner_background)
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(labels.get(LabelKey::Title))
                                .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT_WHITE),
                        )
                        .selectable(false),
                    );
                });
            });
    }

    /// Render error and success messages
    pub fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.ui.error_message {
            ui.colored_label(colors::ERROR, format!("❌ {}", error));
        }
        if let Some(success) = &self.ui.success_message {
            ui.colored_label(colors::SUCCESS, format!("✅ {}", success));
        }
    }
}
