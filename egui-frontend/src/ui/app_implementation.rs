use eframe::egui;
use std::time::Instant;

use crate::ui::app_state::PricerApp;
use crate::ui::components::draw_gradient_background;
use crate::ui::state::ui_state::MESSAGE_TIMEOUT;

impl eframe::App for PricerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clear messages after a delay
        self.ui.expire_messages(Instant::now());
        if self.ui.has_message() {
            ctx.request_repaint_after(MESSAGE_TIMEOUT);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            draw_gradient_background(ui, ui.max_rect());

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                self.render_header(ui);
                ui.add_space(8.0);
                self.render_messages(ui);

                self.render_main_content(ui);

                ui.add_space(24.0);
                self.render_export_panel(ui);
                ui.add_space(16.0);
            });
        });
    }
}

impl PricerApp {
    /// Inputs and results side by side, charts underneath
    fn render_main_content(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            self.render_parameter_form(&mut columns[0]);
            self.render_results_panel(&mut columns[1]);
        });

        ui.add_space(16.0);
        self.render_charts_section(ui);
    }
}
