//! # Export Panel
//!
//! Format selector and the save button. The report is snapshotted when the
//! button is clicked, so later edits never change a file already written.

use eframe::egui;
use log::{error, info};
use shared::{LabelKey, ReportFormat};

use crate::export_service::display_dir;
use crate::ui::app_state::PricerApp;
use crate::ui::components::theme::colors;

impl PricerApp {
    /// Render the export controls, centered under the charts
    pub fn render_export_panel(&mut self, ui: &mut egui::Ui) {
        let labels = self.labels();

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(labels.get(LabelKey::ExportFormat)).color(colors::LABEL));
                for format in ReportFormat::ALL {
                    ui.radio_value(&mut self.export.format, format, format.display_name());
                }
            });

            ui.add_space(8.0);

            let button = egui::Button::new(
                egui::RichText::new(format!("💾 {}", labels.get(LabelKey::SaveReport)))
                    .strong()
                    .color(colors::TEXT_WHITE),
            )
            .fill(colors::ACTIVE_BACKGROUND)
            .min_size(egui::vec2(180.0, 40.0));

            if ui.add(button).clicked() {
                self.export_report();
            }

            if let Some(path) = &self.export.last_export {
                ui.label(
                    egui::RichText::new(format!("📁 {}", display_dir(path)))
                        .small()
                        .color(colors::LABEL),
                );
            }
        });
    }

    /// Snapshot the session and write it in the selected format
    pub fn export_report(&mut self) {
        let labels = self.labels();
        let report = self.snapshot_report();
        let format = self.export.format;

        match self.export_service.export(&report, format) {
            Ok(outcome) => {
                info!("✅ Report exported to {:?} ({} bytes)", outcome.file_path, outcome.bytes);
                self.ui.set_success(format!(
                    "{} {}",
                    labels.get(LabelKey::ExportSuccess),
                    outcome.file_path.to_string_lossy()
                ));
                self.export.last_export = Some(outcome.file_path);
            }
            Err(e) => {
                error!("❌ Report export failed: {}", e);
                self.ui.set_error(format!("{}: {}", labels.get(LabelKey::ExportFailed), e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::ui::app_state::PricerApp;
    use shared::{Language, ReportFormat};

    #[test]
    fn test_export_report_sets_success_message() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            language: Language::Pt,
            export_dir: Some(dir.path().to_string_lossy().to_string()),
            export_format: ReportFormat::Json,
            ..Default::default()
        };
        let mut app = PricerApp::from_config(config);

        app.export_report();

        let written = app.export.last_export.clone().unwrap();
        assert_eq!(written, dir.path().join("nexusoft-saas-pricing-results.json"));
        assert!(written.exists());
        assert!(app.ui.success_message.as_deref().unwrap().starts_with("Relatório salvo em"));
        assert!(app.ui.error_message.is_none());
    }

    #[test]
    fn test_export_report_failure_sets_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let config = AppConfig {
            export_dir: Some(blocker.to_string_lossy().to_string()),
            ..Default::default()
        };
        let mut app = PricerApp::from_config(config);

        app.export_report();

        assert!(app.export.last_export.is_none());
        assert!(app.ui.error_message.as_deref().unwrap().starts_with("Could not save report"));
    }
}
