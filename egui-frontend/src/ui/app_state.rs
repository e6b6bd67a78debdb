//! # App State Module
//!
//! Central application state for the pricer window.
//!
//! ## Key Types:
//! - `PricerApp` - Main application state struct
//!
//! ## State Management:
//! `PricerApp` owns the `PricingSession`, which is the only place the
//! parameters live. Panels read metrics from the session and push edits back
//! through `apply_parameters`, so every edit triggers exactly one full
//! recomputation.

use log::info;
use shared::{labels_for, Labels, Language, PricingParameters, PricingReport, PricingSession};

use crate::config::AppConfig;
use crate::export_service::ExportService;
use crate::ui::state::{ExportState, UIState};

/// Main application struct for the egui pricer
pub struct PricerApp {
    /// Current parameters and the metrics computed from them
    pub session: PricingSession,

    /// Language used for every label
    pub language: Language,

    /// Writes report files
    pub export_service: ExportService,

    /// Feedback messages
    pub ui: UIState,

    /// Export panel state
    pub export: ExportState,
}

impl PricerApp {
    /// Create a new PricerApp from the loaded configuration
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        info!("🚀 Initializing PricerApp (language: {})", config.language);

        crate::ui::setup_pricer_style(&cc.egui_ctx);

        Self::from_config(config)
    }

    /// Build the app state without a window, used by `new` and tests
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            session: PricingSession::new(config.defaults),
            language: config.language,
            export_service: ExportService::new(config.export_dir, config.timestamp_filenames),
            ui: UIState::new(),
            export: ExportState::new(config.export_format),
        }
    }

    /// Labels for the current language
    pub fn labels(&self) -> Labels {
        labels_for(self.language)
    }

    /// Switch the display language. Metrics are unaffected.
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            info!("🌐 Switching language: {} -> {}", self.language, language);
            self.language = language;
        }
    }

    /// Replace the parameters if they changed, recomputing the metrics once
    pub fn apply_parameters(&mut self, parameters: PricingParameters) -> bool {
        if &parameters == self.session.parameters() {
            return false;
        }
        self.session.set_parameters(parameters);
        true
    }

    /// Snapshot the current session for export
    pub fn snapshot_report(&self) -> PricingReport {
        PricingReport::new(self.language, *self.session.parameters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ReportFormat;

    #[test]
    fn test_from_config_uses_defaults() {
        let config = AppConfig {
            language: Language::Pt,
            export_format: ReportFormat::Csv,
            defaults: PricingParameters { months: 1, ..Default::default() },
            ..Default::default()
        };
        let app = PricerApp::from_config(config);

        assert_eq!(app.language, Language::Pt);
        assert_eq!(app.export.format, ReportFormat::Csv);
        assert_eq!(app.session.metrics().total_cost, 50_000.0);
    }

    #[test]
    fn test_apply_parameters_only_recomputes_on_change() {
        let mut app = PricerApp::from_config(AppConfig::default());
        let before = app.session.recompute_count();

        assert!(!app.apply_parameters(PricingParameters::default()));
        assert_eq!(app.session.recompute_count(), before);

        let edited = PricingParameters { monthly_price: 6_000.0, ..Default::default() };
        assert!(app.apply_parameters(edited));
        assert_eq!(app.session.recompute_count(), before + 1);
        assert_eq!(app.session.metrics().total_cost, 117_000.0);
    }

    #[test]
    fn test_language_switch_keeps_metrics() {
        let mut app = PricerApp::from_config(AppConfig::default());
        let metrics = *app.session.metrics();
        let count = app.session.recompute_count();

        app.set_language(Language::Pt);

        assert_eq!(app.labels().language(), Language::Pt);
        assert_eq!(app.session.metrics(), &metrics);
        assert_eq!(app.session.recompute_count(), count);
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let mut app = PricerApp::from_config(AppConfig::default());
        let report = app.snapshot_report();

        app.apply_parameters(PricingParameters { months: 1, ..Default::default() });

        assert_eq!(report.metrics().total_cost, 105_000.0);
        assert_eq!(app.session.metrics().total_cost, 50_000.0);
    }
}
