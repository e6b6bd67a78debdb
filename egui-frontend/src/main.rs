use anyhow::anyhow;
use eframe::egui;
use log::info;

mod config;
mod export_service;
mod ui;

use config::AppConfig;
use ui::PricerApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG=debug shows every recomputation
    env_logger::init();
    info!("Starting NEXUSOFT SaaS Pricer");

    let config = AppConfig::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([900.0, 640.0])
            .with_title("NEXUSOFT SaaS Pricer")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "NEXUSOFT SaaS Pricer",
        options,
        Box::new(|cc| {
            let app = PricerApp::new(cc, config);
            info!("Successfully initialized pricer app");
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow!("Failed to run pricer window: {}", e))
}
