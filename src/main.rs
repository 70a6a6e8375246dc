//! AUTO EDA - CSV & Excel Upload Profiler
//!
//! Desktop front-end: pick a file, see its column summary.

use anyhow::{anyhow, Context};
use auto_eda::config::AppConfig;
use auto_eda::gui::AutoEdaApp;
use auto_eda::logging::init_logging;
use eframe::egui;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging);
    info!(
        excel_enabled = config.loader.excel_enabled,
        infer_schema_length = config.loader.infer_schema_length,
        "starting AUTO EDA"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("AUTO EDA"),
        ..Default::default()
    };

    // Run the application
    let loader_config = config.loader;
    eframe::run_native(
        "AUTO EDA",
        options,
        Box::new(move |cc| Ok(Box::new(AutoEdaApp::new(cc, loader_config)))),
    )
    .map_err(|e| anyhow!("GUI error: {}", e))
}
