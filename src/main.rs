//! Gender Gap Report - Kenya Tech Industry Compensation Analysis
//!
//! Loads the compensation survey workbook, cleans it, and shows the salary
//! gap and leadership representation as an interactive single-page report.

mod charts;
mod config;
mod data;
mod export;
mod gui;
mod report;
mod stats;

use config::{ReportConfig, CONFIG_FILE_NAME};
use eframe::egui;
use gui::GenderGapApp;
use std::path::Path;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ReportConfig::load_or_default(Path::new(CONFIG_FILE_NAME));
    log::info!("Reading survey from {}", config.input_path.display());

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 1000.0])
            .with_min_inner_size([820.0, 600.0])
            .with_title("Gender Gap Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "Gender Gap Analysis",
        options,
        Box::new(move |cc| Ok(Box::new(GenderGapApp::new(cc, config)))),
    )
}
