//! Gender Gap Report Application
//! Main window: toolbar, report body and footer.

use crate::config::ReportConfig;
use crate::export::export_report;
use crate::gui::ReportView;
use crate::report::text::FOOTER_LINES;
use crate::report::{run_pipeline, GenderGapReport};
use egui::{Color32, RichText};

/// Result of the last pipeline run.
enum ReportState {
    Ready(GenderGapReport),
    Failed(String),
}

/// Main application window.
pub struct GenderGapApp {
    config: ReportConfig,
    state: ReportState,
    status: String,
}

impl GenderGapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ReportConfig) -> Self {
        let mut app = Self {
            config,
            state: ReportState::Failed("Not loaded".to_string()),
            status: "Ready".to_string(),
        };
        app.reload();
        app
    }

    /// Run the whole pipeline again from the input file.
    fn reload(&mut self) {
        match run_pipeline(&self.config) {
            Ok(report) => {
                let c = &report.cleaning;
                self.status = format!(
                    "Loaded {} rows, {} used in analysis ({} without usable gender or salary)",
                    c.loaded_rows,
                    c.retained_rows,
                    c.dropped_rows()
                );
                self.state = ReportState::Ready(report);
            }
            Err(e) => {
                log::error!("Report failed: {}", e);
                self.status = format!("Error: {}", e);
                self.state = ReportState::Failed(e.to_string());
            }
        }
    }

    /// Export charts and report data to a folder picked by the user.
    fn handle_export(&mut self) {
        let ReportState::Ready(report) = &self.state else {
            self.status = "No report to export".to_string();
            return;
        };

        let Some(dir) = rfd::FileDialog::new()
            .set_directory(&self.config.export_dir)
            .pick_folder()
        else {
            return; // User cancelled
        };

        match export_report(report, &self.config.currency, &dir) {
            Ok(paths) => {
                self.status = format!("Exported {} files to {}", paths.len(), dir.display());
                if let Err(e) = open::that(&dir) {
                    log::warn!("Could not open {}: {}", dir.display(), e);
                }
            }
            Err(e) => {
                log::error!("Export failed: {:#}", e);
                self.status = format!("Export error: {:#}", e);
            }
        }
    }

    fn show_footer(ui: &mut egui::Ui) {
        ui.add_space(4.0);
        for line in FOOTER_LINES {
            ui.label(RichText::new(line).size(12.0).color(Color32::GRAY));
        }
        ui.add_space(4.0);
    }
}

impl eframe::App for GenderGapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("🔄 Reload").clicked() {
                    self.reload();
                }
                let can_export = matches!(self.state, ReportState::Ready(_));
                if ui
                    .add_enabled(can_export, egui::Button::new("💾 Export charts"))
                    .clicked()
                {
                    self.handle_export();
                }
                ui.separator();
                ui.label(RichText::new(&self.status).size(12.0));
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            Self::show_footer(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.state {
            ReportState::Ready(report) => ReportView::show(ui, report, &self.config.currency),
            ReportState::Failed(message) => ReportView::show_error(ui, message),
        });
    }
}
