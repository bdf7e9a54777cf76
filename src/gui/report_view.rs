//! Report View Widget
//! Scrollable single page: salary gap section, bar chart, leadership section, pie chart.

use crate::charts::ChartPlotter;
use crate::report::text::{self, REPORT_TITLE};
use crate::report::GenderGapReport;
use crate::stats::{GenderSalaryStats, LeadershipOutcome, SalaryGapOutcome};
use egui::{Color32, RichText, ScrollArea};

const CARD_WIDTH: f32 = 780.0;
const SECTION_SPACING: f32 = 15.0;
const PIE_SIZE: f32 = 360.0;

const WARNING_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const ACCENT_COLOR: Color32 = Color32::from_rgb(100, 149, 237);

pub struct ReportView;

impl ReportView {
    pub fn show(ui: &mut egui::Ui, report: &GenderGapReport, currency: &str) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(RichText::new(REPORT_TITLE).size(24.0).strong().color(ACCENT_COLOR));
                });
                ui.add_space(SECTION_SPACING);

                Self::card(ui, "💰 Salary Gap Analysis", |ui| {
                    Self::show_salary_gap(ui, report, currency);
                });
                ui.add_space(SECTION_SPACING);

                Self::card(ui, "👩‍💼 Women in Leadership Roles", |ui| {
                    Self::show_leadership(ui, &report.leadership);
                });
                ui.add_space(SECTION_SPACING);
            });
    }

    /// Replaces the whole report body when loading failed.
    pub fn show_error(ui: &mut egui::Ui, message: &str) {
        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new(format!("⚠ Could not load survey data\n\n{}", message))
                    .size(16.0)
                    .color(WARNING_COLOR),
            );
        });
    }

    fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.label(RichText::new(title).size(18.0).strong());
                ui.add_space(8.0);
                add_contents(ui);
            });
    }

    fn show_salary_gap(ui: &mut egui::Ui, report: &GenderGapReport, currency: &str) {
        let is_computed = matches!(report.salary_gap, SalaryGapOutcome::Computed(_));

        for line in text::salary_gap_lines(&report.salary_gap, currency) {
            let label = RichText::new(line).size(14.0);
            ui.label(if is_computed { label } else { label.color(WARNING_COLOR) });
        }

        // Chart only accompanies a computed gap
        if !is_computed || report.salary_by_gender.is_empty() {
            return;
        }

        ui.add_space(10.0);
        ui.label(RichText::new("📊 Salary Comparison by Gender").size(15.0).strong());
        ChartPlotter::draw_salary_bar_chart(ui, &report.salary_by_gender, currency);
        ui.add_space(8.0);
        Self::show_salary_table(ui, &report.salary_by_gender, currency);
    }

    fn show_salary_table(ui: &mut egui::Ui, stats: &[GenderSalaryStats], currency: &str) {
        egui::Grid::new("salary_by_gender_table")
            .striped(true)
            .min_col_width(90.0)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Gender").strong());
                ui.label(RichText::new("N").strong());
                ui.label(RichText::new("Mean").strong());
                ui.label(RichText::new("Median").strong());
                ui.end_row();

                for s in stats {
                    ui.label(&s.gender);
                    ui.label(s.count.to_string());
                    ui.label(text::format_currency(currency, s.mean));
                    ui.label(text::format_currency(currency, s.median));
                    ui.end_row();
                }
            });
    }

    fn show_leadership(ui: &mut egui::Ui, outcome: &LeadershipOutcome) {
        let lines = text::leadership_lines(outcome);

        let LeadershipOutcome::Distribution(shares) = outcome else {
            for line in lines {
                ui.label(RichText::new(line).size(14.0).color(WARNING_COLOR));
            }
            return;
        };

        let mut lines = lines.into_iter();
        if let Some(heading) = lines.next() {
            ui.label(RichText::new(heading).size(14.0).strong());
        }
        for line in lines {
            ui.label(RichText::new(line).size(14.0));
        }

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Gender Representation in Leadership Roles")
                    .size(15.0)
                    .strong(),
            );
            ChartPlotter::draw_leadership_pie_chart(ui, shares, PIE_SIZE);
        });
    }
}
