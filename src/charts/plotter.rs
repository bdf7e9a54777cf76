//! Chart Plotter Module
//! Interactive salary bar chart and leadership pie chart drawn with egui.

use crate::stats::{GenderSalaryStats, GenderShare, FEMALE, MALE};
use egui::{Align2, Color32, FontId, Pos2, Shape, Stroke};
use egui_plot::{Bar, BarChart, Plot};
use std::f32::consts::TAU;

pub const FEMALE_COLOR: Color32 = Color32::from_rgb(255, 182, 193); // Pink
pub const MALE_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

/// Colors for any other gender labels
pub const PALETTE: [Color32; 6] = [
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Pie slices start here, counter-clockwise.
const PIE_START_DEG: f32 = 140.0;
/// Largest arc covered by one triangle of a slice.
const PIE_SEGMENT_RAD: f32 = 0.03;

/// Creates the report charts using egui_plot and the egui painter.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Pink for women, blue for men, palette for everything else.
    /// `other_index` counts only the non-Male/Female labels seen so far.
    pub fn gender_color(gender: &str, other_index: usize) -> Color32 {
        match gender {
            FEMALE => FEMALE_COLOR,
            MALE => MALE_COLOR,
            _ => PALETTE[other_index % PALETTE.len()],
        }
    }

    /// Colors for a list of gender labels, in order.
    pub fn colors_for<'a>(genders: impl IntoIterator<Item = &'a str>) -> Vec<Color32> {
        let mut other_idx = 0;
        genders
            .into_iter()
            .map(|g| {
                let color = Self::gender_color(g, other_idx);
                if g != FEMALE && g != MALE {
                    other_idx += 1;
                }
                color
            })
            .collect()
    }

    /// Average salary per gender as a bar chart.
    pub fn draw_salary_bar_chart(ui: &mut egui::Ui, stats: &[GenderSalaryStats], currency: &str) {
        let labels: Vec<String> = stats.iter().map(|s| s.gender.clone()).collect();
        let colors = Self::colors_for(stats.iter().map(|s| s.gender.as_str()));

        let bars: Vec<Bar> = stats
            .iter()
            .zip(colors)
            .enumerate()
            .map(|(i, (s, color))| {
                Bar::new(i as f64, s.mean)
                    .name(&s.gender)
                    .width(0.6)
                    .fill(color)
                    .stroke(Stroke::new(1.0, color))
            })
            .collect();

        Plot::new("salary_by_gender")
            .height(300.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_label("Gender")
            .y_axis_label(format!("Average Salary ({})", currency))
            .x_axis_formatter(move |mark, _range| {
                let v = mark.value;
                let idx = v.round();
                if (v - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("Average salary"));
            });
    }

    /// Leadership gender shares as a pie chart with percentage labels.
    pub fn draw_leadership_pie_chart(ui: &mut egui::Ui, shares: &[GenderShare], size: f32) {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
        let center = response.rect.center();
        let radius = size * 0.38;
        let text_color = ui.visuals().text_color();

        let colors = Self::colors_for(shares.iter().map(|s| s.gender.as_str()));
        let mut start = PIE_START_DEG.to_radians();

        for (share, color) in shares.iter().zip(colors) {
            let sweep = (share.percent / 100.0) as f32 * TAU;
            if sweep <= 0.0 {
                continue;
            }

            // Thin triangles keep every piece convex
            let steps = (sweep / PIE_SEGMENT_RAD).ceil().max(1.0) as usize;
            for step in 0..steps {
                let a0 = start + sweep * step as f32 / steps as f32;
                let a1 = start + sweep * (step + 1) as f32 / steps as f32;
                painter.add(Shape::convex_polygon(
                    vec![
                        center,
                        Self::point_on_circle(center, radius, a0),
                        Self::point_on_circle(center, radius, a1),
                    ],
                    color,
                    Stroke::NONE,
                ));
            }

            let mid = start + sweep / 2.0;
            painter.text(
                Self::point_on_circle(center, radius * 0.6, mid),
                Align2::CENTER_CENTER,
                format!("{:.1}%", share.percent),
                FontId::proportional(13.0),
                Color32::BLACK,
            );
            painter.text(
                Self::point_on_circle(center, radius * 1.18, mid),
                Align2::CENTER_CENTER,
                &share.gender,
                FontId::proportional(14.0),
                text_color,
            );

            start += sweep;
        }
    }

    /// Screen y grows downwards, so positive angles turn counter-clockwise.
    fn point_on_circle(center: Pos2, radius: f32, angle: f32) -> Pos2 {
        Pos2::new(center.x + radius * angle.cos(), center.y - radius * angle.sin())
    }
}
