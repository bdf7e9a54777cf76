//! Static Chart Renderer
//! Draws the report charts with plotters into an RGB buffer and encodes PNG.
//!
//! Layout matches the interactive charts:
//! 1. Bar chart: "Average Salary Comparison by Gender", one bar per gender
//! 2. Pie chart: "Gender Representation in Leadership Roles" with % labels

use crate::charts::ChartPlotter;
use crate::stats::{GenderSalaryStats, GenderShare};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::TAU;
use std::io::Cursor;
use thiserror::Error;

const FONT: &str = "sans-serif";
const PIE_START_DEG: f64 = 140.0;
const PIE_STEP_RAD: f64 = 0.02;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to draw")]
    NoData,
    #[error("Chart drawing failed: {0}")]
    Drawing(String),
    #[error("Image buffer does not match {0}x{1}")]
    Buffer(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

fn drawing_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Drawing(e.to_string())
}

fn to_rgb(color: egui::Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the average-salary bar chart to PNG bytes.
    pub fn render_salary_bar_chart(
        stats: &[GenderSalaryStats],
        currency: &str,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        if stats.is_empty() {
            return Err(RenderError::NoData);
        }

        let y_max = stats.iter().map(|s| s.mean).fold(0.0_f64, f64::max);
        let y_max = if y_max > 0.0 { y_max * 1.15 } else { 1.0 };
        let colors = ChartPlotter::colors_for(stats.iter().map(|s| s.gender.as_str()));

        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(drawing_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption("Average Salary Comparison by Gender", (FONT, 26))
                .margin(20)
                .x_label_area_size(45)
                .y_label_area_size(100)
                .build_cartesian_2d((0..stats.len()).into_segmented(), 0.0..y_max)
                .map_err(drawing_err)?;

            let x_label = |x: &SegmentValue<usize>| match x {
                SegmentValue::CenterOf(i) => {
                    stats.get(*i).map(|s| s.gender.clone()).unwrap_or_default()
                }
                _ => String::new(),
            };

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(stats.len())
                .x_label_formatter(&x_label)
                .y_label_formatter(&|y| format!("{:.0}", y))
                .x_desc("Gender")
                .y_desc(format!("Average Salary ({})", currency))
                .axis_desc_style((FONT, 18))
                .label_style((FONT, 15))
                .draw()
                .map_err(drawing_err)?;

            chart
                .draw_series(stats.iter().zip(colors).enumerate().map(
                    |(i, (s, color))| -> Rectangle<(SegmentValue<usize>, f64)> {
                        let mut bar = Rectangle::new(
                            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), s.mean)],
                            to_rgb(color).filled(),
                        );
                        bar.set_margin(0, 0, 20, 20);
                        bar
                    },
                ))
                .map_err(drawing_err)?;

            root.present().map_err(drawing_err)?;
        }

        Self::encode_png(buffer, width, height)
    }

    /// Render the leadership pie chart to PNG bytes.
    pub fn render_leadership_pie_chart(
        shares: &[GenderShare],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        if shares.is_empty() {
            return Err(RenderError::NoData);
        }

        let colors = ChartPlotter::colors_for(shares.iter().map(|s| s.gender.as_str()));

        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(drawing_err)?;
            let area = root
                .titled("Gender Representation in Leadership Roles", (FONT, 26))
                .map_err(drawing_err)?;

            let (w, h) = area.dim_in_pixel();
            let center = (w as f64 / 2.0, h as f64 / 2.0);
            let radius = w.min(h) as f64 * 0.36;
            let centered = Pos::new(HPos::Center, VPos::Center);
            let percent_style = TextStyle::from((FONT, 18).into_font()).pos(centered);
            let label_style = TextStyle::from((FONT, 20).into_font()).pos(centered);

            let mut start = PIE_START_DEG.to_radians();
            for (share, color) in shares.iter().zip(colors) {
                let sweep = share.percent / 100.0 * TAU;
                if sweep <= 0.0 {
                    continue;
                }

                let steps = (sweep / PIE_STEP_RAD).ceil().max(1.0) as usize;
                let mut points = vec![Self::pixel(center, 0.0, 0.0)];
                points.extend(
                    (0..=steps).map(|k| Self::pixel(center, radius, start + sweep * k as f64 / steps as f64)),
                );
                area.draw(&Polygon::new(points, to_rgb(color).filled()))
                    .map_err(drawing_err)?;

                let mid = start + sweep / 2.0;
                area.draw(&Text::new(
                    format!("{:.1}%", share.percent),
                    Self::pixel(center, radius * 0.6, mid),
                    percent_style.clone(),
                ))
                .map_err(drawing_err)?;
                area.draw(&Text::new(
                    share.gender.clone(),
                    Self::pixel(center, radius * 1.15, mid),
                    label_style.clone(),
                ))
                .map_err(drawing_err)?;

                start += sweep;
            }

            root.present().map_err(drawing_err)?;
        }

        Self::encode_png(buffer, width, height)
    }

    fn pixel(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
        (
            (center.0 + radius * angle.cos()).round() as i32,
            (center.1 - radius * angle.sin()).round() as i32,
        )
    }

    /// Encode a packed RGB buffer as PNG.
    pub fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        let img = RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer(width, height))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}
