//! Report Export Module
//! Writes the static charts and the report data to a folder.

use crate::charts::StaticChartRenderer;
use crate::report::GenderGapReport;
use crate::stats::LeadershipOutcome;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const SALARY_CHART_FILE: &str = "salary_by_gender.png";
pub const LEADERSHIP_CHART_FILE: &str = "leadership_gender_share.png";
pub const REPORT_DATA_FILE: &str = "report.json";

const BAR_SIZE: (u32, u32) = (1200, 750);
const PIE_SIZE: (u32, u32) = (900, 900);

/// Export PNG charts (when there is data for them) and `report.json`.
/// Returns the written paths.
pub fn export_report(
    report: &GenderGapReport,
    currency: &str,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = Vec::new();

    if !report.salary_by_gender.is_empty() {
        let png = StaticChartRenderer::render_salary_bar_chart(
            &report.salary_by_gender,
            currency,
            BAR_SIZE.0,
            BAR_SIZE.1,
        )
        .context("Failed to render salary chart")?;
        written.push(write_file(out_dir, SALARY_CHART_FILE, &png)?);
    }

    if let LeadershipOutcome::Distribution(shares) = &report.leadership {
        let png = StaticChartRenderer::render_leadership_pie_chart(shares, PIE_SIZE.0, PIE_SIZE.1)
            .context("Failed to render leadership chart")?;
        written.push(write_file(out_dir, LEADERSHIP_CHART_FILE, &png)?);
    }

    let json = serde_json::to_vec_pretty(report).context("Failed to serialize report")?;
    written.push(write_file(out_dir, REPORT_DATA_FILE, &json)?);

    log::info!("Exported {} files to {}", written.len(), out_dir.display());
    Ok(written)
}

fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
