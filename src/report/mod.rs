//! Report module - runs the survey pipeline and formats its results
//!
//! Load -> normalize headers -> clean -> aggregate. Every stage takes the
//! previous table by reference and returns a new value, so the whole run is
//! a function from input file to [`GenderGapReport`].

pub mod text;

use crate::config::{ReportConfig, GENDER_COL, JOB_LEVEL_COL, SALARY_COL};
use crate::data::{Cleaner, CleaningSummary, FieldNormalizer, LoadError, SurveyLoader, SurveyTable};
use crate::stats::{
    GenderSalaryStats, LeadershipCalculator, LeadershipOutcome, SalaryGapCalculator,
    SalaryGapOutcome,
};
use polars::prelude::PolarsError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Aggregation failed: {0}")]
    Aggregate(#[from] PolarsError),
}

/// Everything the presenter needs for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderGapReport {
    pub cleaning: CleaningSummary,
    pub salary_gap: SalaryGapOutcome,
    /// Bar chart series, all genders sorted by name.
    pub salary_by_gender: Vec<GenderSalaryStats>,
    pub leadership: LeadershipOutcome,
}

/// Build report data from a freshly loaded table.
pub fn build_report(
    raw: &SurveyTable,
    config: &ReportConfig,
) -> Result<GenderGapReport, PolarsError> {
    let normalized = FieldNormalizer::new(&config.column_mapping).normalize(raw);
    let (cleaned, cleaning) = Cleaner::new(GENDER_COL, SALARY_COL).clean(&normalized);
    let df = cleaned.to_frame(GENDER_COL, JOB_LEVEL_COL, SALARY_COL)?;

    Ok(GenderGapReport {
        cleaning,
        salary_gap: SalaryGapCalculator::compute_gap(&df)?,
        salary_by_gender: SalaryGapCalculator::salary_by_gender(&df)?,
        leadership: LeadershipCalculator::compute_distribution(&df, &config.leadership_roles)?,
    })
}

/// Load the configured input file and build its report.
pub fn run_pipeline(config: &ReportConfig) -> Result<GenderGapReport, PipelineError> {
    let raw = SurveyLoader::load(&config.input_path)?;
    Ok(build_report(&raw, config)?)
}
