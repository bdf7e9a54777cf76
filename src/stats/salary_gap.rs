//! Salary Gap Module
//! Mean salary per gender and the relative gap between men and women.

use crate::config::{GENDER_COL, SALARY_COL};
use polars::prelude::*;
use serde::Serialize;
use statrs::statistics::{Data, Median, Statistics};

pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";

/// Salary statistics for one gender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderSalaryStats {
    pub gender: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
}

/// Mean salaries and the gap as a percentage of the male mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryGap {
    pub male_avg: f64,
    pub female_avg: f64,
    /// `None` when the male mean is not positive.
    pub gap_percent: Option<f64>,
}

impl SalaryGap {
    pub fn new(male_avg: f64, female_avg: f64) -> Self {
        let gap_percent = if male_avg > 0.0 {
            Some((male_avg - female_avg) / male_avg * 100.0)
        } else {
            None
        };

        Self {
            male_avg,
            female_avg,
            gap_percent,
        }
    }

    /// "less" when women earn less than men, otherwise "more".
    pub fn direction(&self) -> Option<&'static str> {
        self.gap_percent
            .map(|gap| if gap > 0.0 { "less" } else { "more" })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SalaryGapOutcome {
    /// No male or no female respondents in the cleaned data.
    NotEnoughData,
    Computed(SalaryGap),
}

pub struct SalaryGapCalculator;

impl SalaryGapCalculator {
    /// Mean salary per gender, sorted by gender.
    pub fn mean_by_gender(df: &DataFrame) -> PolarsResult<Vec<(String, f64)>> {
        let means = df
            .clone()
            .lazy()
            .group_by([col(GENDER_COL)])
            .agg([col(SALARY_COL).mean().alias("mean")])
            .collect()?;

        let genders = means.column(GENDER_COL)?.str()?;
        let values = means.column("mean")?.f64()?;

        let mut result: Vec<(String, f64)> = genders
            .into_iter()
            .zip(values)
            .filter_map(|(g, v)| Some((g?.to_string(), v?)))
            .collect();
        result.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(result)
    }

    /// Compare mean male and female salary.
    pub fn compute_gap(df: &DataFrame) -> PolarsResult<SalaryGapOutcome> {
        let means = Self::mean_by_gender(df)?;
        let lookup = |gender: &str| {
            means
                .iter()
                .find(|(g, _)| g == gender)
                .map(|(_, mean)| *mean)
        };

        let (Some(male_avg), Some(female_avg)) = (lookup(MALE), lookup(FEMALE)) else {
            log::info!("Salary gap skipped: need both {} and {} respondents", MALE, FEMALE);
            return Ok(SalaryGapOutcome::NotEnoughData);
        };

        let gap = SalaryGap::new(male_avg, female_avg);
        log::debug!("Salary gap: {:?}", gap);
        Ok(SalaryGapOutcome::Computed(gap))
    }

    /// Get salaries for a specific gender from DataFrame.
    pub fn get_values_for_gender(df: &DataFrame, gender: &str) -> PolarsResult<Vec<f64>> {
        let filtered = df
            .clone()
            .lazy()
            .filter(col(GENDER_COL).eq(lit(gender)))
            .select([col(SALARY_COL)])
            .collect()?;

        Ok(filtered.column(SALARY_COL)?.f64()?.into_no_null_iter().collect())
    }

    /// Count, mean and median salary for every gender present.
    pub fn salary_by_gender(df: &DataFrame) -> PolarsResult<Vec<GenderSalaryStats>> {
        let genders = Self::mean_by_gender(df)?;

        genders
            .into_iter()
            .map(|(gender, _)| {
                let values = Self::get_values_for_gender(df, &gender)?;
                let count = values.len();
                let mean = values.iter().mean();
                let median = Data::new(values).median();
                Ok(GenderSalaryStats {
                    gender,
                    count,
                    mean,
                    median,
                })
            })
            .collect()
    }
}
