//! Leadership Representation Module
//! Gender share among respondents holding leadership-titled job levels.

use crate::config::{GENDER_COL, JOB_LEVEL_COL};
use polars::prelude::*;
use serde::Serialize;

/// One gender's share of the leadership subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderShare {
    pub gender: String,
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LeadershipOutcome {
    /// No respondent matched the allow-list.
    NoData,
    /// Shares ordered by count, largest first.
    Distribution(Vec<GenderShare>),
}

pub struct LeadershipCalculator;

impl LeadershipCalculator {
    /// Keep only rows whose job level exactly matches one of `roles`.
    pub fn filter_leadership(df: &DataFrame, roles: &[String]) -> PolarsResult<DataFrame> {
        let predicate = roles
            .iter()
            .map(|role| col(JOB_LEVEL_COL).eq(lit(role.as_str())))
            .reduce(|acc, expr| acc.or(expr))
            .unwrap_or_else(|| lit(false));

        df.clone().lazy().filter(predicate).collect()
    }

    /// Percentage share of each gender among leadership respondents.
    pub fn compute_distribution(
        df: &DataFrame,
        roles: &[String],
    ) -> PolarsResult<LeadershipOutcome> {
        let leaders = Self::filter_leadership(df, roles)?;
        if leaders.height() == 0 {
            log::info!("No respondents matched the leadership roles");
            return Ok(LeadershipOutcome::NoData);
        }

        let counts = leaders
            .lazy()
            .group_by([col(GENDER_COL)])
            .agg([len().cast(DataType::UInt64).alias("count")])
            .collect()?;

        let genders = counts.column(GENDER_COL)?.str()?;
        let totals = counts.column("count")?.u64()?;

        let mut shares: Vec<(String, u64)> = genders
            .into_iter()
            .zip(totals)
            .filter_map(|(g, n)| Some((g?.to_string(), n?)))
            .collect();
        shares.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let total: u64 = shares.iter().map(|(_, n)| n).sum();
        let distribution = shares
            .into_iter()
            .map(|(gender, count)| GenderShare {
                percent: count as f64 / total as f64 * 100.0,
                gender,
                count,
            })
            .collect();

        Ok(LeadershipOutcome::Distribution(distribution))
    }
}
