//! Stats module - salary gap and leadership aggregations

mod leadership;
mod salary_gap;

pub use leadership::{GenderShare, LeadershipCalculator, LeadershipOutcome};
pub use salary_gap::{
    GenderSalaryStats, SalaryGap, SalaryGapCalculator, SalaryGapOutcome, FEMALE, MALE,
};
