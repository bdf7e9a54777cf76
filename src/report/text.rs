//! Report Text Module
//! Human-readable lines for the salary gap and leadership sections.

use crate::stats::{LeadershipOutcome, SalaryGapOutcome};

pub const REPORT_TITLE: &str = "Gender Gap Analysis in Kenya's Tech Industry";
pub const NOT_ENOUGH_DATA: &str = "Not enough gender data to compute salary gap.";
pub const GAP_NOT_CALCULATED: &str = "Salary gap could not be calculated.";
pub const NO_LEADERSHIP_DATA: &str = "No leadership data available in the dataset.";
pub const LEADERSHIP_HEADING: &str = "Percentage of Women in Leadership Roles:";
pub const FOOTER_LINES: [&str; 2] = [
    "Developed by: Jemmimah Kavyu",
    "Project: Gender Gap Analysis in Kenya Tech Industry",
];

/// Two decimals with comma thousands separators: `1234567.891` -> `1,234,567.89`.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| matches!(c, '1'..='9')) {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

pub fn format_currency(currency: &str, value: f64) -> String {
    format!("{} {}", currency, format_thousands(value))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Lines for the salary gap section.
pub fn salary_gap_lines(outcome: &SalaryGapOutcome, currency: &str) -> Vec<String> {
    let gap = match outcome {
        SalaryGapOutcome::NotEnoughData => return vec![NOT_ENOUGH_DATA.to_string()],
        SalaryGapOutcome::Computed(gap) => gap,
    };

    let mut lines = vec![
        format!(
            "Average Salary for Men: {}",
            format_currency(currency, gap.male_avg)
        ),
        format!(
            "Average Salary for Women: {}",
            format_currency(currency, gap.female_avg)
        ),
    ];

    match (gap.gap_percent, gap.direction()) {
        (Some(percent), Some(direction)) => lines.push(format!(
            "Salary Gap: Women earn {} {} than men.",
            format_percent(percent.abs()),
            direction
        )),
        _ => lines.push(GAP_NOT_CALCULATED.to_string()),
    }

    lines
}

/// Lines for the leadership section.
pub fn leadership_lines(outcome: &LeadershipOutcome) -> Vec<String> {
    match outcome {
        LeadershipOutcome::NoData => vec![NO_LEADERSHIP_DATA.to_string()],
        LeadershipOutcome::Distribution(shares) => {
            let mut lines = vec![LEADERSHIP_HEADING.to_string()];
            lines.extend(
                shares
                    .iter()
                    .map(|s| format!("{}: {}", s.gender, format_percent(s.percent))),
            );
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{GenderShare, SalaryGap};

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0.0), "0.00");
        assert_eq!(format_thousands(999.999), "1,000.00");
        assert_eq!(format_thousands(100000.0), "100,000.00");
        assert_eq!(format_thousands(1234567.891), "1,234,567.89");
        assert_eq!(format_thousands(-45000.5), "-45,000.50");
        assert_eq!(format_thousands(-0.001), "0.00");
    }

    #[test]
    fn gap_lines_for_computed_gap() {
        let outcome = SalaryGapOutcome::Computed(SalaryGap::new(100000.0, 80000.0));
        assert_eq!(
            salary_gap_lines(&outcome, "KES"),
            vec![
                "Average Salary for Men: KES 100,000.00",
                "Average Salary for Women: KES 80,000.00",
                "Salary Gap: Women earn 20.00% less than men.",
            ]
        );
    }

    #[test]
    fn negative_gap_reports_absolute_value() {
        let outcome = SalaryGapOutcome::Computed(SalaryGap::new(50000.0, 60000.0));
        let lines = salary_gap_lines(&outcome, "KES");
        assert_eq!(lines[2], "Salary Gap: Women earn 20.00% more than men.");
    }

    #[test]
    fn undefined_gap_and_missing_data_messages() {
        let zero = SalaryGapOutcome::Computed(SalaryGap::new(0.0, 40000.0));
        assert_eq!(salary_gap_lines(&zero, "KES")[2], GAP_NOT_CALCULATED);

        assert_eq!(
            salary_gap_lines(&SalaryGapOutcome::NotEnoughData, "KES"),
            vec![NOT_ENOUGH_DATA]
        );
    }

    #[test]
    fn leadership_lines_list_each_gender() {
        let outcome = LeadershipOutcome::Distribution(vec![
            GenderShare {
                gender: "Female".into(),
                count: 2,
                percent: 200.0 / 3.0,
            },
            GenderShare {
                gender: "Male".into(),
                count: 1,
                percent: 100.0 / 3.0,
            },
        ]);

        assert_eq!(
            leadership_lines(&outcome),
            vec![LEADERSHIP_HEADING, "Female: 66.67%", "Male: 33.33%"]
        );
        assert_eq!(
            leadership_lines(&LeadershipOutcome::NoData),
            vec![NO_LEADERSHIP_DATA]
        );
    }
}
