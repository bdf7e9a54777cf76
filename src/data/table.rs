//! Survey Table Module
//! In-memory representation of loosely typed spreadsheet rows.

use polars::prelude::*;
use std::fmt;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// `Empty` and `Number(NaN)` both count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(v) => v.is_nan(),
            CellValue::Text(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{}", v),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Empty => Ok(()),
        }
    }
}

/// Ordered rows sharing one column set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl SurveyTable {
    /// Build a table, padding or truncating each row to the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` in column `name`, `None` if the column is absent.
    pub fn cell(&self, row: usize, name: &str) -> Option<&CellValue> {
        let idx = self.column_index(name)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// Build a cleaned frame with `Gender`, `Job_Level` and `Salary` columns.
    ///
    /// Rows without text gender or numeric salary are skipped, so this is
    /// only lossless on a table that already went through the cleaner.
    pub fn to_frame(
        &self,
        gender_col: &str,
        job_level_col: &str,
        salary_col: &str,
    ) -> PolarsResult<DataFrame> {
        let mut genders: Vec<String> = Vec::new();
        let mut job_levels: Vec<Option<String>> = Vec::new();
        let mut salaries: Vec<f64> = Vec::new();

        for i in 0..self.row_count() {
            let gender = self.cell(i, gender_col).and_then(CellValue::as_text);
            let salary = self.cell(i, salary_col).and_then(CellValue::as_number);

            if let (Some(g), Some(s)) = (gender, salary) {
                let level = self
                    .cell(i, job_level_col)
                    .filter(|c| !c.is_missing())
                    .map(|c| c.to_string());
                genders.push(g.to_string());
                job_levels.push(level);
                salaries.push(s);
            }
        }

        DataFrame::new(vec![
            Column::new(gender_col.into(), genders),
            Column::new(job_level_col.into(), job_levels),
            Column::new(salary_col.into(), salaries),
        ])
    }
}
