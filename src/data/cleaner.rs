//! Cleaner Module
//! Drops unusable respondents and standardizes salary and gender values.

use crate::data::{CellValue, SurveyTable};
use serde::Serialize;

/// Row counts from one cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningSummary {
    pub loaded_rows: usize,
    pub missing_fields: usize,
    pub unparseable_salary: usize,
    pub retained_rows: usize,
}

impl CleaningSummary {
    pub fn dropped_rows(&self) -> usize {
        self.missing_fields + self.unparseable_salary
    }
}

/// Code points of the digit zero in every Unicode decimal-digit (Nd) block.
/// Each block holds the digits 0-9 contiguously.
const DECIMAL_ZEROS: [u32; 66] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Map any Unicode decimal digit to its ASCII form.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    if !c.is_numeric() {
        return None;
    }
    let code = c as u32;
    let zero = match DECIMAL_ZEROS.binary_search(&code) {
        Ok(i) => DECIMAL_ZEROS[i],
        Err(0) => return None,
        Err(i) => DECIMAL_ZEROS[i - 1],
    };
    let value = code - zero;
    (value < 10).then(|| char::from(b'0' + value as u8))
}

/// Parse a salary cell.
///
/// Text keeps only decimal digits (any script, folded to ASCII) and `.`
/// before parsing, so `"KES 45,000"` becomes `45000.0`. Numbers pass through
/// unchanged.
pub fn clean_salary(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(v) if !v.is_nan() => Some(*v),
        CellValue::Number(_) | CellValue::Empty => None,
        CellValue::Text(s) => {
            let digits: String = s
                .chars()
                .filter_map(|c| if c == '.' { Some(c) } else { ascii_digit(c) })
                .collect();
            digits.parse::<f64>().ok()
        }
    }
}

/// Titlecase form of a single character.
///
/// The Latin digraphs have a dedicated titlecase letter. For characters whose
/// uppercase expands to several letters (`ß` -> `SS`) only the first one is
/// kept uppercase.
fn titlecase(c: char) -> String {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}'.to_string(),
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}'.to_string(),
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}'.to_string(),
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}'.to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            match upper.next() {
                Some(first) => std::iter::once(first)
                    .chain(upper.flat_map(char::to_lowercase))
                    .collect(),
                None => c.to_string(),
            }
        }
    }
}

/// Trim and capitalize: first character titlecased, the rest lowercase.
pub fn normalize_gender(value: &str) -> String {
    let mut chars = value.trim().chars();
    match chars.next() {
        Some(first) => {
            let mut gender = titlecase(first);
            gender.extend(chars.flat_map(char::to_lowercase));
            gender
        }
        None => String::new(),
    }
}

/// Row filter and value standardization over the canonical columns.
pub struct Cleaner<'a> {
    gender_col: &'a str,
    salary_col: &'a str,
}

impl<'a> Cleaner<'a> {
    pub fn new(gender_col: &'a str, salary_col: &'a str) -> Self {
        Self {
            gender_col,
            salary_col,
        }
    }

    /// Return the cleaned table and how many rows each rule dropped.
    ///
    /// Retained rows carry `Salary` as `Number` and `Gender` as capitalized
    /// non-empty text. If either column is absent every row is dropped.
    pub fn clean(&self, table: &SurveyTable) -> (SurveyTable, CleaningSummary) {
        let mut summary = CleaningSummary {
            loaded_rows: table.row_count(),
            ..Default::default()
        };

        let (Some(gender_idx), Some(salary_idx)) = (
            table.column_index(self.gender_col),
            table.column_index(self.salary_col),
        ) else {
            log::warn!(
                "Missing {} or {} column, no rows can be analysed",
                self.gender_col,
                self.salary_col
            );
            summary.missing_fields = table.row_count();
            return (SurveyTable::new(table.columns().to_vec(), Vec::new()), summary);
        };

        let mut rows = Vec::with_capacity(table.row_count());
        for row in table.rows() {
            let gender_cell = &row[gender_idx];
            let salary_cell = &row[salary_idx];

            // Non-text gender cannot be capitalized; treat it as missing.
            let gender = gender_cell
                .as_text()
                .map(normalize_gender)
                .filter(|g| !g.is_empty());

            let Some(gender) = gender.filter(|_| !salary_cell.is_missing()) else {
                summary.missing_fields += 1;
                continue;
            };

            let Some(salary) = clean_salary(salary_cell) else {
                summary.unparseable_salary += 1;
                continue;
            };

            let mut cleaned = row.clone();
            cleaned[gender_idx] = CellValue::Text(gender);
            cleaned[salary_idx] = CellValue::Number(salary);
            rows.push(cleaned);
        }

        summary.retained_rows = rows.len();
        log::info!(
            "Cleaned survey: {} of {} rows retained ({} missing fields, {} unparseable salary)",
            summary.retained_rows,
            summary.loaded_rows,
            summary.missing_fields,
            summary.unparseable_salary
        );

        (SurveyTable::new(table.columns().to_vec(), rows), summary)
    }
}
