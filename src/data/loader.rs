//! Survey Data Loader Module
//! Reads workbooks with calamine and CSV files with Polars into a `SurveyTable`.

use crate::data::{CellValue, SurveyTable};
use calamine::{open_workbook_auto, Data, Reader};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("No worksheet found in {0}")]
    NoWorksheet(PathBuf),
    #[error("No header row in {0}")]
    NoHeader(PathBuf),
}

/// Workbook extensions handled by calamine.
const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Loads survey spreadsheets from disk.
pub struct SurveyLoader;

impl SurveyLoader {
    /// Load a table, choosing the reader from the file extension.
    pub fn load(path: &Path) -> Result<SurveyTable, LoadError> {
        if !path.is_file() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let table = if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
            Self::load_workbook(path)?
        } else if ext == "csv" {
            Self::load_csv(path)?
        } else {
            return Err(LoadError::UnsupportedFormat(path.to_path_buf()));
        };

        log::info!(
            "Loaded {} rows, {} columns from {}",
            table.row_count(),
            table.columns().len(),
            path.display()
        );
        Ok(table)
    }

    /// Read the first worksheet; its first row is the header.
    pub fn load_workbook(path: &Path) -> Result<SurveyTable, LoadError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| LoadError::NoWorksheet(path.to_path_buf()))??;

        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or_else(|| LoadError::NoHeader(path.to_path_buf()))?;
        let columns: Vec<String> = header.iter().map(|cell| cell.to_string()).collect();

        let rows = rows
            .map(|row| row.iter().map(Self::workbook_cell).collect())
            .collect();

        Ok(SurveyTable::new(columns, rows))
    }

    /// Read a CSV file with every column as text; salary coercion happens in
    /// the cleaner.
    pub fn load_csv(path: &Path) -> Result<SurveyTable, LoadError> {
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        Self::from_dataframe(&df)
    }

    fn from_dataframe(df: &DataFrame) -> Result<SurveyTable, LoadError> {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows = vec![Vec::with_capacity(columns.len()); df.height()];
        for column in df.get_columns() {
            for (i, row) in rows.iter_mut().enumerate() {
                row.push(Self::frame_cell(column.get(i)?));
            }
        }

        Ok(SurveyTable::new(columns, rows))
    }

    fn workbook_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Int(v) => CellValue::Number(*v as f64),
            Data::Float(v) => CellValue::Number(*v),
            Data::String(s) if s.is_empty() => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Empty | Data::Error(_) => CellValue::Empty,
            other => CellValue::Text(other.to_string()),
        }
    }

    fn frame_cell(value: AnyValue<'_>) -> CellValue {
        match value {
            AnyValue::Null => CellValue::Empty,
            AnyValue::String(s) => CellValue::Text(s.to_string()),
            AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
            AnyValue::Boolean(b) => CellValue::Text(b.to_string()),
            other => match other.extract::<f64>() {
                Some(v) => CellValue::Number(v),
                None => CellValue::Text(other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{write_workbook, XlsxCell};
    use crate::data::Cleaner;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.xlsx");
        assert!(matches!(SurveyLoader::load(&path), Err(LoadError::NotFound(_))));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(matches!(
            SurveyLoader::load(file.path()),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn garbage_workbook_fails_to_load() {
        let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        file.write_all(b"definitely not a zip archive").unwrap();
        assert!(matches!(
            SurveyLoader::load(file.path()),
            Err(LoadError::Workbook(_))
        ));
    }

    #[test]
    fn csv_cells_keep_their_kind() {
        let file = write_csv(
            "What is your gender,Salary,Note\n\
             Male,100000,\n\
             Female,\"KES 45,000\",ok\n",
        );

        let table = SurveyLoader::load(file.path()).unwrap();
        assert_eq!(table.columns(), &["What is your gender", "Salary", "Note"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.cell(0, "What is your gender"),
            Some(&CellValue::Text("Male".to_string()))
        );
        assert_eq!(
            table.cell(0, "Salary"),
            Some(&CellValue::Text("100000".to_string()))
        );
        assert_eq!(
            table.cell(1, "Salary"),
            Some(&CellValue::Text("KES 45,000".to_string()))
        );
        assert_eq!(table.cell(0, "Note"), Some(&CellValue::Empty));
    }

    #[test]
    fn late_text_salary_is_kept_verbatim() {
        let mut contents = String::from("Gender,Salary\n");
        for _ in 0..12_000 {
            contents.push_str("Male,52000\n");
        }
        contents.push_str("Female,\"KES 48,000\"\n");
        let file = write_csv(&contents);

        let table = SurveyLoader::load(file.path()).unwrap();
        assert_eq!(table.row_count(), 12_001);
        assert_eq!(
            table.cell(12_000, "Salary"),
            Some(&CellValue::Text("KES 48,000".to_string()))
        );

        let (cleaned, summary) = Cleaner::new("Gender", "Salary").clean(&table);
        assert_eq!(summary.dropped_rows(), 0);
        assert_eq!(cleaned.cell(12_000, "Salary"), Some(&CellValue::Number(48000.0)));
    }

    #[test]
    fn first_worksheet_row_is_the_header() {
        let file = write_workbook(&[
            vec![
                XlsxCell::Text("What is your gender"),
                XlsxCell::Text("Salary"),
                XlsxCell::Text("Remote"),
                XlsxCell::Text("Note"),
            ],
            vec![
                XlsxCell::Text("Male"),
                XlsxCell::Number(100000.0),
                XlsxCell::Bool(true),
                XlsxCell::Text("ok"),
            ],
            vec![
                XlsxCell::Text("Female"),
                XlsxCell::Text("KES 45,000"),
                XlsxCell::Blank,
                XlsxCell::Text(""),
            ],
            vec![XlsxCell::Text("female"), XlsxCell::Number(48000.5)],
        ]);

        let table = SurveyLoader::load(file.path()).unwrap();
        assert_eq!(table.columns(), &["What is your gender", "Salary", "Remote", "Note"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.rows()[0],
            vec![
                CellValue::Text("Male".into()),
                CellValue::Number(100000.0),
                CellValue::Text("true".into()),
                CellValue::Text("ok".into()),
            ]
        );
        assert_eq!(
            table.rows()[1],
            vec![
                CellValue::Text("Female".into()),
                CellValue::Text("KES 45,000".into()),
                CellValue::Empty,
                CellValue::Empty,
            ]
        );
        // Short rows are padded to the header width
        assert_eq!(
            table.rows()[2],
            vec![
                CellValue::Text("female".into()),
                CellValue::Number(48000.5),
                CellValue::Empty,
                CellValue::Empty,
            ]
        );
    }

    #[test]
    fn workbook_cells_map_to_cell_values() {
        assert_eq!(SurveyLoader::workbook_cell(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(
            SurveyLoader::workbook_cell(&Data::String(String::new())),
            CellValue::Empty
        );
        assert_eq!(
            SurveyLoader::workbook_cell(&Data::String("Male".into())),
            CellValue::Text("Male".into())
        );
        assert_eq!(SurveyLoader::workbook_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(
            SurveyLoader::workbook_cell(&Data::Bool(true)),
            CellValue::Text("true".into())
        );
    }
}
