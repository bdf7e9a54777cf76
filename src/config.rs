//! Report Configuration
//! Input location, column mapping and leadership allow-list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Optional override file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "gender_gap.json";

/// Default survey workbook.
pub const DEFAULT_INPUT_PATH: &str = "Kenya_Data_Professionals_Compensation_data.xlsx";

pub const GENDER_COL: &str = "Gender";
pub const JOB_LEVEL_COL: &str = "Job_Level";
pub const SALARY_COL: &str = "Salary";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    /// Exact source header -> canonical column name.
    pub column_mapping: BTreeMap<String, String>,
    /// Job levels counted as leadership roles (exact match).
    pub leadership_roles: Vec<String>,
    pub export_dir: PathBuf,
    pub currency: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let column_mapping = [
            ("What is your gender", GENDER_COL),
            ("What is your Level?", JOB_LEVEL_COL),
            (
                "What is your monthly Gross Salary in Kes per month?",
                SALARY_COL,
            ),
        ]
        .into_iter()
        .map(|(source, canonical)| (source.to_string(), canonical.to_string()))
        .collect();

        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            column_mapping,
            leadership_roles: vec![
                "Manager eg Manager of Analytics".to_string(),
                "Senior Level  eg Senior Data Analyst".to_string(),
                "Lead eg Lead Analyst".to_string(),
            ],
            export_dir: PathBuf::from("gender_gap_charts"),
            currency: "KES".to_string(),
        }
    }
}

impl ReportConfig {
    /// Read a JSON config file. Fields left out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if it exists, otherwise use defaults.
    /// A broken file is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}; falling back to defaults", e);
                Self::default()
            }
        }
    }
}
