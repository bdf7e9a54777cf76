//! Field Normalizer Module
//! Renames survey question headers to canonical column names.

use crate::data::SurveyTable;
use std::collections::BTreeMap;

/// Exact-match header renaming. Values are never touched.
pub struct FieldNormalizer<'a> {
    mapping: &'a BTreeMap<String, String>,
}

impl<'a> FieldNormalizer<'a> {
    pub fn new(mapping: &'a BTreeMap<String, String>) -> Self {
        Self { mapping }
    }

    /// Return a copy of `table` with mapped headers renamed.
    /// Unmapped headers pass through; a missing source header is not an error.
    pub fn normalize(&self, table: &SurveyTable) -> SurveyTable {
        let columns = table
            .columns()
            .iter()
            .map(|name| self.mapping.get(name).unwrap_or(name).clone())
            .collect();

        SurveyTable::new(columns, table.rows().to_vec())
    }
}
