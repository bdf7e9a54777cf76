//! Data module - survey loading, header normalization and cleaning

mod cleaner;
#[cfg(test)]
pub(crate) mod fixtures;
mod loader;
mod normalizer;
mod table;

pub use cleaner::{Cleaner, CleaningSummary};
pub use loader::{LoadError, SurveyLoader};
pub use normalizer::FieldNormalizer;
pub use table::{CellValue, SurveyTable};
