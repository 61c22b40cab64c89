//! Export module for fintrack
//!
//! Provides data export in multiple formats:
//! - CSV: expenses or events (spreadsheet-compatible)
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_events_csv, export_expenses_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

use crate::error::TrackerError;

pub(crate) fn export_error<E: std::fmt::Display>(err: E) -> TrackerError {
    TrackerError::Export(err.to_string())
}
