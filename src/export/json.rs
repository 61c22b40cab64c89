//! JSON export functionality
//!
//! Exports both collections to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::export_error;
use crate::error::TrackerResult;
use crate::models::{CalendarEvent, Expense, Money};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub expenses: Vec<Expense>,

    pub events: Vec<CalendarEvent>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub event_count: usize,

    /// Sum of every expense value
    pub expense_total: Money,

    /// Date range of expenses (earliest)
    pub earliest_expense: Option<String>,

    /// Date range of expenses (latest)
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> TrackerResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let events = storage.events.get_all()?;

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            event_count: events.len(),
            expense_total: expenses.iter().map(|e| e.value).sum(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            events,
            metadata,
        })
    }
}

/// Export everything to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> TrackerResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(export_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::PaymentType;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        let date = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();

        for (day, cents) in [(20, 3000), (10, 5000)] {
            storage
                .expenses
                .insert(Expense::new(date(day), "x", None, PaymentType::Credit, Money::from_cents(cents)))
                .unwrap();
        }
        storage
            .events
            .insert(CalendarEvent::new(date(1), "New year", "#fbb6ce"))
            .unwrap();

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.event_count, 1);
        assert_eq!(export.metadata.expense_total, Money::from_cents(8000));
        assert_eq!(export.metadata.earliest_expense.as_deref(), Some("2025-01-10"));
        assert_eq!(export.metadata.latest_expense.as_deref(), Some("2025-01-20"));
    }

    #[test]
    fn test_export_json_output() {
        let (_temp_dir, storage) = create_test_storage();

        let mut output = Vec::new();
        export_full_json(&storage, &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert!(value["expenses"].as_array().unwrap().is_empty());
        assert!(value["events"].as_array().unwrap().is_empty());
    }
}
