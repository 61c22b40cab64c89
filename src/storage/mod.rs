//! Storage layer for fintrack
//!
//! Two JSON records, `expenses.json` and `events.json`, each holding one
//! full collection. Records are read once at startup and rewritten in full
//! after every mutation.

pub mod events;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use events::EventRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
    pub events: EventRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            events: EventRepository::new(paths.events_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load both collections from disk
    pub fn load_all(&mut self) -> Result<(), TrackerError> {
        self.expenses.load()?;
        self.events.load()?;
        Ok(())
    }

    /// Save both collections to disk
    pub fn save_all(&self) -> Result<(), TrackerError> {
        self.expenses.save()?;
        self.events.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// The audit logger backing this storage
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record the creation of an entity
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), TrackerError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record the deletion of an entity
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), TrackerError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

/// Map a poisoned lock into a storage error
pub(crate) fn lock_error<E: std::fmt::Display>(err: E) -> TrackerError {
    TrackerError::Storage(format!("Failed to acquire lock: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarEvent, Expense, Money, PaymentType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_all_and_load_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();

        let storage = Storage::new(paths.clone()).unwrap();
        storage
            .expenses
            .insert(Expense::new(date, "Bus", None, PaymentType::Debit, Money::from_cents(450)))
            .unwrap();
        storage
            .events
            .insert(CalendarEvent::new(date, "Trip", "#fbb6ce"))
            .unwrap();
        storage.save_all().unwrap();

        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.expenses.count().unwrap(), 1);
        assert_eq!(reloaded.events.count().unwrap(), 1);
    }

    #[test]
    fn test_corrupt_record_fails_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        std::fs::write(paths.events_file(), "[[[").unwrap();

        let err = storage.load_all().unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
    }
}
