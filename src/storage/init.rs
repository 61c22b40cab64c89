//! First-run initialization
//!
//! Creates the directory layout and empty collection files so the data
//! directory is self-describing before anything has been recorded.

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

use super::Storage;

/// Create directories and any missing collection files
///
/// Existing records are left untouched, so running this twice is harmless.
pub fn initialize_storage(paths: &TrackerPaths) -> Result<(), TrackerError> {
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    if !paths.expenses_file().exists() {
        storage.expenses.save()?;
    }
    if !paths.events_file().exists() {
        storage.events.save()?;
    }

    tracing::info!(base_dir = %paths.base_dir().display(), "storage initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarEvent, MonthCursor};
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        assert!(paths.expenses_file().exists());
        assert!(paths.events_file().exists());
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::new(paths.clone()).unwrap();
        let date = MonthCursor::parse("2025-01").unwrap().first_day();
        storage
            .events
            .insert(CalendarEvent::new(date, "Keep me", "#fbb6ce"))
            .unwrap();
        storage.events.save().unwrap();

        initialize_storage(&paths).unwrap();

        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.events.count().unwrap(), 1);
    }
}
