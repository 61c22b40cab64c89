//! Calendar event repository for JSON storage
//!
//! Manages loading and saving calendar events to events.json.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::TrackerError;
use crate::models::{CalendarEvent, EventId, MonthCursor};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

/// Serializable event data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EventData {
    #[serde(default)]
    events: Vec<CalendarEvent>,
}

/// Repository for calendar event persistence
pub struct EventRepository {
    path: PathBuf,
    data: RwLock<Vec<CalendarEvent>>,
}

impl EventRepository {
    /// Create a new event repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load events from disk, replacing anything held in memory
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: EventData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_error)?;

        tracing::debug!(count = file_data.events.len(), "loaded calendar events");
        *data = file_data.events;
        Ok(())
    }

    /// Save the full collection to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self.data.read().map_err(lock_error)?;

        let file_data = EventData {
            events: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an event by ID
    pub fn get(&self, id: EventId) -> Result<Option<CalendarEvent>, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all events in insertion order
    pub fn get_all(&self) -> Result<Vec<CalendarEvent>, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.clone())
    }

    /// Events on a single day, in insertion order
    pub fn get_by_date(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.iter().filter(|e| e.is_on(date)).cloned().collect())
    }

    /// Events within a month, ordered by date then insertion
    pub fn get_by_month(&self, month: MonthCursor) -> Result<Vec<CalendarEvent>, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        let mut events: Vec<_> = data
            .iter()
            .filter(|e| month.contains(e.date))
            .cloned()
            .collect();
        // Stable sort keeps insertion order within a day
        events.sort_by_key(|e| e.date);
        Ok(events)
    }

    /// Find the first event whose ID matches a user-supplied identifier
    pub fn find(&self, identifier: &str) -> Result<Option<CalendarEvent>, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.iter().find(|e| e.id.matches(identifier)).cloned())
    }

    /// Append an event and write the collection
    ///
    /// Memory only changes once the file has been replaced, so a failed
    /// write leaves both sides as they were.
    pub fn insert(&self, event: CalendarEvent) -> Result<(), TrackerError> {
        let mut data = self.data.write().map_err(lock_error)?;

        let mut file_data = EventData {
            events: data.clone(),
        };
        file_data.events.push(event);
        write_json_atomic(&self.path, &file_data)?;

        *data = file_data.events;
        Ok(())
    }

    /// Remove an event and write the collection
    ///
    /// Returns `None` without touching the file when the ID is unknown.
    pub fn delete(&self, id: EventId) -> Result<Option<CalendarEvent>, TrackerError> {
        let mut data = self.data.write().map_err(lock_error)?;

        let Some(index) = data.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let mut file_data = EventData {
            events: data.clone(),
        };
        let removed = file_data.events.remove(index);
        write_json_atomic(&self.path, &file_data)?;

        *data = file_data.events;
        Ok(Some(removed))
    }

    /// Count events
    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
