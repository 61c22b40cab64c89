//! Calendar event service

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CalendarEvent, EventId, MonthCursor};
use crate::storage::Storage;

/// Service for calendar event management
pub struct EventService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new event
#[derive(Debug, Clone)]
pub struct CreateEventInput {
    pub date: NaiveDate,
    pub title: String,
    pub color: String,
}

impl<'a> EventService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an event and persist the collection
    pub fn create(&self, input: CreateEventInput) -> TrackerResult<CalendarEvent> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(TrackerError::Validation("Event title cannot be empty".into()));
        }

        let color = input.color.trim();
        if color.is_empty() {
            return Err(TrackerError::Validation("Event color cannot be empty".into()));
        }

        let event = CalendarEvent::new(input.date, title, color);

        self.storage.events.insert(event.clone())?;

        if let Err(e) = self.storage.log_create(
            EntityType::Event,
            event.id.to_string(),
            Some(event.title.clone()),
            &event,
        ) {
            tracing::warn!(error = %e, event_id = %event.id, "audit entry not written");
        }

        tracing::info!(event_id = %event.id, date = %event.date, "event created");
        Ok(event)
    }

    pub fn get(&self, id: EventId) -> TrackerResult<Option<CalendarEvent>> {
        self.storage.events.get(id)
    }

    /// Find an event by full or short ID
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<CalendarEvent>> {
        self.storage.events.find(identifier)
    }

    pub fn list_all(&self) -> TrackerResult<Vec<CalendarEvent>> {
        self.storage.events.get_all()
    }

    pub fn list_for_date(&self, date: NaiveDate) -> TrackerResult<Vec<CalendarEvent>> {
        self.storage.events.get_by_date(date)
    }

    pub fn list_for_month(&self, month: MonthCursor) -> TrackerResult<Vec<CalendarEvent>> {
        self.storage.events.get_by_month(month)
    }

    /// Delete an event by ID
    ///
    /// Returns the removed event, or `None` if no event had that ID.
    pub fn delete(&self, id: EventId) -> TrackerResult<Option<CalendarEvent>> {
        let Some(event) = self.storage.events.delete(id)? else {
            tracing::debug!(event_id = %id, "delete ignored, event not found");
            return Ok(None);
        };

        if let Err(e) = self.storage.log_delete(
            EntityType::Event,
            event.id.to_string(),
            Some(event.title.clone()),
            &event,
        ) {
            tracing::warn!(error = %e, event_id = %event.id, "audit entry not written");
        }

        tracing::info!(event_id = %event.id, "event deleted");
        Ok(Some(event))
    }

    /// Delete an event by full or short ID, failing if none matches
    pub fn delete_by_identifier(&self, identifier: &str) -> TrackerResult<CalendarEvent> {
        let event = self
            .find(identifier)?
            .ok_or_else(|| TrackerError::event_not_found(identifier))?;

        self.delete(event.id)?
            .ok_or_else(|| TrackerError::event_not_found(identifier))
    }
}
