//! Calendar event model
//!
//! A user-created annotation attached to a single calendar day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EventId;

/// An event shown on the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique identifier
    pub id: EventId,

    /// Title shown inside the day cell
    pub title: String,

    /// Display color (`#rrggbb`)
    pub color: String,

    /// Day the event belongs to
    pub date: NaiveDate,

    /// When the event was created
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Create a new event with a fresh ID
    pub fn new(date: NaiveDate, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            title: title.into(),
            color: color.into(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Check whether the event falls on the given day
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        let event = CalendarEvent::new(date, "Dinner", "#9f7aea");

        assert!(event.is_on(date));
        assert!(!event.is_on(date.succ_opt().unwrap()));
        assert_eq!(event.to_string(), "2025-02-14 Dinner");
    }

    #[test]
    fn test_serialization_round_trip() {
        let event = CalendarEvent::new(
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
            "Dinner",
            "#9f7aea",
        );
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"date\":\"2025-02-14\""));
        let back: CalendarEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
