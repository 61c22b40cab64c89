//! Form drafts
//!
//! A draft holds the raw text of a form. Turning it into service input is
//! all-or-nothing: any missing or unparseable required field yields `None`.

use chrono::NaiveDate;

use crate::models::{Category, Money, PaymentType};
use crate::services::{CreateEventInput, CreateExpenseInput};

/// Raw fields of the expense form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub date: String,
    pub description: String,
    /// Empty means uncategorized
    pub category: String,
    pub payment_type: String,
    pub value: String,
}

/// Raw fields of the event form; the date comes from the selected day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    /// Empty means the configured default color
    pub color: String,
}

/// Parse a date typed by the user
///
/// ISO `YYYY-MM-DD` is always accepted, followed by `display_format`.
pub fn parse_date(input: &str, display_format: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, display_format))
        .ok()
}

impl ExpenseDraft {
    /// Convert to service input if every required field is present and valid
    pub fn to_input(&self, date_format: &str) -> Option<CreateExpenseInput> {
        let date = parse_date(&self.date, date_format)?;

        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }

        let category = match self.category.trim() {
            "" => None,
            other => Some(other.parse::<Category>().ok()?),
        };

        let payment_type = self.payment_type.parse::<PaymentType>().ok()?;

        let value = Money::parse(&self.value).ok()?;
        if value.is_negative() {
            return None;
        }

        Some(CreateExpenseInput {
            date,
            description: description.to_string(),
            category,
            payment_type,
            value,
        })
    }
}

impl EventDraft {
    /// Convert to service input for `date`, if the title is present
    pub fn to_input(&self, date: NaiveDate, default_color: &str) -> Option<CreateEventInput> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }

        let color = match self.color.trim() {
            "" => default_color,
            color => color,
        };

        Some(CreateEventInput {
            date,
            title: title.to_string(),
            color: color.to_string(),
        })
    }
}
