//! Commands accepted by the application state

use chrono::NaiveDate;

use super::draft::{EventDraft, ExpenseDraft};
use crate::models::{EventId, ExpenseId};

/// A user intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenExpenseForm,
    CancelExpenseForm,
    SubmitExpense(ExpenseDraft),
    DeleteExpense(ExpenseId),
    /// Select a calendar day, opening the event form for it
    ///
    /// `anchor` is the screen position the form should open at.
    SelectDay {
        date: NaiveDate,
        anchor: Option<(u16, u16)>,
    },
    CancelEventForm,
    SubmitEvent(EventDraft),
    DeleteEvent(EventId),
    PrevMonth,
    NextMonth,
    CurrentMonth,
}

/// What applying a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// Only transient UI state changed
    UiChanged,
    ExpenseCreated(ExpenseId),
    EventCreated(EventId),
    Deleted,
    /// The entity to delete did not exist
    NotFound,
}

impl Outcome {
    /// Check if a collection was modified
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::ExpenseCreated(_) | Self::EventCreated(_) | Self::Deleted
        )
    }
}
