//! Application state
//!
//! `AppState` pairs the storage-backed collections with the transient UI
//! state: which forms are open, the selected day and the displayed month.
//! Collections are reached through the services so every mutation is
//! persisted and audited the same way the CLI does it.

use chrono::NaiveDate;

use super::command::{Command, Outcome};
use crate::calendar::{render_month, CalendarMonth};
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::{CalendarEvent, Expense, MonthCursor};
use crate::reports::SpendingSummary;
use crate::services::{EventService, ExpenseService};
use crate::storage::Storage;

/// The open event form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventForm {
    /// Day the event will be created on
    pub date: NaiveDate,
    /// Screen position the form is drawn at
    pub anchor: Option<(u16, u16)>,
}

/// Transient UI state; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub expense_form_open: bool,
    pub event_form: Option<EventForm>,
    pub cursor: MonthCursor,
}

impl UiState {
    pub fn new(cursor: MonthCursor) -> Self {
        Self {
            expense_form_open: false,
            event_form: None,
            cursor,
        }
    }
}

/// Collections plus UI state, mutated only through [`AppState::apply`]
pub struct AppState<'a> {
    storage: &'a Storage,
    settings: Settings,
    ui: UiState,
}

impl<'a> AppState<'a> {
    /// Create state showing the current month
    pub fn new(storage: &'a Storage, settings: Settings) -> Self {
        Self::with_cursor(storage, settings, MonthCursor::current())
    }

    /// Create state showing a specific month
    pub fn with_cursor(storage: &'a Storage, settings: Settings, cursor: MonthCursor) -> Self {
        Self {
            storage,
            settings,
            ui: UiState::new(cursor),
        }
    }

    pub fn storage(&self) -> &'a Storage {
        self.storage
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// The displayed month
    pub fn cursor(&self) -> MonthCursor {
        self.ui.cursor
    }

    pub fn expenses(&self) -> TrackerResult<Vec<Expense>> {
        ExpenseService::new(self.storage).list_all()
    }

    pub fn events(&self) -> TrackerResult<Vec<CalendarEvent>> {
        EventService::new(self.storage).list_all()
    }

    /// Totals over every recorded expense
    pub fn summary(&self) -> TrackerResult<SpendingSummary> {
        Ok(SpendingSummary::generate(&self.expenses()?))
    }

    /// Calendar grid for the displayed month over a snapshot of `events`
    pub fn calendar<'e>(&self, events: &'e [CalendarEvent], today: NaiveDate) -> CalendarMonth<'e> {
        render_month(self.ui.cursor, events, today)
    }

    /// Apply a command
    ///
    /// Incomplete form submissions are ignored and leave the form open.
    /// Errors are only returned when persisting a change fails.
    pub fn apply(&mut self, command: Command) -> TrackerResult<Outcome> {
        let outcome = match command {
            Command::OpenExpenseForm => {
                self.ui.expense_form_open = true;
                Outcome::UiChanged
            }
            Command::CancelExpenseForm => {
                if !self.ui.expense_form_open {
                    return Ok(Outcome::Ignored);
                }
                self.ui.expense_form_open = false;
                Outcome::UiChanged
            }
            Command::SubmitExpense(draft) => {
                if !self.ui.expense_form_open {
                    return Ok(Outcome::Ignored);
                }
                let Some(input) = draft.to_input(&self.settings.date_format) else {
                    tracing::debug!("expense submission incomplete, ignored");
                    return Ok(Outcome::Ignored);
                };
                let expense = ExpenseService::new(self.storage).create(input)?;
                self.ui.expense_form_open = false;
                Outcome::ExpenseCreated(expense.id)
            }
            Command::DeleteExpense(id) => match ExpenseService::new(self.storage).delete(id)? {
                Some(_) => Outcome::Deleted,
                None => Outcome::NotFound,
            },
            Command::SelectDay { date, anchor } => {
                self.ui.event_form = Some(EventForm { date, anchor });
                Outcome::UiChanged
            }
            Command::CancelEventForm => {
                if self.ui.event_form.take().is_none() {
                    return Ok(Outcome::Ignored);
                }
                Outcome::UiChanged
            }
            Command::SubmitEvent(draft) => {
                let Some(form) = self.ui.event_form else {
                    return Ok(Outcome::Ignored);
                };
                let Some(input) = draft.to_input(form.date, &self.settings.default_event_color)
                else {
                    tracing::debug!("event submission without title, ignored");
                    return Ok(Outcome::Ignored);
                };
                let event = EventService::new(self.storage).create(input)?;
                self.ui.event_form = None;
                Outcome::EventCreated(event.id)
            }
            Command::DeleteEvent(id) => match EventService::new(self.storage).delete(id)? {
                Some(_) => Outcome::Deleted,
                None => Outcome::NotFound,
            },
            Command::PrevMonth => self.move_to(self.ui.cursor.prev()),
            Command::NextMonth => self.move_to(self.ui.cursor.next()),
            Command::CurrentMonth => self.move_to(MonthCursor::current()),
        };

        Ok(outcome)
    }

    fn move_to(&mut self, cursor: MonthCursor) -> Outcome {
        if cursor == self.ui.cursor {
            return Outcome::Ignored;
        }
        self.ui.cursor = cursor;
        Outcome::UiChanged
    }
}
