//! Application state for the TUI
//!
//! `App` wraps the shared [`AppState`] with what only the terminal needs:
//! focus, selections, form buffers and the clickable regions of the last
//! frame.

use chrono::{Datelike, Duration, Local, NaiveDate};
use ratatui::layout::Rect;

use crate::config::settings::Settings;
use crate::models::{CalendarEvent, EventId, Expense, ExpenseId};
use crate::state::{AppState, Command, Outcome};
use crate::storage::Storage;

use super::dialogs::event::EventFormState;
use super::dialogs::expense::ExpenseFormState;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Calendar,
    Expenses,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveDialog {
    None,
    Help,
    AddExpense,
    AddEvent,
}

/// What a click on a region of the screen does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A calendar day cell
    Day(NaiveDate),
    /// An event label inside a day cell
    Event(EventId),
    /// The delete marker of an expense row
    DeleteExpense(ExpenseId),
}

/// Main application state
pub struct App<'a> {
    pub state: AppState<'a>,

    /// Whether the app should quit
    pub should_quit: bool,

    pub focused_panel: FocusedPanel,

    /// Day highlighted in the calendar
    pub selected_date: NaiveDate,

    /// Index into the selected day's events
    pub selected_event_index: usize,

    /// Index into the expense table
    pub selected_expense_index: usize,

    pub show_help: bool,

    /// Status message to display
    pub status_message: Option<String>,

    pub expense_form: ExpenseFormState,

    pub event_form: EventFormState,

    /// Clickable regions from the last draw, in drawing order
    pub hits: Vec<(Rect, HitTarget)>,
}

impl<'a> App<'a> {
    /// Create a new App instance showing the current month
    pub fn new(storage: &'a Storage, settings: Settings) -> Self {
        let today = Local::now().date_naive();
        let expense_form = ExpenseFormState::new(today, &settings.date_format);
        let event_form = EventFormState::new(&settings.default_event_color);

        Self {
            state: AppState::new(storage, settings),
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            selected_date: today,
            selected_event_index: 0,
            selected_expense_index: 0,
            show_help: false,
            status_message: None,
            expense_form,
            event_form,
            hits: Vec::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn settings(&self) -> &Settings {
        self.state.settings()
    }

    /// The dialog on top, help first
    pub fn active_dialog(&self) -> ActiveDialog {
        if self.show_help {
            ActiveDialog::Help
        } else if self.state.ui().expense_form_open {
            ActiveDialog::AddExpense
        } else if self.state.ui().event_form.is_some() {
            ActiveDialog::AddEvent
        } else {
            ActiveDialog::None
        }
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog() != ActiveDialog::None
    }

    /// Toggle focus between calendar and expense table
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Calendar => FocusedPanel::Expenses,
            FocusedPanel::Expenses => FocusedPanel::Calendar,
        };
    }

    /// Snapshot of the expense collection; errors become a status message
    pub fn expenses(&mut self) -> Vec<Expense> {
        match self.state.expenses() {
            Ok(expenses) => expenses,
            Err(e) => {
                self.set_status(format!("Failed to read expenses: {}", e));
                Vec::new()
            }
        }
    }

    /// Snapshot of the event collection; errors become a status message
    pub fn events(&mut self) -> Vec<CalendarEvent> {
        match self.state.events() {
            Ok(events) => events,
            Err(e) => {
                self.set_status(format!("Failed to read events: {}", e));
                Vec::new()
            }
        }
    }

    /// Events on the selected day, in collection order
    pub fn selected_day_events(&mut self) -> Vec<CalendarEvent> {
        let date = self.selected_date;
        self.events().into_iter().filter(|e| e.is_on(date)).collect()
    }

    /// Apply a command, reporting the result in the status bar
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = match self.state.apply(command) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "command failed");
                self.set_status(format!("Error: {}", e));
                return Outcome::Ignored;
            }
        };

        match outcome {
            Outcome::ExpenseCreated(_) => {
                self.expense_form = ExpenseFormState::new(
                    Local::now().date_naive(),
                    &self.settings().date_format,
                );
                self.set_status("Expense added");
            }
            Outcome::EventCreated(_) => {
                self.event_form = EventFormState::new(&self.settings().default_event_color);
                self.set_status("Event added");
            }
            Outcome::Deleted => {
                self.set_status("Deleted");
                self.clamp_selections();
            }
            Outcome::NotFound => self.set_status("Nothing to delete"),
            Outcome::UiChanged | Outcome::Ignored => {}
        }

        outcome
    }

    /// Open the expense form with a fresh draft
    pub fn open_expense_form(&mut self) {
        self.expense_form =
            ExpenseFormState::new(Local::now().date_naive(), &self.settings().date_format);
        self.dispatch(Command::OpenExpenseForm);
    }

    /// Open the event form for `date`
    pub fn select_day(&mut self, date: NaiveDate, anchor: Option<(u16, u16)>) {
        self.set_selected_date(date);
        self.event_form = EventFormState::new(&self.settings().default_event_color);
        self.dispatch(Command::SelectDay { date, anchor });
    }

    /// Show the previous, next or current month
    pub fn change_month(&mut self, command: Command) {
        if self.dispatch(command) != Outcome::UiChanged {
            return;
        }
        let cursor = self.state.cursor();
        let day = self.selected_date.day().min(cursor.days_in_month());
        self.set_selected_date(cursor.day(day).unwrap_or_else(|| cursor.first_day()));
    }

    /// Move the selected day, turning the month when it leaves the grid
    pub fn move_selection(&mut self, days: i64) {
        let Some(target) = self.selected_date.checked_add_signed(Duration::days(days)) else {
            return;
        };

        let cursor = self.state.cursor();
        if !cursor.contains(target) {
            let command = if target < cursor.first_day() {
                Command::PrevMonth
            } else {
                Command::NextMonth
            };
            if self.dispatch(command) != Outcome::UiChanged {
                return;
            }
        }
        self.set_selected_date(target);
    }

    fn set_selected_date(&mut self, date: NaiveDate) {
        if self.selected_date != date {
            self.selected_event_index = 0;
        }
        self.selected_date = date;
    }

    /// Cycle through the events of the selected day
    pub fn next_event(&mut self) {
        let count = self.selected_day_events().len();
        if count > 0 {
            self.selected_event_index = (self.selected_event_index + 1) % count;
        }
    }

    /// Delete the highlighted event of the selected day
    pub fn delete_selected_event(&mut self) {
        let events = self.selected_day_events();
        match events.get(self.selected_event_index) {
            Some(event) => {
                self.dispatch(Command::DeleteEvent(event.id));
            }
            None => self.set_status("No event on this day"),
        }
    }

    /// Delete the highlighted expense row
    pub fn delete_selected_expense(&mut self) {
        let expenses = self.expenses();
        match expenses.get(self.selected_expense_index) {
            Some(expense) => {
                self.dispatch(Command::DeleteExpense(expense.id));
            }
            None => self.set_status("No expense selected"),
        }
    }

    pub fn move_expense_up(&mut self) {
        self.selected_expense_index = self.selected_expense_index.saturating_sub(1);
    }

    pub fn move_expense_down(&mut self) {
        let count = self.expenses().len();
        if self.selected_expense_index + 1 < count {
            self.selected_expense_index += 1;
        }
    }

    fn clamp_selections(&mut self) {
        let expense_count = self.expenses().len();
        self.selected_expense_index = self
            .selected_expense_index
            .min(expense_count.saturating_sub(1));

        let event_count = self.selected_day_events().len();
        self.selected_event_index = self.selected_event_index.min(event_count.saturating_sub(1));
    }

    /// Topmost clickable region at a screen position
    pub fn hit_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.hits
            .iter()
            .rev()
            .find(|(rect, _)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(_, target)| *target)
    }
}
