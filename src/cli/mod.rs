//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod event;
pub mod expense;
pub mod export;
pub mod report;

pub use event::{handle_event_command, EventCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use report::{handle_calendar_command, handle_history_command, handle_summary_command};

use crate::error::{TrackerError, TrackerResult};
use crate::models::MonthCursor;

/// Parse an optional `--month YYYY-MM` argument
pub(crate) fn parse_month_arg(month: Option<&str>) -> TrackerResult<Option<MonthCursor>> {
    month
        .map(|m| MonthCursor::parse(m).map_err(|e| TrackerError::Validation(e.to_string())))
        .transpose()
}
