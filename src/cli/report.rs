//! Read-only CLI commands: summary, calendar and history

use super::parse_month_arg;
use crate::calendar::render_current;
use crate::config::settings::Settings;
use crate::display::format_calendar;
use crate::error::TrackerResult;
use crate::models::MonthCursor;
use crate::reports::SpendingSummary;
use crate::services::{EventService, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Print spending totals, optionally limited to one month
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> TrackerResult<()> {
    let mut filter = ExpenseFilter::new();
    if let Some(month) = parse_month_arg(month.as_deref())? {
        filter = filter.month(month);
    }

    let expenses = ExpenseService::new(storage).list(&filter)?;
    let summary = SpendingSummary::generate(&expenses);
    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print the calendar grid for a month (default: current)
pub fn handle_calendar_command(storage: &Storage, month: Option<String>) -> TrackerResult<()> {
    let cursor = parse_month_arg(month.as_deref())?.unwrap_or_else(MonthCursor::current);
    let events = EventService::new(storage).list_for_month(cursor)?;
    print!("{}", format_calendar(&render_current(cursor, &events)));
    Ok(())
}

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> TrackerResult<()> {
    let entries = storage.audit().read_recent(count)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
