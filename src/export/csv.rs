//! CSV export of expenses and events

use std::io::Write;

use super::export_error;
use crate::error::TrackerResult;
use crate::storage::Storage;

/// Export all expenses to CSV
///
/// Columns: `id,date,description,category,payment_type,value`. Dates are ISO,
/// values are plain decimals and an uncategorized expense has an empty
/// category.
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> TrackerResult<usize> {
    let expenses = storage.expenses.get_all()?;
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(["id", "date", "description", "category", "payment_type", "value"])
        .map_err(export_error)?;

    for expense in &expenses {
        let value = expense.value.format_with_symbol("");
        csv.write_record([
            expense.id.as_uuid().to_string().as_str(),
            expense.date.format("%Y-%m-%d").to_string().as_str(),
            expense.description.as_str(),
            expense.category.map(|c| c.label()).unwrap_or(""),
            expense.payment_type.label(),
            value.as_str(),
        ])
        .map_err(export_error)?;
    }

    csv.flush().map_err(export_error)?;
    Ok(expenses.len())
}

/// Export all calendar events to CSV
///
/// Columns: `id,date,title,color`.
pub fn export_events_csv<W: Write>(storage: &Storage, writer: W) -> TrackerResult<usize> {
    let events = storage.events.get_all()?;
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(["id", "date", "title", "color"])
        .map_err(export_error)?;

    for event in &events {
        csv.write_record([
            event.id.as_uuid().to_string().as_str(),
            event.date.format("%Y-%m-%d").to_string().as_str(),
            event.title.as_str(),
            event.color.as_str(),
        ])
        .map_err(export_error)?;
    }

    csv.flush().map_err(export_error)?;
    Ok(events.len())
}
