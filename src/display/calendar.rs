//! Plain-text calendar grid
//!
//! Each cell is 10 columns wide: the day number, a `*` marking today, and
//! the first event title. Days with more events show a `+N` suffix.

use super::truncate;
use crate::calendar::{CalendarMonth, DayCell, WEEKDAY_LABELS};

const CELL_WIDTH: usize = 10;

/// Render a calendar month as text
pub fn format_calendar(month: &CalendarMonth<'_>) -> String {
    let mut output = String::new();

    let title = month.cursor.to_string();
    let width = CELL_WIDTH * 7 + 6;
    output.push_str(&format!("{:^width$}\n", title, width = width));

    let header: Vec<String> = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{:<w$}", label, w = CELL_WIDTH))
        .collect();
    output.push_str(header.join(" ").trim_end());
    output.push('\n');
    output.push_str(&"-".repeat(width));
    output.push('\n');

    for week in &month.weeks {
        let numbers: Vec<String> = week.cells.iter().map(day_label).collect();
        output.push_str(numbers.join(" ").trim_end());
        output.push('\n');

        let titles: Vec<String> = week.cells.iter().map(event_label).collect();
        let titles = titles.join(" ");
        if !titles.trim().is_empty() {
            output.push_str(titles.trim_end());
            output.push('\n');
        }
    }

    output
}

fn day_label(cell: &DayCell<'_>) -> String {
    let text = match cell {
        DayCell::Empty => String::new(),
        DayCell::Day(day) if day.is_today => format!("{:>2}*", day.day),
        DayCell::Day(day) => format!("{:>2}", day.day),
    };
    format!("{:<w$}", text, w = CELL_WIDTH)
}

fn event_label(cell: &DayCell<'_>) -> String {
    let text = match cell.as_day() {
        Some(day) => match day.events.as_slice() {
            [] => String::new(),
            [only] => truncate(&only.title, CELL_WIDTH),
            [first, rest @ ..] => {
                let suffix = format!("+{}", rest.len());
                let room = CELL_WIDTH - suffix.len();
                format!("{}{}", truncate(&first.title, room), suffix)
            }
        },
        None => String::new(),
    };
    format!("{:<w$}", text, w = CELL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::render_month;
    use crate::models::{CalendarEvent, MonthCursor};
    use chrono::NaiveDate;

    #[test]
    fn test_format_calendar() {
        let date = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
        let events = vec![
            CalendarEvent::new(date(10), "Rent", "#9f7aea"),
            CalendarEvent::new(date(10), "Gym", "#9f7aea"),
            CalendarEvent::new(date(20), "Dentist", "#9f7aea"),
        ];
        let cursor = MonthCursor::new(2025, 0).unwrap();
        let text = format_calendar(&render_month(cursor, &events, date(15)));

        assert!(text.contains("January 2025"));
        assert!(text.starts_with(' '));
        assert!(text.contains("Sun"));
        assert!(text.contains("15*"));
        assert!(text.contains("Rent+1"));
        assert!(text.contains("Dentist"));
        assert!(text.contains("31"));
    }
}
