//! Calendar grid for one month
//!
//! `render_month` lays the days of a month out in Sunday-first week rows and
//! attaches the events that fall on each day. It borrows the events rather
//! than cloning them, so a grid lives only as long as the collection it was
//! built from.

use chrono::{Local, NaiveDate};

use crate::models::{CalendarEvent, MonthCursor};

/// Column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A rendered month
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth<'a> {
    pub cursor: MonthCursor,
    pub weeks: Vec<Week<'a>>,
}

/// One row of the grid; every row has 7 cells except possibly the last
#[derive(Debug, Clone, PartialEq)]
pub struct Week<'a> {
    pub cells: Vec<DayCell<'a>>,
}

/// A grid cell
#[derive(Debug, Clone, PartialEq)]
pub enum DayCell<'a> {
    /// Padding before day 1
    Empty,
    Day(Day<'a>),
}

/// A populated day cell
#[derive(Debug, Clone, PartialEq)]
pub struct Day<'a> {
    pub date: NaiveDate,
    pub day: u32,
    pub is_today: bool,
    /// Events on this date, in collection order
    pub events: Vec<&'a CalendarEvent>,
}

impl<'a> Week<'a> {
    /// Cell at `weekday` (0 = Sunday)
    pub fn cell(&self, weekday: usize) -> Option<&DayCell<'a>> {
        self.cells.get(weekday)
    }
}

impl<'a> DayCell<'a> {
    pub fn as_day(&self) -> Option<&Day<'a>> {
        match self {
            DayCell::Day(day) => Some(day),
            DayCell::Empty => None,
        }
    }
}

impl<'a> CalendarMonth<'a> {
    /// Iterate over populated days in date order
    pub fn days(&self) -> impl Iterator<Item = &Day<'a>> {
        self.weeks
            .iter()
            .flat_map(|w| w.cells.iter())
            .filter_map(DayCell::as_day)
    }
}

/// Lay out `cursor`'s month with the events that fall on each day
pub fn render_month<'a>(
    cursor: MonthCursor,
    events: &'a [CalendarEvent],
    today: NaiveDate,
) -> CalendarMonth<'a> {
    let leading = cursor.first_weekday();
    let days_in_month = cursor.days_in_month();

    let mut cells: Vec<DayCell<'a>> = Vec::with_capacity((leading + days_in_month) as usize);
    cells.extend((0..leading).map(|_| DayCell::Empty));

    for day in 1..=days_in_month {
        let Some(date) = cursor.day(day) else {
            break;
        };
        cells.push(DayCell::Day(Day {
            date,
            day,
            is_today: date == today,
            events: events.iter().filter(|e| e.is_on(date)).collect(),
        }));
    }

    let weeks = cells
        .chunks(7)
        .map(|chunk| Week {
            cells: chunk.to_vec(),
        })
        .collect::<Vec<_>>();

    tracing::trace!(month = %cursor, rows = weeks.len(), "calendar rendered");

    CalendarMonth { cursor, weeks }
}

/// Lay out `cursor`'s month, marking today from the local clock
pub fn render_current<'a>(cursor: MonthCursor, events: &'a [CalendarEvent]) -> CalendarMonth<'a> {
    render_month(cursor, events, Local::now().date_naive())
}
