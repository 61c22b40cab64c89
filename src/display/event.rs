//! Calendar event display formatting

use super::truncate;
use crate::config::settings::Settings;
use crate::models::CalendarEvent;

/// Format events as a table
pub fn format_event_list(events: &[CalendarEvent], settings: &Settings) -> String {
    if events.is_empty() {
        return "No events found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:12} {:10} {:30} {:8}\n", "ID", "Date", "Title", "Color"));
    output.push_str(&"-".repeat(63));
    output.push('\n');

    for event in events {
        output.push_str(&format!(
            "{:12} {:10} {:30} {:8}\n",
            event.id.to_string(),
            event.date.format(&settings.date_format).to_string(),
            truncate(&event.title, 30),
            event.color
        ));
    }

    output
}

/// Format event details for display
pub fn format_event_details(event: &CalendarEvent, settings: &Settings) -> String {
    format!(
        "Event: {}\nDate:  {}\nTitle: {}\nColor: {}\n",
        event.id,
        event.date.format(&settings.date_format),
        event.title,
        event.color
    )
}
