//! Display formatting for terminal output
//!
//! Plain-text renderings of expenses, events and the calendar grid for the
//! CLI. Amounts and dates follow the user's settings.

pub mod calendar;
pub mod event;
pub mod expense;

pub use calendar::format_calendar;
pub use event::{format_event_details, format_event_list};
pub use expense::{format_expense_details, format_expense_list, format_expense_row};

/// Truncate to `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 10), "a longe...");
        assert_eq!(truncate("açaí e pão de queijo", 8), "açaí ...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
