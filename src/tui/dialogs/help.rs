//! Help dialog
//!
//! Lists keyboard and mouse shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("a", "Add an expense"),
        key_line("[ / ]", "Previous/next month"),
        key_line("t", "Jump to the current month"),
        key_line("Tab", "Switch between calendar and expenses"),
        Line::from(""),
        section("Calendar"),
        Line::from(""),
        key_line("arrows/hjkl", "Move the selected day"),
        key_line("Enter", "Add an event on the selected day"),
        key_line("e", "Highlight the next event of the day"),
        key_line("x", "Delete the highlighted event"),
        key_line("click day", "Add an event on that day"),
        key_line("click event", "Delete that event"),
        Line::from(""),
        section("Expenses"),
        Line::from(""),
        key_line("j/k", "Move selection down/up"),
        key_line("x / Del", "Delete the selected expense"),
        key_line("click ✕", "Delete that expense"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>14}", key), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::raw(description),
    ])
}
