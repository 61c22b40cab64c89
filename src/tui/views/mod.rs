//! TUI Views module
//!
//! Contains the dashboard panels: summary cards, calendar, charts, expense
//! table and status bar.

pub mod calendar;
pub mod charts;
pub mod expenses;
pub mod status_bar;
pub mod summary;

use chrono::Local;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::reports::SpendingSummary;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());
    app.hits.clear();

    let expenses = app.expenses();
    let events = app.events();
    let summary = SpendingSummary::generate(&expenses);

    render_title(frame, app, layout.title);
    summary::render(frame, app, &summary, layout.cards);

    let grid = app.state.calendar(&events, Local::now().date_naive());
    calendar::render(frame, app, &grid, layout.calendar);

    charts::render_categories(frame, &summary, layout.category_chart);
    charts::render_monthly(frame, &summary, layout.monthly_chart);
    expenses::render(frame, app, &expenses, layout.expenses);
    status_bar::render(frame, app, layout.status_bar);

    render_dialog(frame, app);
}

fn render_title(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let line = Line::from(vec![
        Span::styled(
            " fintrack ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.state.cursor().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog() {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::AddEvent => {
            if let Some(form) = app.state.ui().event_form {
                dialogs::event::render(frame, app, form);
            }
        }
        ActiveDialog::None => {}
    }
}
