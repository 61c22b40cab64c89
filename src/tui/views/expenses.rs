//! Expense table
//!
//! One row per expense in insertion order, with a clickable delete marker
//! in the last column.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::models::Expense;
use crate::tui::app::{App, FocusedPanel, HitTarget};

const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(10),
    Constraint::Min(16),
    Constraint::Length(10),
    Constraint::Length(7),
    Constraint::Length(14),
    Constraint::Length(3),
];

/// Render the expense table
pub fn render(frame: &mut Frame, app: &mut App, expenses: &[Expense], area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Expenses;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Expenses ({}) ", expenses.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let settings = app.settings();
    let header = Row::new(["Date", "Description", "Category", "Type", "Value", ""])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(expense.date.format(&settings.date_format).to_string()),
                Cell::from(expense.description.clone()),
                Cell::from(expense.category.map(|c| c.label()).unwrap_or("-")),
                Cell::from(expense.payment_type.label()),
                Cell::from(expense.value.format_with_symbol(&settings.currency_symbol)),
                Cell::from("✕").style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(block)
        .highlight_style(if focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        });

    let mut state = TableState::default();
    if !expenses.is_empty() {
        state.select(Some(app.selected_expense_index.min(expenses.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);

    // Delete markers: the table scrolls so the selected row stays visible
    let visible_rows = inner.height.saturating_sub(1) as usize;
    let offset = state.offset();
    let marker_x = inner.right().saturating_sub(3);
    for (line, expense) in expenses.iter().skip(offset).take(visible_rows).enumerate() {
        let rect = Rect::new(marker_x, inner.y + 1 + line as u16, 3, 1);
        app.hits.push((rect, HitTarget::DeleteExpense(expense.id)));
    }
}
