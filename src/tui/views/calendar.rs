//! Calendar panel
//!
//! Draws the month grid and records a clickable region for every day cell
//! and every event label inside it. Event regions are pushed after their
//! day so a click on an event wins over the day beneath it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calendar::{CalendarMonth, DayCell, WEEKDAY_LABELS};
use crate::display::truncate;
use crate::tui::app::{App, FocusedPanel, HitTarget};
use crate::tui::dialogs::event::hex_color;

/// Render the calendar panel
pub fn render(frame: &mut Frame, app: &mut App, grid: &CalendarMonth<'_>, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Calendar;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" {} ", grid.cursor))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 14 || inner.height < 3 {
        return;
    }

    let cell_width = inner.width / 7;

    // Weekday header
    for (i, label) in WEEKDAY_LABELS.iter().enumerate() {
        let header = Rect::new(inner.x + i as u16 * cell_width, inner.y, cell_width, 1);
        frame.render_widget(
            Paragraph::new(*label).style(Style::default().fg(Color::Gray)),
            header,
        );
    }

    let rows = grid.weeks.len().max(1) as u16;
    let cell_height = (inner.height - 1) / rows;
    if cell_height == 0 {
        return;
    }

    let selected_event = app.selected_event_index;

    for (row, week) in grid.weeks.iter().enumerate() {
        for (col, cell) in week.cells.iter().enumerate() {
            let DayCell::Day(day) = cell else {
                continue;
            };

            let rect = Rect::new(
                inner.x + col as u16 * cell_width,
                inner.y + 1 + row as u16 * cell_height,
                cell_width,
                cell_height,
            );
            app.hits.push((rect, HitTarget::Day(day.date)));

            let is_selected = day.date == app.selected_date;
            let mut number_style = Style::default();
            if day.is_today {
                number_style = number_style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if is_selected {
                number_style = number_style.add_modifier(Modifier::REVERSED);
            }
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(format!("{:>2}", day.day), number_style))),
                Rect::new(rect.x, rect.y, rect.width, 1),
            );

            // Event labels on the remaining lines of the cell
            let label_width = rect.width.saturating_sub(1) as usize;
            for (i, event) in day.events.iter().enumerate() {
                let line_offset = 1 + i as u16;
                if line_offset >= rect.height {
                    break;
                }
                let label_rect = Rect::new(rect.x, rect.y + line_offset, rect.width, 1);

                let mut style = Style::default().fg(Color::Black).bg(hex_color(&event.color));
                if is_selected && i == selected_event {
                    style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                }
                frame.render_widget(
                    Paragraph::new(Span::styled(truncate(&event.title, label_width), style)),
                    label_rect,
                );
                app.hits.push((label_rect, HitTarget::Event(event.id)));
            }
        }
    }
}
