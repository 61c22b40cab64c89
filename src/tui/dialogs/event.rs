//! Event popup
//!
//! Small form drawn next to the selected calendar cell. Tab cycles the
//! color through the palette.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::color;
use crate::state::{Command, EventDraft, EventForm};
use crate::tui::app::App;
use crate::tui::layout::{anchored_rect, centered_rect_fixed};
use crate::tui::widgets::input::{render_field, TextInput};

const POPUP_WIDTH: u16 = 40;
const POPUP_HEIGHT: u16 = 7;

/// State for the event form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFormState {
    pub title_input: TextInput,
    pub color: String,
}

impl EventFormState {
    pub fn new(default_color: &str) -> Self {
        Self {
            title_input: TextInput::new().placeholder("Event title"),
            color: default_color.to_string(),
        }
    }

    pub fn next_color(&mut self) {
        self.color = color::next_in_palette(&self.color).to_string();
    }

    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title_input.value().to_string(),
            color: self.color.clone(),
        }
    }
}

/// Terminal color for a `#rrggbb` string
pub fn hex_color(hex: &str) -> Color {
    color::parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::Magenta)
}

/// Render the event popup for the open form
pub fn render(frame: &mut Frame, app: &mut App, form: EventForm) {
    let bounds = frame.area();
    let area: Rect = match form.anchor {
        Some(anchor) => anchored_rect(anchor, POPUP_WIDTH, POPUP_HEIGHT, bounds),
        None => centered_rect_fixed(POPUP_WIDTH, POPUP_HEIGHT, bounds),
    };

    frame.render_widget(Clear, area);

    let title = format!(
        " Event on {} ",
        form.date.format(&app.settings().date_format)
    );
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = |offset: u16| Rect {
        x: inner.x,
        y: inner.y + offset,
        width: inner.width,
        height: 1,
    };

    if inner.height < 4 {
        return;
    }

    let state = &app.event_form;
    render_field(frame, row(0), "Title", state.title_input.spans(true), true);
    render_field(
        frame,
        row(1),
        "Color",
        vec![
            Span::styled("■ ", Style::default().fg(hex_color(&state.color))),
            Span::styled(state.color.clone(), Style::default().fg(Color::Yellow)),
        ],
        false,
    );

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Color  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), row(3));
}

/// Handle key input for the event popup
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.dispatch(Command::CancelEventForm);
        }
        KeyCode::Enter => {
            let draft = app.event_form.to_draft();
            app.dispatch(Command::SubmitEvent(draft));
        }
        KeyCode::Tab => app.event_form.next_color(),
        KeyCode::Char(c) => app.event_form.title_input.insert(c),
        KeyCode::Backspace => app.event_form.title_input.backspace(),
        KeyCode::Delete => app.event_form.title_input.delete(),
        KeyCode::Left => app.event_form.title_input.move_left(),
        KeyCode::Right => app.event_form.title_input.move_right(),
        KeyCode::Home => app.event_form.title_input.move_start(),
        KeyCode::End => app.event_form.title_input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_cycles_through_palette() {
        let mut form = EventFormState::new(color::DEFAULT_EVENT_COLOR);
        form.next_color();
        assert_eq!(form.color, color::PALETTE[1]);

        for _ in 1..color::PALETTE.len() {
            form.next_color();
        }
        assert_eq!(form.color, color::PALETTE[0]);
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#fbb6ce"), Color::Rgb(0xfb, 0xb6, 0xce));
        assert_eq!(hex_color("pink"), Color::Magenta);
    }
}
