//! Text input widget
//!
//! A single-line text field. The cursor counts characters, not bytes, so
//! accented input edits cleanly.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A simple text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    pub placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Spans for the value, with the cursor cell highlighted when focused
    pub fn spans(&self, focused: bool) -> Vec<Span<'static>> {
        if self.content.is_empty() && !focused {
            return vec![Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )];
        }

        let value_style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        if !focused {
            return vec![Span::styled(self.content.clone(), value_style)];
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let mut rest = self.content.chars().skip(self.cursor);
        let at = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        vec![
            Span::styled(before, value_style),
            Span::styled(at.to_string(), Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::styled(after, value_style),
        ]
    }
}

/// Render a labelled form line: `label: value`
pub fn render_field(frame: &mut Frame, area: Rect, label: &str, value: Vec<Span<'static>>, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>12}: ", label), label_style)];
    spans.extend(value);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "pão".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "pão");
        assert_eq!(input.cursor(), 3);

        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "po");
        assert_eq!(input.cursor(), 1);

        input.insert('ã');
        assert_eq!(input.value(), "pão");
    }

    #[test]
    fn test_delete_and_bounds() {
        let mut input = TextInput::new().content("açaí");
        assert_eq!(input.cursor(), 4);

        input.move_right();
        assert_eq!(input.cursor(), 4);
        input.delete();
        assert_eq!(input.value(), "açaí");

        input.move_start();
        input.move_left();
        input.delete();
        assert_eq!(input.value(), "çaí");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "ça");

        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_spans_show_cursor() {
        let input = TextInput::new().content("ab");
        let spans = input.spans(true);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "ab");
        assert_eq!(spans[1].content, " ");

        let empty = TextInput::new().placeholder("YYYY-MM-DD");
        assert_eq!(empty.spans(false)[0].content, "YYYY-MM-DD");
    }
}
