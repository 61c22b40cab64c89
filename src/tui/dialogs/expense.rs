//! Expense entry dialog
//!
//! Modal form with date, description, category, payment type and value.
//! Category and payment type are choice fields cycled with Left/Right or
//! Space; an unset payment type keeps the form from submitting.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Category, PaymentType};
use crate::state::{Command, ExpenseDraft};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::{render_field, TextInput};

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Date,
    Description,
    Category,
    PaymentType,
    Value,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::PaymentType,
            Self::PaymentType => Self::Value,
            Self::Value => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Value,
            Self::Description => Self::Date,
            Self::Category => Self::Description,
            Self::PaymentType => Self::Category,
            Self::Value => Self::PaymentType,
        }
    }

    fn is_choice(self) -> bool {
        matches!(self, Self::Category | Self::PaymentType)
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub date_input: TextInput,
    pub description_input: TextInput,
    pub category: Option<Category>,
    pub payment_type: Option<PaymentType>,
    pub value_input: TextInput,
}

/// Step through `None, all[0], .., all[n-1]` and back to `None`
fn cycle<T: Copy + PartialEq>(current: Option<T>, all: &[T], forward: bool) -> Option<T> {
    let len = all.len() + 1;
    let position = current
        .and_then(|c| all.iter().position(|x| *x == c))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };
    next.checked_sub(1).map(|i| all[i])
}

impl ExpenseFormState {
    /// Empty form with the date prefilled
    pub fn new(today: NaiveDate, date_format: &str) -> Self {
        Self {
            focused_field: ExpenseField::Date,
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format(date_format).to_string()),
            description_input: TextInput::new().placeholder("What was it?"),
            category: None,
            payment_type: None,
            value_input: TextInput::new().placeholder("0.00"),
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The focused text input, if the focused field is free text
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Date => Some(&mut self.date_input),
            ExpenseField::Description => Some(&mut self.description_input),
            ExpenseField::Value => Some(&mut self.value_input),
            ExpenseField::Category | ExpenseField::PaymentType => None,
        }
    }

    /// Cycle the focused choice field
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.focused_field {
            ExpenseField::Category => {
                self.category = cycle(self.category, &Category::ALL, forward);
            }
            ExpenseField::PaymentType => {
                self.payment_type = cycle(self.payment_type, &PaymentType::ALL, forward);
            }
            _ => {}
        }
    }

    /// Raw field values for submission
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            date: self.date_input.value().to_string(),
            description: self.description_input.value().to_string(),
            category: self.category.map(|c| c.label().to_string()).unwrap_or_default(),
            payment_type: self
                .payment_type
                .map(|p| p.label().to_string())
                .unwrap_or_default(),
            value: self.value_input.value().to_string(),
        }
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(60, 12, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Description
            Constraint::Length(1), // Category
            Constraint::Length(1), // Payment type
            Constraint::Length(1), // Value
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    let focused = form.focused_field;

    render_field(
        frame,
        chunks[0],
        "Date",
        form.date_input.spans(focused == ExpenseField::Date),
        focused == ExpenseField::Date,
    );
    render_field(
        frame,
        chunks[1],
        "Description",
        form.description_input.spans(focused == ExpenseField::Description),
        focused == ExpenseField::Description,
    );
    render_field(
        frame,
        chunks[2],
        "Category",
        choice_spans(
            form.category.map(|c| c.label()).unwrap_or("(none)"),
            focused == ExpenseField::Category,
        ),
        focused == ExpenseField::Category,
    );
    render_field(
        frame,
        chunks[3],
        "Payment",
        choice_spans(
            form.payment_type.map(|p| p.label()).unwrap_or("(choose)"),
            focused == ExpenseField::PaymentType,
        ),
        focused == ExpenseField::PaymentType,
    );
    render_field(
        frame,
        chunks[4],
        "Value",
        form.value_input.spans(focused == ExpenseField::Value),
        focused == ExpenseField::Value,
    );

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Choose  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

fn choice_spans(label: &str, focused: bool) -> Vec<Span<'static>> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };
    vec![Span::styled(format!("‹ {} ›", label), style)]
}

/// Handle key input for the expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.dispatch(Command::CancelExpenseForm);
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => {
            let draft = form.to_draft();
            app.dispatch(Command::SubmitExpense(draft));
        }
        KeyCode::Left if form.focused_field.is_choice() => form.cycle_choice(false),
        KeyCode::Right | KeyCode::Char(' ') if form.focused_field.is_choice() => {
            form.cycle_choice(true)
        }
        code => {
            if let Some(input) = form.focused_input() {
                match code {
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ExpenseFormState {
        ExpenseFormState::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(), "%d/%m/%Y")
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = form();
        form.prev_field();
        assert_eq!(form.focused_field, ExpenseField::Value);
        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Date);
    }

    #[test]
    fn test_cycle_choices() {
        let mut form = form();
        form.focused_field = ExpenseField::PaymentType;

        form.cycle_choice(true);
        assert_eq!(form.payment_type, Some(PaymentType::Debit));
        form.cycle_choice(false);
        assert_eq!(form.payment_type, None);
        form.cycle_choice(false);
        assert_eq!(form.payment_type, Some(PaymentType::InstantTransfer));

        form.focused_field = ExpenseField::Category;
        form.cycle_choice(false);
        assert_eq!(form.category, Some(Category::Other));
    }

    #[test]
    fn test_to_draft() {
        let mut form = form();
        form.payment_type = Some(PaymentType::InstantTransfer);
        form.value_input = TextInput::new().content("50");

        let draft = form.to_draft();
        assert_eq!(draft.date, "10/01/2025");
        assert_eq!(draft.category, "");
        assert_eq!(draft.payment_type, "PIX");
        assert_eq!(draft.value, "50");

        // Description still missing
        assert!(draft.to_input("%d/%m/%Y").is_none());
    }
}
