//! Summary cards: one total per payment type

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::PaymentType;
use crate::reports::SpendingSummary;
use crate::tui::app::App;

fn card_color(payment_type: PaymentType) -> Color {
    match payment_type {
        PaymentType::Debit => Color::Green,
        PaymentType::Credit => Color::Yellow,
        PaymentType::InstantTransfer => Color::Magenta,
    }
}

/// Render the three payment-type cards
pub fn render(frame: &mut Frame, app: &App, summary: &SpendingSummary, areas: [Rect; 3]) {
    let symbol = &app.settings().currency_symbol;

    for (entry, area) in summary.by_payment_type.iter().zip(areas) {
        let color = card_color(entry.payment_type);
        let block = Block::default()
            .title(format!(" Total {} ", entry.payment_type))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        let text = Paragraph::new(entry.total.format_with_symbol(symbol))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(text, area);
    }
}
