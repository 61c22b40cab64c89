//! Layout definitions for the TUI
//!
//! Title, summary cards, calendar beside the charts, expense table and a
//! status bar, top to bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub title: Rect,
    /// Three summary cards side by side
    pub cards: [Rect; 3],
    pub calendar: Rect,
    pub category_chart: Rect,
    pub monthly_chart: Rect,
    pub expenses: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),       // Title
                Constraint::Length(3),       // Summary cards
                Constraint::Min(14),         // Calendar + charts
                Constraint::Percentage(30),  // Expense table
                Constraint::Length(1),       // Status bar
            ])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(vertical[1]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[2]);

        let charts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(middle[1]);

        Self {
            title: vertical[0],
            cards: [cards[0], cards[1], cards[2]],
            calendar: middle[0],
            category_chart: charts[0],
            monthly_chart: charts[1],
            expenses: vertical[3],
            status_bar: vertical[4],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// A `width` x `height` rect with its top-left at `anchor`, shifted to fit in `bounds`
pub fn anchored_rect(anchor: (u16, u16), width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let max_x = bounds.right().saturating_sub(width);
    let max_y = bounds.bottom().saturating_sub(height);

    let x = anchor.0.clamp(bounds.x, max_x.max(bounds.x));
    let y = anchor.1.clamp(bounds.y, max_y.max(bounds.y));

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let area = Rect::new(0, 0, 120, 50);
        let layout = AppLayout::new(area);

        assert_eq!(layout.title.y, 0);
        assert_eq!(layout.status_bar.y, 49);
        assert_eq!(layout.cards[0].x, 0);
        assert!(layout.calendar.width > layout.category_chart.width);
        assert_eq!(layout.category_chart.x, layout.monthly_chart.x);
    }

    #[test]
    fn test_anchored_rect_inside_bounds() {
        let bounds = Rect::new(0, 0, 100, 40);
        assert_eq!(anchored_rect((10, 5), 30, 8, bounds), Rect::new(10, 5, 30, 8));
    }

    #[test]
    fn test_anchored_rect_shifts_to_fit() {
        let bounds = Rect::new(0, 0, 100, 40);
        assert_eq!(anchored_rect((90, 38), 30, 8, bounds), Rect::new(70, 32, 30, 8));

        let tiny = Rect::new(0, 0, 20, 5);
        assert_eq!(anchored_rect((15, 3), 30, 8, tiny), Rect::new(0, 0, 20, 5));
    }
}
