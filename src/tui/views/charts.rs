//! Spending charts
//!
//! A pie of category totals and a line chart of monthly totals.

use std::f64::consts::TAU;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph,
    },
    Frame,
};

use crate::models::color::PALETTE;
use crate::models::Category;
use crate::reports::{CategoryTotal, SpendingSummary};
use crate::tui::dialogs::event::hex_color;

const LEGEND_WIDTH: u16 = 20;
const SWEEP_STEP: f64 = 0.01;

/// One pie slice: angles in radians, counter-clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub category: Category,
    pub color_index: usize,
    pub start: f64,
    pub end: f64,
}

impl Slice {
    pub fn share(&self) -> f64 {
        (self.end - self.start) / TAU
    }
}

/// Split the full turn between categories with a positive total
///
/// Colors follow the category's position in the fixed order, so a
/// category keeps its color when others drop to zero.
pub fn pie_slices(totals: &[CategoryTotal]) -> Vec<Slice> {
    let sum: f64 = totals
        .iter()
        .map(|t| t.total.as_f64())
        .filter(|v| *v > 0.0)
        .sum();
    if sum <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    totals
        .iter()
        .enumerate()
        .filter(|(_, t)| t.total.as_f64() > 0.0)
        .map(|(i, t)| {
            let end = start + t.total.as_f64() / sum * TAU;
            let slice = Slice {
                category: t.category,
                color_index: i % PALETTE.len(),
                start,
                end,
            };
            start = end;
            slice
        })
        .collect()
}

/// Category pie with a legend of shares
pub fn render_categories(frame: &mut Frame, summary: &SpendingSummary, area: Rect) {
    let block = Block::default().title(" By category ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slices = pie_slices(&summary.by_category);
    if slices.is_empty() {
        frame.render_widget(
            Paragraph::new("No expenses").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let [pie_area, legend_area] =
        Layout::horizontal([Constraint::Min(8), Constraint::Length(LEGEND_WIDTH)]).areas(inner);

    // Cells are about twice as tall as wide; widen the x range to keep it round
    let aspect = if pie_area.height == 0 {
        1.0
    } else {
        f64::from(pie_area.width) / (2.0 * f64::from(pie_area.height))
    };

    let pie = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([-aspect.max(1.0), aspect.max(1.0)])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            for slice in &slices {
                let color = hex_color(PALETTE[slice.color_index]);
                let mut angle = slice.start;
                while angle < slice.end {
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: 0.95 * angle.sin(),
                        y2: 0.95 * angle.cos(),
                        color,
                    });
                    angle += SWEEP_STEP;
                }
            }
        });
    frame.render_widget(pie, pie_area);

    let legend: Vec<Line> = slices
        .iter()
        .map(|slice| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(hex_color(PALETTE[slice.color_index]))),
                Span::raw(format!(
                    "{:<10}{:>4.0}%",
                    slice.category.label(),
                    slice.share() * 100.0
                )),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(legend), legend_area);
}

/// Line of monthly totals in the order months were first recorded
pub fn render_monthly(frame: &mut Frame, summary: &SpendingSummary, area: Rect) {
    let block = Block::default().title(" By month ").borders(Borders::ALL);

    let points: Vec<(f64, f64)> = summary
        .by_month
        .iter()
        .enumerate()
        .map(|(i, entry)| (i as f64, entry.total.as_f64()))
        .collect();

    if points.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let max_y = points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max).max(1.0);
    let max_x = (points.len() as f64 - 1.0).max(1.0);

    let labels: Vec<Span> = summary
        .by_month
        .iter()
        .map(|entry| Span::raw(entry.month.clone()))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_x])
                .labels(labels)
                .style(Style::default().fg(Color::Gray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, max_y])
                .labels(vec![Span::raw("0"), Span::raw(format!("{:.0}", max_y))])
                .style(Style::default().fg(Color::Gray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn totals(cents: [i64; 6]) -> Vec<CategoryTotal> {
        Category::ALL
            .iter()
            .zip(cents)
            .map(|(&category, c)| CategoryTotal {
                category,
                total: Money::from_cents(c),
            })
            .collect()
    }

    #[test]
    fn test_slices_cover_full_turn() {
        let slices = pie_slices(&totals([3000, 1000, 0, 0, 0, 0]));

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].category, Category::Food);
        assert!((slices[0].share() - 0.75).abs() < 1e-9);
        assert_eq!(slices[0].end, slices[1].start);
        assert!((slices[1].end - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_colors_follow_category_order() {
        let slices = pie_slices(&totals([0, 0, 500, 0, 0, 500]));
        let colors: Vec<_> = slices.iter().map(|s| s.color_index).collect();
        assert_eq!(colors, [2, 5]);
    }

    #[test]
    fn test_no_spending_no_slices() {
        assert!(pie_slices(&totals([0; 6])).is_empty());
    }
}
