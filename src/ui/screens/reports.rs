use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Monthly totals chart
            Constraint::Min(8),     // Budget vs actual table
        ])
        .split(area);

    render_monthly_chart(f, chunks[0], app);
    render_comparison_table(f, chunks[1], app);
}

fn render_monthly_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Monthly Expenses ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.monthly.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No data available. Add transactions to see monthly trends",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .monthly
        .iter()
        .map(|m| {
            Bar::default()
                .value(m.total.to_u64().unwrap_or(0))
                .label(Line::from(m.period.clone()))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1)
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_comparison_table(f: &mut Frame, area: Rect, app: &App) {
    let header_cells = ["Category", "Budget", "Actual", "Difference"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .comparison
        .iter()
        .enumerate()
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, line)| {
            let diff_style = if line.difference < Decimal::ZERO {
                Style::default().fg(theme::RED)
            } else {
                Style::default().fg(theme::GREEN)
            };
            let sign = if line.difference < Decimal::ZERO {
                "-"
            } else {
                "+"
            };

            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!("  {}", line.category.label())),
                Cell::from(format_amount(line.budget)),
                Cell::from(format_amount(line.actual)),
                Cell::from(Span::styled(
                    format!("{sign}{}", format_amount(line.difference.abs())),
                    diff_style,
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(24),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Budget vs. Actual ({}) ", app.today.format("%B %Y")),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
