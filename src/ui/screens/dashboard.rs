use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Sparkline},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(8),    // Category chart
            Constraint::Length(7), // Insights
            Constraint::Length(3), // Monthly trend sparkline
        ])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_summary_cards(f, chunks[0], app);
    render_category_chart(f, middle[0], app);
    render_recent_transactions(f, middle[1], app);
    render_insights(f, chunks[2], app);
    render_trend_sparkline(f, chunks[3], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let remaining = app.total_budget - app.current_month_expenses;

    render_card(
        f,
        cards[0],
        "Total Expenses",
        app.total_expenses,
        theme::RED,
        Some(format!("{} txns", app.rows.len())),
    );
    render_card(
        f,
        cards[1],
        "This Month",
        app.current_month_expenses,
        theme::YELLOW,
        Some(format!("of {} budget", format_amount(app.total_budget))),
    );
    render_card(
        f,
        cards[2],
        "Remaining",
        remaining,
        if remaining >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        Some(budget_progress_label(
            app.current_month_expenses,
            app.total_budget,
        )),
    );
    render_card(
        f,
        cards[3],
        "Total Budget",
        app.total_budget,
        theme::ACCENT,
        None,
    );
}

/// Spend-so-far share of the total budget, clamped to 100%.
fn budget_progress_label(spent: Decimal, budget: Decimal) -> String {
    if budget <= Decimal::ZERO {
        return "no budget set".into();
    }
    let pct = (spent / budget * Decimal::ONE_HUNDRED)
        .to_u64()
        .unwrap_or(0)
        .min(100);
    if pct >= 100 {
        format!("{pct}% used (over budget!)")
    } else {
        format!("{pct}% used")
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let sub_text = subtitle.unwrap_or_default();

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub_text, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    if app.by_category.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Expenses by Category ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions yet. Add one with :add",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .by_category
        .iter()
        .take(12)
        .map(|slice| {
            let val = slice.total.to_u64().unwrap_or(0);
            let label = truncate(slice.label, 10);
            Bar::default()
                .value(val)
                .label(Line::from(label))
                .style(Style::default().fg(theme::hex_color(slice.color)))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    " Expenses by Category ",
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_recent_transactions(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Recent Transactions ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.recent.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing recorded yet",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let lines: Vec<Line> = app
        .recent
        .iter()
        .map(|txn| {
            Line::from(vec![
                Span::styled(format!(" {} ", txn.date), theme::dim_style()),
                Span::styled(
                    format!("{:<24}", truncate(&txn.description, 23)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format_amount(txn.amount),
                    Style::default().fg(theme::RED),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_insights(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Spending Insights ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.insights.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Set budgets and add transactions to see spending insights",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let lines: Vec<Line> = app
        .insights
        .iter()
        .map(|insight| {
            let color = theme::severity_color(insight.severity);
            Line::from(vec![
                Span::styled(
                    format!(" {:<26}", truncate(&insight.title, 25)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(insight.message.clone(), theme::normal_style()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_trend_sparkline(f: &mut Frame, area: Rect, app: &App) {
    let data: Vec<u64> = app
        .monthly
        .iter()
        .map(|m| m.total.to_u64().unwrap_or(0))
        .collect();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    " Monthly Spending Trend ",
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .data(&data)
        .style(Style::default().fg(theme::YELLOW));

    f.render_widget(sparkline, area);
}
