use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

/// Budget screen: every category with its monthly limit and the share spent
/// this month. Unbudgeted categories still show so they can be set.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .comparison
        .iter()
        .enumerate()
        .skip(app.budget_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, line)| {
            let ratio = if line.budget > Decimal::ZERO {
                (line.actual / line.budget).to_f64().unwrap_or(0.0).min(1.0)
            } else {
                0.0
            };

            let color = if line.budget <= Decimal::ZERO {
                theme::TEXT_DIM
            } else if ratio > 0.9 {
                theme::RED
            } else if ratio > 0.7 {
                theme::YELLOW
            } else {
                theme::GREEN
            };

            let style = if i == app.budget_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let bar = create_progress_bar(ratio, 20);
            let display_name = truncate(line.category.label(), 21);

            ListItem::new(Line::from(vec![
                Span::styled(format!("{display_name:<22}"), style),
                Span::styled(
                    format!(
                        "{}/{} ",
                        format_amount(line.actual),
                        format_amount(line.budget)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(bar, Style::default().fg(color)),
                Span::styled(
                    format!(" {:.0}%", ratio * 100.0),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Budgets for {} ", app.today.format("%B %Y")),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn create_progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
