use chrono::Days;
use dailylimit::models::DATE_FORMAT;
use dailylimit::Aggregator;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Sparkline, Table, Wrap},
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
            Constraint::Length(5), // Summary cards
            Constraint::Length(3), // Message
            Constraint::Length(4), // Week sparkline
            Constraint::Min(5),    // Records
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_message(f, chunks[1], app);
    render_week_sparkline(f, chunks[2], app);
    render_records(f, chunks[3], app);
}

fn block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
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

    let base = app.tracker.base();
    let remaining = base.remaining_limit();

    render_card(f, cards[0], "Daily limit", base.limit(), theme::ACCENT);
    render_card(f, cards[1], "Today", base.today_total(), theme::TEXT);
    render_card(f, cards[2], "Last 7 days", base.week_total(), theme::TEXT);
    render_card(
        f,
        cards[3],
        "Remaining",
        remaining,
        theme::balance_color(remaining),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block(title));

    f.render_widget(text, area);
}

fn render_message(f: &mut Frame, area: Rect, app: &App) {
    let remaining = app.tracker.base().remaining_limit();
    let title = if app.tracker.is_cash() {
        format!("Balance ({})", app.currency)
    } else {
        "Recommendation".to_string()
    };
    let msg = Paragraph::new(Line::from(Span::styled(
        app.message(),
        Style::default().fg(theme::balance_color(remaining)),
    )))
    .wrap(Wrap { trim: true })
    .block(block(&title));
    f.render_widget(msg, area);
}

/// Per-day totals from `week_start` to `today`, oldest first.
pub(crate) fn daily_totals(base: &Aggregator) -> Vec<Decimal> {
    let mut totals = Vec::new();
    let mut day = base.week_start();
    while day <= base.today() {
        let total: Decimal = base
            .records()
            .iter()
            .filter(|r| r.date() == day)
            .map(|r| r.amount())
            .fold(Decimal::ZERO, Decimal::saturating_add);
        totals.push(total);
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    totals
}

fn render_week_sparkline(f: &mut Frame, area: Rect, app: &App) {
    let data: Vec<u64> = daily_totals(app.tracker.base())
        .iter()
        .map(|t| (*t).max(Decimal::ZERO).to_u64().unwrap_or(0))
        .collect();

    let sparkline = Sparkline::default()
        .block(block("Last 7 days, per day"))
        .data(&data)
        .style(Style::default().fg(theme::YELLOW));

    f.render_widget(sparkline, area);
}

fn render_records(f: &mut Frame, area: Rect, app: &App) {
    let base = app.tracker.base();
    let title = format!("Records ({})", base.len());

    if base.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No records yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one with :add <amount>,<comment>[,DD.MM.YYYY]",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block(&title));
        f.render_widget(msg, area);
        return;
    }

    let header_cells = ["Date", "Comment", app.tracker.unit()]
        .into_iter()
        .map(|h| Cell::from(h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let week = base.week_start()..=base.today();
    let rows: Vec<Row> = base
        .records()
        .iter()
        .enumerate()
        .skip(app.record_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, record)| {
            let style = if i == app.record_index {
                theme::selected_style()
            } else if !week.contains(&record.date()) {
                theme::dim_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let marker = if record.date() == base.today() { "\u{2022}" } else { " " };
            Row::new(vec![
                Cell::from(format!("{marker} {}", record.date().format(DATE_FORMAT))),
                Cell::from(truncate(record.comment(), 40)),
                Cell::from(format_amount(record.amount())),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(block(&title));
    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::NaiveDate;
    use dailylimit::Record;
    use rust_decimal_macros::dec;

    #[test]
    fn test_daily_totals_cover_the_week() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut agg = Aggregator::with_today(dec!(100), today);
        agg.add_record(Record::on(dec!(5), "a", today));
        agg.add_record(Record::on(dec!(2), "b", today));
        agg.add_record(Record::on(dec!(7), "c", NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
        agg.add_record(Record::on(dec!(9), "d", NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()));

        let totals = daily_totals(&agg);
        assert_eq!(totals.len(), 7);
        assert_eq!(totals[0], dec!(7));
        assert_eq!(totals[6], dec!(7));
        assert_eq!(totals[1..6].iter().sum::<Decimal>(), Decimal::ZERO);
    }
}
