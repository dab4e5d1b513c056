use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{panel, render_empty};
use crate::format::{format_currency, format_date, format_signed};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(8),    // Accounts + spending
            Constraint::Length(app.recent_limit as u16 + 3),
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);
    render_accounts(f, middle[0], app);
    render_spending_chart(f, middle[1], app);

    render_recent(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let net = app.totals.net();
    let tone = |v: Decimal| if v < Decimal::ZERO { theme::RED } else { theme::GREEN };

    render_card(
        f,
        cards[0],
        "Net Worth",
        format_currency(app.net_worth, &app.currency),
        tone(app.net_worth),
        format!("{} accounts", app.accounts.len()),
    );
    render_card(
        f,
        cards[1],
        "Income",
        format_currency(app.totals.income, &app.currency),
        theme::GREEN,
        format!("{} txns", app.totals.income_count),
    );
    render_card(
        f,
        cards[2],
        "Expenses",
        format_currency(app.totals.expenses, &app.currency),
        theme::RED,
        format!("{} txns", app.totals.expense_count),
    );
    render_card(
        f,
        cards[3],
        "Net Flow",
        format_currency(net, &app.currency),
        tone(net),
        format!("{} unread notifications", app.unread),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color, subtitle: String) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(panel(title, false));
    f.render_widget(text, area);
}

fn render_accounts(f: &mut Frame, area: Rect, app: &App) {
    if app.accounts.is_empty() {
        render_empty(f, area, "Accounts", &["No accounts"]);
        return;
    }
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .accounts
        .iter()
        .map(|a| {
            let balance = format_currency(a.balance, &a.currency);
            let name = truncate(&a.name, width.saturating_sub(balance.chars().count() + 4));
            let pad = width.saturating_sub(name.chars().count() + balance.chars().count() + 2);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", a.trend.arrow()), theme::trend_style(a.trend)),
                Span::styled(name, theme::normal_style()),
                Span::raw(" ".repeat(pad)),
                Span::styled(balance, theme::balance_style(a.balance < Decimal::ZERO)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel("Accounts", false)), area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, app: &App) {
    if app.spending_by_category.is_empty() {
        render_empty(f, area, "Spending by Category", &["No spending yet"]);
        return;
    }

    let bars: Vec<Bar> = app
        .spending_by_category
        .iter()
        .take(8)
        .map(|(name, amt)| {
            Bar::default()
                .value(amt.round().to_u64().unwrap_or(0))
                .label(Line::from(truncate(name, 9)))
                .text_value(format_currency(*amt, &app.currency))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(Style::default().fg(theme::HEADER_BG).bg(theme::ACCENT))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Spending by Category", false))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1);
    f.render_widget(chart, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    if app.recent.is_empty() {
        render_empty(f, area, "Recent Activity", &["No transactions yet"]);
        return;
    }

    let header = Row::new(
        ["Date", "Description", "Payee/Payer", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let rows: Vec<Row> = app
        .recent
        .iter()
        .enumerate()
        .map(|(i, (r, currency))| {
            Row::new(vec![
                Cell::from(format_date(&r.date)),
                Cell::from(truncate(&r.description, 36)),
                Cell::from(truncate(&r.counterparty, 24)),
                Cell::from(Span::styled(
                    format_signed(r.direction, r.amount, currency),
                    theme::direction_style(r.direction),
                )),
            ])
            .style(theme::row_style(i, 0, false))
        })
        .collect();

    let widths = [
        Constraint::Length(11),
        Constraint::Min(20),
        Constraint::Length(24),
        Constraint::Length(14),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(format!("Recent Activity ({})", app.recent.len()), false));
    f.render_widget(table, area);
}
