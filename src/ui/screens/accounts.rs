use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, List, ListItem, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use super::{panel, render_empty};
use crate::format::{format_currency, format_date, format_signed, status_badge};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.accounts.is_empty() {
        render_empty(f, area, "Accounts (0)", &["No accounts to show."]);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(40)])
        .split(area);

    render_account_list(f, chunks[0], app);
    render_history(f, chunks[1], app);
}

fn render_account_list(f: &mut Frame, area: Rect, app: &App) {
    let opened = app.opened_account().map(|a| a.id.clone());
    let items: Vec<ListItem> = app
        .accounts
        .iter()
        .enumerate()
        .skip(app.account_scroll)
        .map(|(i, a)| {
            let marker = if opened.as_ref() == Some(&a.id) { "▶ " } else { "  " };
            let style = theme::row_style(i, app.account_index, opened.is_none() || i == app.account_index);
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(truncate(&a.name, 24), theme::normal_style()),
                ]),
                Line::from(vec![
                    Span::styled(
                        format!("  {:<12}", a.account_type.as_str()),
                        theme::dim_style(),
                    ),
                    Span::styled(
                        format_currency(a.balance, &a.currency),
                        theme::balance_style(a.balance < Decimal::ZERO),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", truncate(&a.detail_line(), 40)),
                    theme::dim_style(),
                )),
            ])
            .style(style)
        })
        .collect();
    let title = format!("Accounts ({})", app.accounts.len());
    f.render_widget(List::new(items).block(panel(title, opened.is_none())), area);
}

fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let Some(account) = app.opened_account() else {
        render_empty(
            f,
            area,
            "Transaction History",
            &["Select an account and press Enter to view its history."],
        );
        return;
    };

    let mut title = format!(
        "{} - {} of {}",
        account.name,
        app.transactions.len(),
        app.scoped_count
    );
    if app.filter.is_active() {
        title.push_str(&format!(" | {}", app.filter.describe()));
    }

    if app.transactions.is_empty() {
        let lines: &[&str] = if app.scoped_count == 0 {
            &["No transactions found for this account."]
        } else {
            &[
                "No transactions match your current filters.",
                "",
                "Press x or :clear to reset the filters.",
            ]
        };
        render_empty(f, area, title, lines);
        return;
    }

    let header = Row::new(
        ["Date", "Description", "Payee/Payer", "Category", "Amount", "Status"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );

    let page = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = app
        .transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(page)
        .map(|(i, r)| {
            let badge = status_badge(r.status);
            Row::new(vec![
                Cell::from(format_date(&r.date)),
                Cell::from(truncate(&r.description, 32)),
                Cell::from(truncate(&r.counterparty, 22)),
                Cell::from(truncate(&r.category, 16)),
                Cell::from(Span::styled(
                    format_signed(r.direction, r.amount, &account.currency),
                    theme::direction_style(r.direction),
                )),
                Cell::from(Span::styled(
                    format!(" {} ", r.status.label()),
                    theme::badge_style(badge),
                )),
            ])
            .style(theme::row_style(i, app.transaction_index, true))
        })
        .collect();

    let widths = [
        Constraint::Length(11),
        Constraint::Min(20),
        Constraint::Length(22),
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Length(11),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(title, true));
    f.render_widget(table, area);
}
