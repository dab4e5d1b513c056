use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use super::{panel, render_empty};
use crate::cards::display_number;
use crate::format::{card_badge, format_currency, format_date};
use crate::models::Card;
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.cards.is_empty() {
        render_empty(f, area, "Cards (0)", &["No cards on file."]);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(40)])
        .split(area);

    render_card_list(f, chunks[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(chunks[1]);

    if let Some(card) = app.selected_card() {
        render_controls(f, right[0], card);
        render_card_transactions(f, right[1], app, card);
    }
}

fn render_card_list(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let reveal = app.reveal_number && i == app.card_index;
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:<24}", c.name), theme::normal_style()),
                    Span::styled(format!(" {} ", c.status), theme::badge_style(card_badge(c.status))),
                ]),
                Line::from(Span::styled(display_number(c, reveal), theme::dim_style())),
                Line::from(Span::styled(
                    format!("{}  exp {}", c.kind.as_str(), c.expiry),
                    theme::dim_style(),
                )),
                Line::from(""),
            ])
            .style(theme::row_style(i, app.card_index, true))
        })
        .collect();
    let title = format!("Cards ({})", app.cards.len());
    f.render_widget(List::new(items).block(panel(title, true)), area);
}

fn on_off(flag: bool) -> Span<'static> {
    if flag {
        Span::styled("on", theme::balance_style(false))
    } else {
        Span::styled("off", theme::balance_style(true))
    }
}

fn render_controls(f: &mut Frame, area: Rect, card: &Card) {
    let c = &card.controls;
    let label = |s: &str| Span::styled(format!("{s:<16}"), theme::dim_style());
    let travel = if c.travel_notice.is_empty() {
        "none".to_string()
    } else {
        c.travel_notice.clone()
    };
    let lines = vec![
        Line::from(vec![
            label("Daily limit"),
            Span::styled(format_currency(c.daily_limit, "USD"), theme::normal_style()),
        ]),
        Line::from(vec![label("Online"), on_off(c.online)]),
        Line::from(vec![label("International"), on_off(c.international)]),
        Line::from(vec![label("Contactless"), on_off(c.contactless)]),
        Line::from(vec![label("Travel notice"), Span::styled(travel, theme::normal_style())]),
    ];
    let title = format!("{} - Controls", card.name);
    f.render_widget(Paragraph::new(lines).block(panel(title, false)), area);
}

fn render_card_transactions(f: &mut Frame, area: Rect, app: &App, card: &Card) {
    let title = format!("Recent Card Activity ({})", app.card_transactions.len());
    if app.card_transactions.is_empty() {
        render_empty(f, area, title, &["No recent transactions on this card."]);
        return;
    }

    let header = Row::new(
        ["Date", "Description", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let rows: Vec<Row> = app
        .card_transactions
        .iter()
        .enumerate()
        .map(|(i, t)| {
            Row::new(vec![
                Cell::from(format_date(&t.date)),
                Cell::from(t.description.clone()),
                Cell::from(Span::styled(
                    format_currency(t.amount, &t.currency),
                    theme::balance_style(t.amount < Decimal::ZERO),
                )),
            ])
            .style(theme::row_style(i, 0, false))
        })
        .collect();

    let widths = [
        Constraint::Length(11),
        Constraint::Min(20),
        Constraint::Length(14),
    ];
    let table = Table::new(rows, widths).header(header).block(panel(
        format!("{title} - {}", card.last4),
        false,
    ));
    f.render_widget(table, area);
}
