use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
    Frame,
};

use super::{panel, render_empty};
use crate::format::{format_currency, format_date_long, scheduled_badge};
use crate::ui::app::{App, PaymentsPane};
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_payees(f, chunks[0], app);
    render_scheduled(f, chunks[1], app);
}

fn header(cols: &[&'static str]) -> Row<'static> {
    Row::new(
        cols.iter()
            .map(|h| Cell::from(*h).style(theme::header_style()))
            .collect::<Vec<_>>(),
    )
}

fn render_payees(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.payments_pane == PaymentsPane::Payees;
    let title = format!("Payees ({})", app.payees.len());
    if app.payees.is_empty() {
        render_empty(
            f,
            area,
            title,
            &["No payees saved.", "", "Add one with :payee-add name|account|bank"],
        );
        return;
    }

    let page = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = app
        .payees
        .iter()
        .enumerate()
        .skip(app.payee_scroll)
        .take(page)
        .map(|(i, p)| {
            Row::new(vec![
                Cell::from(p.id.clone()),
                Cell::from(truncate(&p.name, 28)),
                Cell::from(p.account_number.clone()),
                Cell::from(truncate(&p.bank_name, 28)),
            ])
            .style(theme::row_style(i, app.payee_index, focused))
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Min(16),
        Constraint::Length(20),
        Constraint::Min(16),
    ];
    let table = Table::new(rows, widths)
        .header(header(&["ID", "Name", "Account No.", "Bank"]))
        .block(panel(title, focused));
    f.render_widget(table, area);
}

fn render_scheduled(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.payments_pane == PaymentsPane::Scheduled;
    let title = format!("Scheduled Transactions ({})", app.scheduled.len());
    if app.scheduled.is_empty() {
        render_empty(f, area, title, &["Nothing scheduled."]);
        return;
    }

    let page = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = app
        .scheduled
        .iter()
        .enumerate()
        .skip(app.scheduled_scroll)
        .take(page)
        .map(|(i, s)| {
            Row::new(vec![
                Cell::from(format_date_long(&s.date)),
                Cell::from(s.kind.as_str()),
                Cell::from(truncate(&s.payee_name, 24)),
                Cell::from(format_currency(s.amount, &s.currency)),
                Cell::from(s.frequency.as_str()),
                Cell::from(Span::styled(
                    format!(" {} ", s.status.as_str()),
                    theme::badge_style(scheduled_badge(s.status)),
                )),
            ])
            .style(theme::row_style(i, app.scheduled_index, focused))
        })
        .collect();

    let widths = [
        Constraint::Length(15),
        Constraint::Length(10),
        Constraint::Min(16),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(12),
    ];
    let table = Table::new(rows, widths)
        .header(header(&["Date", "Type", "Payee", "Amount", "Frequency", "Status"]))
        .block(panel(title, focused));
    f.render_widget(table, area);
}
