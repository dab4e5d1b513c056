use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::{panel, render_empty};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(6)])
        .split(chunks[0]);

    render_profile(f, left[0], app);
    render_prefs(f, left[1], app);
    render_notifications(f, chunks[1], app);
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), theme::dim_style()),
        Span::styled(value.to_string(), theme::normal_style()),
    ])
}

fn render_profile(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.profile;
    let address = format!("{}, {} {}", p.street_address, p.city, p.postal_code);
    let lines = vec![
        field("Name", &p.full_name),
        field("Email", &p.email),
        field("Phone", &p.phone),
        field("Address", &address),
        field("Country", &p.country),
        Line::from(""),
        Line::from(Span::styled(
            ":profile <field> <value>   :password <current> <new> <confirm>",
            theme::dim_style(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).block(panel("Profile", false)), area);
}

fn render_prefs(f: &mut Frame, area: Rect, app: &App) {
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    let lines = vec![
        Line::from(format!("{} Email notifications", check(app.prefs.email))),
        Line::from(format!("{} SMS notifications", check(app.prefs.sms))),
        Line::from(format!(
            "{} Transaction alerts",
            check(app.prefs.transaction_alerts)
        )),
        Line::from(""),
        Line::from(Span::styled(
            ":notify email|sms|alerts toggles a preference",
            theme::dim_style(),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .style(theme::normal_style())
            .block(panel("Notification Preferences", false)),
        area,
    );
}

fn render_notifications(f: &mut Frame, area: Rect, app: &App) {
    let title = format!("Notifications ({} unread)", app.unread);
    if app.notifications.is_empty() {
        render_empty(f, area, title, &["You're all caught up."]);
        return;
    }

    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .notifications
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let marker = if n.is_read {
                Span::raw("  ")
            } else {
                Span::styled("● ", theme::section_style())
            };
            let title_style = if n.is_read {
                theme::dim_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(vec![
                Line::from(vec![
                    marker,
                    Span::styled(truncate(&n.title, width), title_style),
                ]),
                Line::from(Span::styled(
                    format!("  {}", truncate(&n.description, width)),
                    theme::dim_style(),
                )),
                Line::from(Span::styled(
                    format!("  {} - {}", n.kind.as_str(), n.timestamp),
                    theme::dim_style(),
                )),
            ])
            .style(theme::row_style(i, app.notification_index, true))
        })
        .collect();
    f.render_widget(List::new(items).block(panel(title, true)), area);
}
