use std::collections::HashSet;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::screens;
use super::theme;
use super::util::centered;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = format!("{}:", i + 1);
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(num, theme::dim_style()),
                    Span::styled(
                        s.to_string(),
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(format!("{num}{s}"), theme::dim_style()))
            }
        })
        .collect();

    let badge = if app.unread > 0 {
        format!(" ● {} ", app.unread)
    } else {
        String::new()
    };

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(tabs, area);

    if !badge.is_empty() {
        let width = badge.chars().count() as u16;
        let corner = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(badge, theme::badge_style(crate::format::Badge::Destructive))),
            corner,
        );
    }
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Dashboard => screens::dashboard::render(f, area, app),
        Screen::Accounts => screens::accounts::render(f, area, app),
        Screen::Payments => screens::payments::render(f, area, app),
        Screen::Cards => screens::cards::render(f, area, app),
        Screen::Settings => screens::settings::render(f, area, app),
    }
}

fn mode_style(mode: InputMode) -> Style {
    let bg = match mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command => theme::GREEN,
        InputMode::Search => theme::YELLOW,
        InputMode::Confirm => theme::RED,
    };
    Style::default()
        .fg(theme::HEADER_BG)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => " Tab next screen | :transfer | :paybill | ? help ",
        Screen::Accounts => " Enter open | / search | t type | s status | x clear | :statement ",
        Screen::Payments => " h/l pane | a add | e edit | D delete | ? help ",
        Screen::Cards => " l lock | r reveal | R report lost | :limit | :control ",
        Screen::Settings => " Enter read | R read all | :profile | :notify ",
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let info = match app.opened_account() {
        Some(account) if app.screen == Screen::Accounts => format!(
            " {} | {} | period {}",
            app.screen,
            account.name,
            app.statement_period.label()
        ),
        _ => format!(" {} | {}", app.screen, app.currency),
    };
    let right = key_hints(app.screen);

    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = (area.width as usize).saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style(app.input_mode)),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(app.command_input.as_str(), theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Search => {
            let matches = if app.filter.query.is_empty() {
                String::new()
            } else {
                format!("  ({} of {} match)", app.transactions.len(), app.scoped_count)
            };
            (
                Line::from(vec![
                    Span::styled("/", Style::default().fg(theme::YELLOW)),
                    Span::styled(app.filter.query.as_str(), theme::command_bar_style()),
                    Span::styled(matches, theme::dim_style()),
                ]),
                Some(1 + app.filter.query.chars().count() as u16),
            )
        }
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(
                    app.confirm_message.as_str(),
                    Style::default().fg(theme::YELLOW),
                ),
                Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, / to search, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    app.status_message.as_str(),
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn help_row(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), theme::normal_style()))
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(
            " FinDash Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", theme::section_style())),
        help_row("  j/k or Up/Down   Move cursor           1-5        Switch screens"),
        help_row("  Tab/Shift-Tab    Cycle screens         g/G        Top/Bottom"),
        help_row("  Enter            Open/Select           Esc        Back/Clear"),
        help_row("  Ctrl-q           Quit"),
        Line::from(""),
        Line::from(Span::styled(" Actions", theme::section_style())),
        help_row("  :                Command mode          /          Search (live)"),
        help_row("  t/s (Accounts)   Cycle type/status     x          Reset filters"),
        help_row("  h/l (Payments)   Switch pane           D          Delete selected"),
        help_row("  l/r/R (Cards)    Lock/Reveal/Report    R (Settings) Read all"),
        Line::from(""),
        Line::from(Span::styled(" Commands", theme::section_style())),
    ];

    // Built from the registry; aliases sharing a description collapse to one line.
    let mut seen = HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = commands::COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 1)
        .filter(|(_, cmd)| seen.insert(cmd.description))
        .map(|(&name, cmd)| (name, cmd.description))
        .collect();
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(help_row(&format!("  :{name:<17} {desc}")));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let popup = centered(area, 90, help_text.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup);
}
