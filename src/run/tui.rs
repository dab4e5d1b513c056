use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{debug, info};

use crate::config::Config;
use crate::filter::Scope;
use crate::store::Store;
use crate::ui::app::{App, InputMode, PaymentsPane, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up, wrap_index};

pub(crate) fn as_tui(store: &mut Store, config: &Config) -> Result<()> {
    let mut app = App::new(config);
    app.refresh_all(store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("tui started");

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("tui stopped");

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut Store,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars
            app.visible_rows = f.area().height.saturating_sub(3).max(1) as usize;
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store)?,
                InputMode::Command => handle_command_input(key, app, store)?,
                InputMode::Search => handle_search_input(key, app, store),
                InputMode::Confirm => handle_confirm_input(key, app, store)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => start_search(app, store),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => handle_move(app, store, 1),
        KeyCode::Char('k') | KeyCode::Up => handle_move(app, store, -1),
        KeyCode::Char('g') => handle_goto(app, store, false),
        KeyCode::Char('G') => handle_goto(app, store, true),
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            switch_screen(app, store, Screen::all()[idx]);
        }
        KeyCode::Tab => cycle_screen(app, store, 1),
        KeyCode::BackTab => cycle_screen(app, store, -1),
        KeyCode::Enter => handle_enter(app, store)?,
        KeyCode::Esc => handle_escape(app, store),
        _ => match app.screen {
            Screen::Accounts => handle_accounts_key(key, app, store),
            Screen::Payments => handle_payments_key(key, app, store)?,
            Screen::Cards => handle_cards_key(key, app, store)?,
            Screen::Settings => handle_settings_key(key, app, store)?,
            Screen::Dashboard => {}
        },
    }
    Ok(())
}

fn handle_accounts_key(key: KeyEvent, app: &mut App, store: &Store) {
    match key.code {
        KeyCode::Char('t') => {
            app.filter.kind = app.filter.kind.cycle();
            app.refresh_transactions(store);
            app.set_status(format!("Type: {}", app.filter.kind.as_str()));
        }
        KeyCode::Char('s') => {
            app.filter.status = app.filter.status.cycle();
            app.refresh_transactions(store);
            app.set_status(format!("Status: {}", app.filter.status.as_str()));
        }
        KeyCode::Char('x') => {
            app.filter.reset();
            app.refresh_transactions(store);
            app.set_status("Filters cleared");
        }
        _ => {}
    }
}

fn handle_payments_key(key: KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.payments_pane = PaymentsPane::Payees,
        KeyCode::Char('l') | KeyCode::Right => app.payments_pane = PaymentsPane::Scheduled,
        KeyCode::Char('a') => {
            let cmd = match app.payments_pane {
                PaymentsPane::Payees => "payee-add ",
                PaymentsPane::Scheduled => "scheduled-add ",
            };
            prefill(app, cmd.to_string());
        }
        KeyCode::Char('e') => {
            let cmd = match app.payments_pane {
                PaymentsPane::Payees => app.selected_payee().map(|p| {
                    format!("payee-edit {} | {} | {}", p.name, p.account_number, p.bank_name)
                }),
                PaymentsPane::Scheduled => app.selected_scheduled().map(|s| {
                    format!(
                        "scheduled-edit {} | {} | {} | {} | {}",
                        s.date,
                        s.kind.as_str(),
                        s.payee_name,
                        s.amount,
                        s.frequency.as_str()
                    )
                }),
            };
            match cmd {
                Some(cmd) => prefill(app, cmd),
                None => app.set_status("Nothing selected"),
            }
        }
        KeyCode::Char('D') => {
            let cmd = match app.payments_pane {
                PaymentsPane::Payees => "payee-delete",
                PaymentsPane::Scheduled => "scheduled-delete",
            };
            commands::handle_command(cmd, app, store)?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_cards_key(key: KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    let cmd = match key.code {
        KeyCode::Char('l') => "lock",
        KeyCode::Char('r') => "reveal",
        KeyCode::Char('R') => "report-lost",
        _ => return Ok(()),
    };
    commands::handle_command(cmd, app, store)
}

fn handle_settings_key(key: KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    if key.code == KeyCode::Char('R') {
        commands::handle_command("read-all", app, store)?;
    }
    Ok(())
}

/// Drop into command mode with `text` already typed.
fn prefill(app: &mut App, text: String) {
    app.command_input = text;
    app.input_mode = InputMode::Command;
}

fn handle_command_input(key: KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            debug!(command = %input, "command entered");
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    Ok(())
}

/// Search runs against the opened account; with none open, the highlighted one is opened.
fn start_search(app: &mut App, store: &Store) {
    app.screen = Screen::Accounts;
    if app.scope == Scope::None {
        if let Some(id) = app.accounts.get(app.account_index).map(|a| a.id.clone()) {
            app.open_account(store, id);
        }
    }
    app.filter.query.clear();
    app.refresh_transactions(store);
    app.input_mode = InputMode::Search;
}

fn handle_search_input(key: KeyEvent, app: &mut App, store: &Store) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            if !app.filter.query.is_empty() {
                app.set_status(format!(
                    "Searching: {} ({} matches)",
                    app.filter.query,
                    app.transactions.len()
                ));
            }
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.filter.query.clear();
            app.refresh_transactions(store);
        }
        KeyCode::Backspace => {
            app.filter.query.pop();
            live_search(app, store);
        }
        KeyCode::Char(c) => {
            app.filter.query.push(c);
            live_search(app, store);
        }
        _ => {}
    }
}

fn live_search(app: &mut App, store: &Store) {
    app.transaction_index = 0;
    app.transaction_scroll = 0;
    app.refresh_transactions(store);
}

fn handle_confirm_input(key: KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    let confirmed = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
    commands::resolve_pending(app, store, confirmed)
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, store: &Store, screen: Screen) {
    app.screen = screen;
    match screen {
        Screen::Dashboard => app.refresh_dashboard(store),
        Screen::Accounts => app.refresh_accounts(store),
        Screen::Payments => app.refresh_payments(store),
        Screen::Cards => app.refresh_cards(store),
        Screen::Settings => app.refresh_settings(store),
    }
}

fn cycle_screen(app: &mut App, store: &Store, delta: isize) {
    let screens = Screen::all();
    let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    switch_screen(app, store, screens[wrap_index(idx, screens.len(), delta)]);
}

fn handle_move(app: &mut App, store: &Store, delta: isize) {
    let page = app.table_page();
    let step = |index: &mut usize, scroll: &mut usize, len: usize| {
        if delta > 0 {
            scroll_down(index, scroll, len, page);
        } else {
            scroll_up(index, scroll);
        }
    };
    match app.screen {
        Screen::Accounts if app.opened_account().is_some() => {
            let len = app.transactions.len();
            step(&mut app.transaction_index, &mut app.transaction_scroll, len);
        }
        Screen::Accounts => {
            // three lines per account entry
            let len = app.accounts.len();
            let page = (page / 3).max(1);
            if delta > 0 {
                scroll_down(&mut app.account_index, &mut app.account_scroll, len, page);
            } else {
                scroll_up(&mut app.account_index, &mut app.account_scroll);
            }
        }
        Screen::Payments => match app.payments_pane {
            PaymentsPane::Payees => {
                let len = app.payees.len();
                step(&mut app.payee_index, &mut app.payee_scroll, len);
            }
            PaymentsPane::Scheduled => {
                let len = app.scheduled.len();
                step(&mut app.scheduled_index, &mut app.scheduled_scroll, len);
            }
        },
        Screen::Cards => {
            app.card_index = wrap_index(app.card_index, app.cards.len(), delta);
            app.reveal_number = false;
            app.refresh_cards(store);
        }
        Screen::Settings => {
            app.notification_index = wrap_index(app.notification_index, app.notifications.len(), delta);
        }
        Screen::Dashboard => {}
    }
}

fn handle_goto(app: &mut App, store: &Store, bottom: bool) {
    let page = app.table_page();
    let jump = |index: &mut usize, scroll: &mut usize, len: usize| {
        if bottom {
            scroll_to_bottom(index, scroll, len, page);
        } else {
            scroll_to_top(index, scroll);
        }
    };
    match app.screen {
        Screen::Accounts if app.opened_account().is_some() => {
            let len = app.transactions.len();
            jump(&mut app.transaction_index, &mut app.transaction_scroll, len);
        }
        Screen::Accounts => {
            let len = app.accounts.len();
            jump(&mut app.account_index, &mut app.account_scroll, len);
        }
        Screen::Payments => match app.payments_pane {
            PaymentsPane::Payees => {
                let len = app.payees.len();
                jump(&mut app.payee_index, &mut app.payee_scroll, len);
            }
            PaymentsPane::Scheduled => {
                let len = app.scheduled.len();
                jump(&mut app.scheduled_index, &mut app.scheduled_scroll, len);
            }
        },
        Screen::Cards => {
            app.card_index = if bottom { app.cards.len().saturating_sub(1) } else { 0 };
            app.refresh_cards(store);
        }
        Screen::Settings => {
            app.notification_index = if bottom {
                app.notifications.len().saturating_sub(1)
            } else {
                0
            };
        }
        Screen::Dashboard => {}
    }
}

fn handle_enter(app: &mut App, store: &mut Store) -> Result<()> {
    match app.screen {
        Screen::Dashboard => switch_screen(app, store, Screen::Accounts),
        Screen::Accounts if app.opened_account().is_none() => {
            if let Some(account) = app.accounts.get(app.account_index) {
                let (id, name) = (account.id.clone(), account.name.clone());
                app.open_account(store, id);
                app.set_status(format!("Viewing: {name}"));
            }
        }
        Screen::Settings => commands::handle_command("read", app, store)?,
        Screen::Accounts | Screen::Payments | Screen::Cards => {}
    }
    Ok(())
}

fn handle_escape(app: &mut App, store: &Store) {
    if app.screen == Screen::Accounts && app.opened_account().is_some() {
        app.scope = Scope::None;
        app.refresh_transactions(store);
        return;
    }
    app.status_message.clear();
}
