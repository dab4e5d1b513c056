use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PaymentsPane, PendingAction, Screen};
use crate::error::{require, Error};
use crate::filter::{StatusFilter, TypeFilter};
use crate::format::format_currency;
use crate::forms::{self, BillPayForm, PasswordChange, TransferForm, TransferType};
use crate::models::{CardControls, Frequency, PayeeDraft, ScheduledDraft, ScheduledKind, ScheduledStatus};
use crate::statement::{self, StatementPeriod};
use crate::store::Store;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinDash", cmd_quit, r);
    register_command!("quit", "Quit FinDash", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("a", "Go to Accounts", cmd_accounts, r);
    register_command!("accounts", "Go to Accounts", cmd_accounts, r);
    register_command!("p", "Go to Payments", cmd_payments, r);
    register_command!("payments", "Go to Payments", cmd_payments, r);
    register_command!("c", "Go to Cards", cmd_cards, r);
    register_command!("cards", "Go to Cards", cmd_cards, r);
    register_command!("settings", "Go to Settings", cmd_settings, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "account",
        "Open account history (e.g. :account Primary Checking)",
        cmd_account,
        r
    );
    register_command!(
        "search",
        "Search description or payee (e.g. :search rent)",
        cmd_search,
        r
    );
    register_command!("s", "Search description or payee", cmd_search, r);
    register_command!(
        "type",
        "Filter by type: all, income, expense",
        cmd_type,
        r
    );
    register_command!(
        "status",
        "Filter by status: all, completed, pending, failed",
        cmd_status,
        r
    );
    register_command!("clear", "Reset search and filters", cmd_clear, r);
    register_command!(
        "statement",
        "Export statement CSV for the open account (e.g. :statement ~/july.csv)",
        cmd_statement,
        r
    );
    register_command!(
        "period",
        "Statement period: last30, last90 or FROM..TO",
        cmd_period,
        r
    );
    register_command!(
        "transfer",
        "Transfer (e.g. :transfer acc_chk_001 | acc_sav_002 | 500 | own)",
        cmd_transfer,
        r
    );
    register_command!(
        "paybill",
        "Pay a bill (e.g. :paybill biller1 | 12345 | 75.50 | acc_chk_001)",
        cmd_paybill,
        r
    );
    register_command!(
        "payee-add",
        "Add payee (e.g. :payee-add Jane Smith | 5555 | Credit Union)",
        cmd_payee_add,
        r
    );
    register_command!(
        "payee-edit",
        "Edit selected payee (name | account number | bank)",
        cmd_payee_edit,
        r
    );
    register_command!(
        "payee-delete",
        "Delete selected payee",
        cmd_payee_delete,
        r
    );
    register_command!(
        "scheduled-add",
        "Schedule payment (date | transfer/bill | payee | amount [| frequency])",
        cmd_scheduled_add,
        r
    );
    register_command!(
        "scheduled-edit",
        "Edit selected scheduled payment",
        cmd_scheduled_edit,
        r
    );
    register_command!(
        "scheduled-delete",
        "Delete selected scheduled payment",
        cmd_scheduled_delete,
        r
    );
    register_command!("lock", "Lock or unlock selected card", cmd_lock, r);
    register_command!(
        "report-lost",
        "Report selected card lost/stolen",
        cmd_report_lost,
        r
    );
    register_command!("reveal", "Show or hide the full card number", cmd_reveal, r);
    register_command!(
        "limit",
        "Set daily limit for selected card (e.g. :limit 2500)",
        cmd_limit,
        r
    );
    register_command!(
        "control",
        "Toggle card control: online, intl, contactless",
        cmd_control,
        r
    );
    register_command!(
        "profile",
        "Update profile (e.g. :profile email me@example.com)",
        cmd_profile,
        r
    );
    register_command!(
        "password",
        "Change password (:password <current> <new> <confirm>)",
        cmd_password,
        r
    );
    register_command!(
        "notify",
        "Toggle notification preference: email, sms, alerts",
        cmd_notify,
        r
    );
    register_command!("read", "Mark notification read (e.g. :read n1)", cmd_read, r);
    register_command!("read-all", "Mark all notifications read", cmd_read_all, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1)
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Split `a | b | c` command arguments into trimmed fields.
fn fields(args: &str) -> Vec<&str> {
    if args.trim().is_empty() {
        return Vec::new();
    }
    args.split('|').map(str::trim).collect()
}

/// Resolve the answer to a confirm prompt. Declining still goes through the
/// store so the refusal is recorded the same way.
pub(crate) fn resolve_pending(app: &mut App, store: &mut Store, confirmed: bool) -> anyhow::Result<()> {
    let Some(action) = app.pending_action.take() else {
        return Ok(());
    };
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();

    let outcome = match action {
        PendingAction::DeletePayee { id, .. } => store.payees.delete(&id, |_| confirmed).map(|removed| {
            removed.map(|p| format!("Deleted payee: {}", p.name))
        }),
        PendingAction::DeleteScheduled { id, .. } => store.scheduled.delete(&id, |_| confirmed).map(|removed| {
            removed.map(|st| format!("Deleted scheduled payment to {}", st.payee_name))
        }),
        PendingAction::ReportCardLost { id, name } => store
            .cards
            .report_lost(&id, |_| confirmed)
            .map(|done| done.then(|| format!("{name} reported lost/stolen and blocked"))),
    };

    match outcome {
        Ok(Some(msg)) => app.set_status(msg),
        Ok(None) => app.set_status("Cancelled"),
        Err(e) => app.set_status(e.to_string()),
    }
    app.refresh_all(store);
    Ok(())
}

// ── Navigation ───────────────────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard(store);
    Ok(())
}

fn cmd_accounts(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Accounts;
    app.refresh_accounts(store);
    Ok(())
}

fn cmd_payments(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Payments;
    app.refresh_payments(store);
    Ok(())
}

fn cmd_cards(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Cards;
    app.refresh_cards(store);
    Ok(())
}

fn cmd_settings(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Settings;
    app.refresh_settings(store);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

// ── Transaction history ──────────────────────────────────────

fn cmd_account(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Accounts;
    app.refresh_accounts(store);
    if args.is_empty() {
        app.set_status("Usage: :account <name or id>");
        return Ok(());
    }
    match store.find_account(args) {
        Ok(account) => {
            let (id, name) = (account.id.clone(), account.name.clone());
            app.open_account(store, id);
            app.set_status(format!("Viewing: {name}"));
        }
        Err(e) => {
            let names: Vec<&str> = store.accounts().iter().map(|a| a.name.as_str()).collect();
            app.set_status(format!("{e}. Available: {}", names.join(", ")));
        }
    }
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.filter.query = args.to_string();
    app.screen = Screen::Accounts;
    app.transaction_index = 0;
    app.transaction_scroll = 0;
    app.refresh_transactions(store);

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }
    Ok(())
}

fn cmd_type(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    match TypeFilter::parse(args) {
        Some(kind) => {
            app.filter.kind = kind;
            app.refresh_transactions(store);
            app.set_status(format!("Type: {}", kind.as_str()));
        }
        None => app.set_status(format!("Unknown type '{args}'. Use all, income or expense")),
    }
    Ok(())
}

fn cmd_status(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    match StatusFilter::parse(args) {
        Some(status) => {
            app.filter.status = status;
            app.refresh_transactions(store);
            app.set_status(format!("Status: {}", status.as_str()));
        }
        None => app.set_status(format!(
            "Unknown status '{args}'. Use all, completed, pending or failed"
        )),
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.filter.reset();
    app.refresh_transactions(store);
    app.set_status("Filters cleared");
    Ok(())
}

fn cmd_statement(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let account = app
        .opened_account()
        .or_else(|| app.accounts.get(app.account_index))
        .map(|a| a.id.clone());
    let Some(account) = account else {
        app.set_status("No account selected");
        return Ok(());
    };

    let path = if args.is_empty() {
        statement::default_path(&account, app.statement_period)
    } else {
        crate::run::shellexpand(args)
    };

    match statement::export_statement(store, &account, app.statement_period, std::path::Path::new(&path)) {
        Ok(0) => app.set_status(format!(
            "No transactions in {}; wrote empty statement to {path}",
            app.statement_period.label()
        )),
        Ok(count) => app.set_status(format!("Exported {count} transactions to {path}")),
        Err(e) => app.set_status(format!("Export failed: {e:#}")),
    }
    Ok(())
}

fn cmd_period(args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    match StatementPeriod::parse(args) {
        Ok(period) => {
            app.statement_period = period;
            app.set_status(format!("Statement period: {}", period.label()));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

// ── Transfers and bills ──────────────────────────────────────

fn cmd_transfer(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let f = fields(args);
    if f.len() < 3 {
        app.set_status("Usage: :transfer <from> | <to> | <amount> [| own/domestic/international] [| note]");
        return Ok(());
    }
    let transfer_type = match f.get(3).filter(|t| !t.is_empty()) {
        Some(t) => match TransferType::parse(t) {
            Some(tt) => tt,
            None => {
                app.set_status(format!("Unknown transfer type '{t}'"));
                return Ok(());
            }
        },
        None => TransferType::default(),
    };
    let form = TransferForm {
        from_account: f[0].to_string(),
        to_account: f[1].to_string(),
        amount: f[2].to_string(),
        transfer_type,
        description: f.get(4).copied().unwrap_or_default().to_string(),
    };
    match form.submit(store) {
        Ok(req) => {
            let currency = store.currency_of(&req.from).to_string();
            tracing::info!(from = req.from.as_str(), to = %req.to, "transfer submitted");
            app.set_status(format!(
                "Transfer of {} from {} to {} submitted ({})",
                format_currency(req.amount, &currency),
                req.from,
                req.to,
                req.transfer_type.as_str()
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_paybill(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let f = fields(args);
    if f.len() < 4 {
        let billers: Vec<String> = store
            .billers()
            .iter()
            .map(|b| format!("{} ({})", b.id, b.name))
            .collect();
        app.set_status(format!(
            "Usage: :paybill <biller> | <bill account> | <amount> | <from>. Billers: {}",
            billers.join(", ")
        ));
        return Ok(());
    }
    let form = BillPayForm {
        biller_id: f[0].to_string(),
        bill_account_number: f[1].to_string(),
        amount: f[2].to_string(),
        payment_account: f[3].to_string(),
    };
    match form.submit(store) {
        Ok(payment) => {
            tracing::info!(biller = %payment.biller.id, "bill payment submitted");
            app.set_status(format!(
                "Bill payment for {} of {} submitted",
                payment.biller.name,
                format_currency(payment.amount, store.currency_of(&payment.from))
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

// ── Payees and scheduled payments ────────────────────────────

fn payee_draft(args: &str) -> PayeeDraft {
    let f = fields(args);
    let get = |i: usize| f.get(i).copied().unwrap_or_default();
    PayeeDraft::new(get(0), get(1), get(2))
}

fn cmd_payee_add(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let outcome = store
        .payees
        .add(payee_draft(args))
        .map(|p| format!("Payee \"{}\" added ({})", p.name, p.id));
    app.screen = Screen::Payments;
    app.payments_pane = PaymentsPane::Payees;
    match outcome {
        Ok(msg) => {
            app.refresh_payments(store);
            app.payee_index = app.payees.len().saturating_sub(1);
            app.set_status(msg);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_payee_edit(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let Some(id) = app.selected_payee().map(|p| p.id.clone()) else {
        app.set_status("No payee selected");
        return Ok(());
    };
    match store.payees.edit(&id, payee_draft(args)) {
        Ok(p) => {
            let msg = format!("Payee \"{}\" updated", p.name);
            app.refresh_payments(store);
            app.set_status(msg);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_payee_delete(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    match app.selected_payee() {
        Some(p) => {
            let action = PendingAction::DeletePayee {
                id: p.id.clone(),
                name: p.name.clone(),
            };
            app.ask_confirm(action);
        }
        None => app.set_status("No payee selected"),
    }
    Ok(())
}

/// Build a scheduled payment draft from `date | kind | payee | amount [| frequency]`.
/// Status carries over from `status` when editing.
fn scheduled_draft(args: &str, currency: &str, status: ScheduledStatus) -> crate::error::Result<ScheduledDraft> {
    let f = fields(args);
    let get = |i: usize| f.get(i).copied().unwrap_or_default();
    require("Date", get(0))?;
    require("Type", get(1))?;
    let kind = ScheduledKind::parse(get(1))
        .ok_or_else(|| Error::invalid("type", format!("'{}' (use transfer or bill)", get(1))))?;
    let amount = forms::parse_amount("Amount", get(3))?;
    let frequency = match get(4) {
        "" => Frequency::Monthly,
        s => Frequency::parse(s).ok_or_else(|| Error::invalid("frequency", format!("'{s}'")))?,
    };
    Ok(ScheduledDraft {
        date: get(0).to_string(),
        kind,
        payee_name: get(2).to_string(),
        amount,
        currency: currency.to_string(),
        frequency,
        status,
    })
}

fn cmd_scheduled_add(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Payments;
    app.payments_pane = PaymentsPane::Scheduled;
    let outcome = scheduled_draft(args, &app.currency, ScheduledStatus::Scheduled)
        .and_then(|draft| store.scheduled.add(draft).map(|st| format!("Scheduled payment to {} added ({})", st.payee_name, st.id)));
    match outcome {
        Ok(msg) => {
            app.refresh_payments(store);
            app.scheduled_index = app.scheduled.len().saturating_sub(1);
            app.set_status(msg);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_scheduled_edit(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let Some((id, currency, status)) = app
        .selected_scheduled()
        .map(|st| (st.id.clone(), st.currency.clone(), st.status))
    else {
        app.set_status("No scheduled payment selected");
        return Ok(());
    };
    let outcome = scheduled_draft(args, &currency, status)
        .and_then(|draft| store.scheduled.edit(&id, draft).map(|st| format!("Scheduled payment to {} updated", st.payee_name)));
    match outcome {
        Ok(msg) => {
            app.refresh_payments(store);
            app.set_status(msg);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_scheduled_delete(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    match app.selected_scheduled() {
        Some(st) => {
            let action = PendingAction::DeleteScheduled {
                id: st.id.clone(),
                payee: st.payee_name.clone(),
            };
            app.ask_confirm(action);
        }
        None => app.set_status("No scheduled payment selected"),
    }
    Ok(())
}

// ── Cards ────────────────────────────────────────────────────

fn cmd_lock(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let Some(id) = app.selected_card().map(|c| c.id.clone()) else {
        app.set_status("No card selected");
        return Ok(());
    };
    match store.cards.toggle_lock(&id) {
        Ok(status) => app.set_status(format!("Card is now {status}")),
        Err(e) => app.set_status(e.to_string()),
    }
    app.refresh_cards(store);
    Ok(())
}

fn cmd_report_lost(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    match app.selected_card() {
        Some(c) => {
            let action = PendingAction::ReportCardLost {
                id: c.id.clone(),
                name: c.name.clone(),
            };
            app.ask_confirm(action);
        }
        None => app.set_status("No card selected"),
    }
    Ok(())
}

fn cmd_reveal(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.reveal_number = !app.reveal_number;
    app.set_status(if app.reveal_number {
        "Card number shown"
    } else {
        "Card number hidden"
    });
    Ok(())
}

fn update_controls(
    app: &mut App,
    store: &mut Store,
    change: impl FnOnce(&mut CardControls),
) -> anyhow::Result<()> {
    let Some(card) = app.selected_card() else {
        app.set_status("No card selected");
        return Ok(());
    };
    let id = card.id.clone();
    let mut controls = card.controls.clone();
    change(&mut controls);
    match store.cards.update_controls(&id, controls) {
        Ok(()) => app.set_status("Card controls saved"),
        Err(e) => app.set_status(e.to_string()),
    }
    app.refresh_cards(store);
    Ok(())
}

fn cmd_limit(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    match forms::parse_amount("daily limit", args) {
        Ok(limit) => update_controls(app, store, |c| c.daily_limit = limit),
        Err(e) => {
            app.set_status(e.to_string());
            Ok(())
        }
    }
}

fn cmd_control(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    match args.to_lowercase().as_str() {
        "online" => update_controls(app, store, |c| c.online = !c.online),
        "intl" | "international" => update_controls(app, store, |c| c.international = !c.international),
        "contactless" => update_controls(app, store, |c| c.contactless = !c.contactless),
        _ => {
            app.set_status("Usage: :control online|intl|contactless");
            Ok(())
        }
    }
}

// ── Settings ─────────────────────────────────────────────────

fn cmd_profile(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let (field, value) = args.split_once(' ').unwrap_or((args, ""));
    let value = value.trim().to_string();
    let mut profile = store.profile.clone();
    match field.to_lowercase().as_str() {
        "name" => profile.full_name = value,
        "email" => profile.email = value,
        "phone" => profile.phone = value,
        "street" => profile.street_address = value,
        "city" => profile.city = value,
        "postal" => profile.postal_code = value,
        "country" => profile.country = value,
        _ => {
            app.set_status("Usage: :profile name|email|phone|street|city|postal|country <value>");
            return Ok(());
        }
    }
    match forms::validate_profile(&profile) {
        Ok(()) => {
            store.profile = profile;
            tracing::info!("profile updated");
            app.refresh_settings(store);
            app.set_status("Profile updated");
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_password(args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    let mut words = args.split_whitespace();
    let change = PasswordChange {
        current: words.next().unwrap_or_default().to_string(),
        new: words.next().unwrap_or_default().to_string(),
        confirm: words.next().unwrap_or_default().to_string(),
    };
    match change.validate() {
        Ok(()) => {
            tracing::info!("password change accepted");
            app.set_status("Password updated");
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_notify(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let prefs = &mut store.prefs;
    let (label, on) = match args.to_lowercase().as_str() {
        "email" => {
            prefs.email = !prefs.email;
            ("Email notifications", prefs.email)
        }
        "sms" => {
            prefs.sms = !prefs.sms;
            ("SMS notifications", prefs.sms)
        }
        "alerts" => {
            prefs.transaction_alerts = !prefs.transaction_alerts;
            ("Transaction alerts", prefs.transaction_alerts)
        }
        _ => {
            app.set_status("Usage: :notify email|sms|alerts");
            return Ok(());
        }
    };
    app.set_status(format!("{label} {}", if on { "on" } else { "off" }));
    app.refresh_settings(store);
    Ok(())
}

fn cmd_read(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let id = if args.is_empty() {
        match app.notifications.get(app.notification_index) {
            Some(n) => n.id.clone(),
            None => {
                app.set_status("No notification selected");
                return Ok(());
            }
        }
    } else {
        args.to_string()
    };
    match store.notifications.mark_read(&id) {
        Ok(()) => app.set_status("Marked as read"),
        Err(e) => app.set_status(e.to_string()),
    }
    app.refresh_settings(store);
    Ok(())
}

fn cmd_read_all(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let n = store.notifications.mark_all_read();
    app.refresh_settings(store);
    app.set_status(format!(
        "Marked {n} notification{} as read",
        if n == 1 { "" } else { "s" }
    ));
    Ok(())
}
