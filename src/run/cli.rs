use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::filter::{Scope, StatusFilter, TransactionFilter, TypeFilter};
use crate::format::{format_currency, format_date, format_date_long, format_signed};
use crate::models::{Account, AccountId, AccountType, PayeeDraft, TransactionRecord};
use crate::statement::{self, StatementPeriod};
use crate::store::Store;
use crate::summary;

pub(crate) fn as_cli(args: &[String], store: &mut Store, config: &Config) -> Result<()> {
    match args[1].as_str() {
        "accounts" => cli_accounts(&args[2..], store, config),
        "transactions" | "t" => cli_transactions(&args[2..], store),
        "statement" => cli_statement(&args[2..], store, config),
        "payees" => cli_payees(store),
        "payee-add" => cli_payee_add(&args[2..], store),
        "payee-delete" => cli_payee_delete(&args[2..], store),
        "scheduled" => cli_scheduled(store),
        "cards" => cli_cards(store),
        "summary" | "s" => cli_summary(store, config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("findash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FinDash - personal banking dashboard");
    println!();
    println!("Usage: findash [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  accounts                      List accounts and net worth");
    println!("    --type <account type>       Only accounts of this type");
    println!("  transactions                  List transactions (all accounts)");
    println!("    --account <id or name>      Only this account");
    println!("    --search <text>             Match description or payee");
    println!("    --type <all|income|expense>");
    println!("    --status <all|completed|pending|failed>");
    println!("  statement <account> [path]    Export a CSV statement");
    println!("    --period <last30|last90|FROM..TO>");
    println!("  payees                        List saved payees");
    println!("  payee-add <name> <account> <bank>");
    println!("                                Validate and add a payee");
    println!("  payee-delete <id> [--yes]     Delete a payee (declined without --yes)");
    println!("  scheduled                     List scheduled transactions");
    println!("  cards                         List cards");
    println!("  summary                       Print income, expenses and spending");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

/// Value following `--name` in the argument list.
fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}

/// Flags that take the next argument as their value.
const VALUE_FLAGS: &[&str] = &["--account", "--search", "--type", "--status", "--period"];

/// Arguments that are neither flags nor flag values.
fn positionals(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
        } else if !arg.starts_with('-') {
            out.push(arg.as_str());
        }
    }
    out
}

fn resolve_account(store: &Store, key: &str) -> Result<AccountId> {
    let account = store.find_account(key).with_context(|| {
        let names: Vec<&str> = store.accounts().iter().map(|a| a.id.as_str()).collect();
        format!("Available accounts: {}", names.join(", "))
    })?;
    Ok(account.id.clone())
}

fn cli_accounts(args: &[String], store: &Store, config: &Config) -> Result<()> {
    let kind = match flag(args, "--type") {
        Some(t) => Some(AccountType::parse(t).with_context(|| {
            let names: Vec<&str> = AccountType::all().iter().map(|k| k.as_str()).collect();
            format!("Unknown account type '{t}'. Use one of: {}", names.join(", "))
        })?),
        None => None,
    };
    let accounts: Vec<&Account> = store
        .accounts()
        .iter()
        .filter(|a| kind.is_none_or(|k| a.account_type == k))
        .collect();
    if accounts.is_empty() {
        println!("No accounts");
        return Ok(());
    }

    println!(
        "{:<14} {:<22} {:<12} {:>16}  Trend",
        "ID", "Name", "Type", "Balance"
    );
    println!("{}", "─".repeat(72));
    for acct in &accounts {
        println!(
            "{:<14} {:<22} {:<12} {:>16}  {}",
            acct.id.as_str(),
            acct.name,
            acct.account_type.as_str(),
            format_currency(acct.balance, &acct.currency),
            acct.trend.arrow()
        );
    }
    println!("{}", "─".repeat(72));
    println!(
        "{:<50} {:>16}",
        "Net worth",
        format_currency(accounts.iter().map(|a| a.balance).sum(), &config.default_currency)
    );
    Ok(())
}

fn cli_transactions(args: &[String], store: &Store) -> Result<()> {
    let scope = match flag(args, "--account") {
        Some(key) => Scope::Account(resolve_account(store, key)?),
        None => Scope::All,
    };
    let kind = match flag(args, "--type") {
        Some(t) => TypeFilter::parse(t)
            .with_context(|| format!("Unknown type '{t}'. Use all, income or expense"))?,
        None => TypeFilter::All,
    };
    let status = match flag(args, "--status") {
        Some(s) => StatusFilter::parse(s).with_context(|| {
            format!("Unknown status '{s}'. Use all, completed, pending or failed")
        })?,
        None => StatusFilter::All,
    };
    let filter = TransactionFilter::new(flag(args, "--search").unwrap_or(""), kind, status);

    let view = store.view(&scope, &filter);
    if view.is_empty() {
        println!("No transactions match");
        return Ok(());
    }

    println!(
        "{:<11} {:<30} {:<22} {:<16} {:>14}  Status",
        "Date", "Description", "Payee/Payer", "Category", "Amount"
    );
    println!("{}", "─".repeat(106));
    for r in &view {
        println!(
            "{:<11} {:<30} {:<22} {:<16} {:>14}  {}",
            format_date(&r.date),
            r.description,
            r.counterparty,
            r.category,
            format_signed(r.direction, r.amount, store.currency_of(&r.account_id)),
            r.status.label()
        );
    }
    println!();
    println!("{} transaction(s)", view.len());
    Ok(())
}

fn cli_statement(args: &[String], store: &Store, config: &Config) -> Result<()> {
    let rest = positionals(args);
    let Some(key) = rest.first() else {
        anyhow::bail!("Usage: findash statement <account> [path] [--period <last30|last90|FROM..TO>]");
    };
    let account = resolve_account(store, key)?;

    let period = match flag(args, "--period") {
        Some(p) => StatementPeriod::parse(p)?,
        None => config.statement_period()?,
    };

    let output_path = rest
        .get(1)
        .map(|p| shellexpand(p))
        .unwrap_or_else(|| statement::default_path(&account, period));

    let count = statement::export_statement(store, &account, period, Path::new(&output_path))?;
    if count == 0 {
        println!("No transactions in {}", period.label());
    }
    println!("Exported {count} transactions to {output_path}");
    Ok(())
}

fn cli_payees(store: &Store) -> Result<()> {
    let payees = store.payees.items();
    if payees.is_empty() {
        println!("No payees");
        return Ok(());
    }
    println!("{:<10} {:<24} {:<18} Bank", "ID", "Name", "Account No.");
    println!("{}", "─".repeat(72));
    for p in payees {
        println!(
            "{:<10} {:<24} {:<18} {}",
            p.id, p.name, p.account_number, p.bank_name
        );
    }
    Ok(())
}

fn cli_payee_add(args: &[String], store: &mut Store) -> Result<()> {
    let get = |i: usize| args.get(i).map(String::as_str).unwrap_or_default();
    let payee = store.payees.add(PayeeDraft::new(get(0), get(1), get(2)))?;
    println!("Payee \"{}\" added ({})", payee.name, payee.id);
    cli_payees(store)
}

fn cli_payee_delete(args: &[String], store: &mut Store) -> Result<()> {
    let Some(id) = positionals(args).first().map(|s| s.to_string()) else {
        anyhow::bail!("Usage: findash payee-delete <id> [--yes]");
    };
    let confirmed = args.iter().any(|a| a == "--yes" || a == "-y");
    match store.payees.delete(&id, |_| confirmed)? {
        Some(p) => println!("Deleted payee: {}", p.name),
        None => println!("Not deleted: pass --yes to confirm removing '{id}'"),
    }
    cli_payees(store)
}

fn cli_scheduled(store: &Store) -> Result<()> {
    let items = store.scheduled.items();
    if items.is_empty() {
        println!("Nothing scheduled");
        return Ok(());
    }
    println!(
        "{:<6} {:<16} {:<13} {:<22} {:>12}  {:<10} Status",
        "ID", "Date", "Type", "Payee", "Amount", "Frequency"
    );
    println!("{}", "─".repeat(96));
    for s in items {
        println!(
            "{:<6} {:<16} {:<13} {:<22} {:>12}  {:<10} {}",
            s.id,
            format_date_long(&s.date),
            s.kind.as_str(),
            s.payee_name,
            format_currency(s.amount, &s.currency),
            s.frequency.as_str(),
            s.status.as_str()
        );
    }
    Ok(())
}

fn cli_cards(store: &Store) -> Result<()> {
    let cards = store.cards.cards();
    if cards.is_empty() {
        println!("No cards");
        return Ok(());
    }
    println!(
        "{:<8} {:<22} {:<20} {:<6} {:<12} Daily limit",
        "ID", "Name", "Number", "Exp", "Status"
    );
    println!("{}", "─".repeat(86));
    for c in cards {
        println!(
            "{:<8} {:<22} {:<20} {:<6} {:<12} {}",
            c.id,
            c.name,
            crate::cards::display_number(c, false),
            c.expiry,
            c.status.as_str(),
            format_currency(c.controls.daily_limit, "USD")
        );
    }
    Ok(())
}

fn cli_summary(store: &Store, config: &Config) -> Result<()> {
    let currency = &config.default_currency;
    let totals = summary::totals(store.records());
    let spending = summary::spending_by_category(store.records());
    let all: Vec<_> = store.records().iter().collect();
    let recent = summary::recent(&all, config.recent_limit);

    println!("FinDash summary");
    println!("{}", "─".repeat(40));
    println!("  Net Worth:  {}", format_currency(summary::net_worth(store.accounts()), currency));
    println!("  Income:     {}", format_currency(totals.income, currency));
    println!("  Expenses:   {}", format_currency(totals.expenses, currency));
    println!("  Net:        {}", format_currency(totals.net(), currency));
    println!("  Unread:     {}", store.notifications.unread_count());

    if !spending.is_empty() {
        println!();
        println!("Spending by Category:");
        for (name, amount) in &spending {
            println!("  {name:<24} {}", format_currency(*amount, currency));
        }
    }

    if !recent.is_empty() {
        println!();
        println!("Recent Activity:");
        for r in recent {
            println!("  {}", recent_line(store, r));
        }
    }
    Ok(())
}

/// One recent-activity row, amount in the currency of the record's account.
fn recent_line(store: &Store, r: &TransactionRecord) -> String {
    format!(
        "{:<11} {:<30} {:>14}",
        format_date(&r.date),
        r.description,
        format_signed(r.direction, r.amount, store.currency_of(&r.account_id))
    )
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
