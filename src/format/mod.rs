//! Display formatting for amounts, dates and status badges.
//!
//! Every function here is total: malformed input degrades to a fallback
//! string instead of an error, since these only feed rendering.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{CardStatus, Direction, ScheduledStatus, TxnStatus};

/// Shown in place of an amount whose currency code is malformed.
pub(crate) const FALLBACK: &str = "—";

const SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("INR", "₹"),
    ("CAD", "CA$"),
    ("AUD", "A$"),
    ("MXN", "MX$"),
    ("CNY", "CN¥"),
];

/// True for a three-letter ASCII code such as `USD` (any case).
pub(crate) fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

fn symbol_for(code: &str) -> Option<&'static str> {
    SYMBOLS.iter().find(|(c, _)| *c == code).map(|(_, s)| *s)
}

/// Group the integer digits of a non-negative two-place decimal string.
/// e.g. `"1234567.89"` → `"1,234,567.89"`
fn group_thousands(formatted: &str) -> String {
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    format!("{with_commas}.{dec_part}")
}

/// Format an amount in the given currency with thousand separators and
/// exactly two decimal places, en-US style.
///
/// `format_currency(dec!(1234.5), "USD")` → `"$1,234.50"`,
/// `format_currency(dec!(-1245.5), "USD")` → `"-$1,245.50"`,
/// `format_currency(dec!(10), "SEK")` → `"SEK 10.00"`.
pub(crate) fn format_currency(amount: Decimal, currency_code: &str) -> String {
    if !is_currency_code(currency_code) {
        return FALLBACK.to_string();
    }
    let code = currency_code.to_ascii_uppercase();

    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let abs = rounded.abs();
    let grouped = group_thousands(&format!("{abs:.2}"));

    let body = match symbol_for(&code) {
        Some(symbol) => format!("{symbol}{grouped}"),
        None => format!("{code} {grouped}"),
    };

    if rounded < Decimal::ZERO {
        format!("-{body}")
    } else {
        body
    }
}

/// Format a stored (non-negative) magnitude with the sign of its direction,
/// e.g. `+$5,500.00` or `-$75.99`.
pub(crate) fn format_signed(direction: Direction, amount: Decimal, currency_code: &str) -> String {
    let formatted = format_currency(amount.abs(), currency_code);
    if formatted == FALLBACK {
        return formatted;
    }
    format!("{}{formatted}", direction.sign())
}

/// Short en-US calendar date: `2024-07-28` → `7/28/2024`.
/// Anything that is not an ISO date is returned unchanged.
pub(crate) fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Long en-US calendar date: `2024-07-28` → `July 28, 2024`.
pub(crate) fn format_date_long(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Badge {
    /// Success / primary.
    Default,
    /// Neutral.
    Secondary,
    /// Error.
    Destructive,
}

pub(crate) fn status_badge(status: TxnStatus) -> Badge {
    match status {
        TxnStatus::Completed => Badge::Default,
        TxnStatus::Pending => Badge::Secondary,
        TxnStatus::Failed => Badge::Destructive,
    }
}

/// Badge for a status that arrives as text; unknown values are neutral.
pub(crate) fn status_badge_for(label: &str) -> Badge {
    TxnStatus::parse(label).map_or(Badge::Secondary, status_badge)
}

pub(crate) fn card_badge(status: CardStatus) -> Badge {
    match status {
        CardStatus::Active => Badge::Default,
        CardStatus::Locked => Badge::Secondary,
        CardStatus::Expired | CardStatus::LostStolen => Badge::Destructive,
    }
}

/// Scheduled and processing payments have no transaction counterpart, so
/// they land on the neutral fallback.
pub(crate) fn scheduled_badge(status: ScheduledStatus) -> Badge {
    status_badge_for(status.as_str())
}

#[cfg(test)]
mod tests;
