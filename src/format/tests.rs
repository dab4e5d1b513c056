use rust_decimal_macros::dec;

use super::*;

// ── format_currency ───────────────────────────────────────────

#[test]
fn test_format_currency_basic() {
    assert_eq!(format_currency(dec!(1234.5), "USD"), "$1,234.50");
}

#[test]
fn test_format_currency_no_commas() {
    assert_eq!(format_currency(dec!(999.99), "USD"), "$999.99");
}

#[test]
fn test_format_currency_zero() {
    assert_eq!(format_currency(dec!(0), "USD"), "$0.00");
}

#[test]
fn test_format_currency_negative_balance() {
    assert_eq!(format_currency(dec!(-1245.50), "USD"), "-$1,245.50");
}

#[test]
fn test_format_currency_millions() {
    assert_eq!(format_currency(dec!(10000000.00), "USD"), "$10,000,000.00");
}

#[test]
fn test_format_currency_rounds_half_away_from_zero() {
    assert_eq!(format_currency(dec!(0.125), "USD"), "$0.13");
    assert_eq!(format_currency(dec!(-0.125), "USD"), "-$0.13");
    assert_eq!(format_currency(dec!(2.994), "USD"), "$2.99");
}

#[test]
fn test_format_currency_tiny_negative_rounds_to_unsigned_zero() {
    assert_eq!(format_currency(dec!(-0.001), "USD"), "$0.00");
}

#[test]
fn test_format_currency_known_symbols() {
    assert_eq!(format_currency(dec!(10), "EUR"), "€10.00");
    assert_eq!(format_currency(dec!(10), "GBP"), "£10.00");
    assert_eq!(format_currency(dec!(1500), "CAD"), "CA$1,500.00");
}

#[test]
fn test_format_currency_lowercase_code() {
    assert_eq!(format_currency(dec!(5), "usd"), "$5.00");
}

#[test]
fn test_format_currency_unknown_code_uses_code() {
    assert_eq!(format_currency(dec!(1234.5), "SEK"), "SEK 1,234.50");
}

#[test]
fn test_format_currency_malformed_code_falls_back() {
    assert_eq!(format_currency(dec!(1), ""), FALLBACK);
    assert_eq!(format_currency(dec!(1), "US"), FALLBACK);
    assert_eq!(format_currency(dec!(1), "U$D"), FALLBACK);
    assert_eq!(format_currency(dec!(1), "DOLLAR"), FALLBACK);
}

#[test]
fn test_is_currency_code() {
    assert!(is_currency_code("USD"));
    assert!(is_currency_code("eur"));
    assert!(!is_currency_code("12A"));
    assert!(!is_currency_code("€€€"));
}

// ── format_signed ─────────────────────────────────────────────

#[test]
fn test_format_signed_income() {
    assert_eq!(
        format_signed(Direction::Income, dec!(5500), "USD"),
        "+$5,500.00"
    );
}

#[test]
fn test_format_signed_expense() {
    assert_eq!(
        format_signed(Direction::Expense, dec!(75.99), "USD"),
        "-$75.99"
    );
}

#[test]
fn test_format_signed_malformed_code_has_no_sign() {
    assert_eq!(format_signed(Direction::Income, dec!(1), "?"), FALLBACK);
}

// ── dates ─────────────────────────────────────────────────────

#[test]
fn test_format_date_short() {
    assert_eq!(format_date("2024-07-28"), "7/28/2024");
    assert_eq!(format_date("2024-12-01"), "12/1/2024");
}

#[test]
fn test_format_date_is_calendar_date_not_instant() {
    // No timezone shift: the first of the month stays the first.
    assert_eq!(format_date("2024-01-01"), "1/1/2024");
}

#[test]
fn test_format_date_passthrough() {
    assert_eq!(format_date("Next 1st of month"), "Next 1st of month");
    assert_eq!(format_date("2024-13-40"), "2024-13-40");
}

#[test]
fn test_format_date_long() {
    assert_eq!(format_date_long("2024-07-26"), "July 26, 2024");
    assert_eq!(format_date_long("soon"), "soon");
}

// ── badges ────────────────────────────────────────────────────

#[test]
fn test_status_badge() {
    assert_eq!(status_badge(TxnStatus::Completed), Badge::Default);
    assert_eq!(status_badge(TxnStatus::Pending), Badge::Secondary);
    assert_eq!(status_badge(TxnStatus::Failed), Badge::Destructive);
}

#[test]
fn test_status_badge_for_unknown_is_neutral() {
    assert_eq!(status_badge_for("failed"), Badge::Destructive);
    assert_eq!(status_badge_for("reversed"), Badge::Secondary);
    assert_eq!(status_badge_for(""), Badge::Secondary);
}

#[test]
fn test_card_badge() {
    assert_eq!(card_badge(CardStatus::Active), Badge::Default);
    assert_eq!(card_badge(CardStatus::Locked), Badge::Secondary);
    assert_eq!(card_badge(CardStatus::Expired), Badge::Destructive);
    assert_eq!(card_badge(CardStatus::LostStolen), Badge::Destructive);
}

#[test]
fn test_scheduled_badge() {
    assert_eq!(scheduled_badge(ScheduledStatus::Completed), Badge::Default);
    assert_eq!(scheduled_badge(ScheduledStatus::Processing), Badge::Secondary);
    assert_eq!(scheduled_badge(ScheduledStatus::Failed), Badge::Destructive);
}
