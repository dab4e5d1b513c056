#![allow(clippy::unwrap_used)]

use super::*;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn checking() -> AccountId {
    AccountId::new("acc_chk_001")
}

// ── Periods ───────────────────────────────────────────────────

#[test]
fn test_parse_periods() {
    assert_eq!(StatementPeriod::parse("last30").unwrap(), StatementPeriod::Last30);
    assert_eq!(StatementPeriod::parse(" LAST90 ").unwrap(), StatementPeriod::Last90);
    assert_eq!(
        StatementPeriod::parse("2024-07-01..2024-07-31").unwrap(),
        StatementPeriod::Custom {
            from: date("2024-07-01"),
            to: date("2024-07-31"),
        }
    );
}

#[test]
fn test_parse_rejects_bad_periods() {
    assert!(StatementPeriod::parse("yesterday").is_err());
    assert!(StatementPeriod::parse("2024-07-31..2024-07-01").is_err());
    assert!(StatementPeriod::parse("2024-13-01..2024-07-01").is_err());
}

#[test]
fn test_bounds_relative_to_reference() {
    let (from, to) = StatementPeriod::Last30.bounds(date("2024-07-28"));
    assert_eq!(from, date("2024-06-28"));
    assert_eq!(to, date("2024-07-28"));
}

#[test]
fn test_label_roundtrips_through_parse() {
    let p = StatementPeriod::parse("2024-07-01..2024-07-15").unwrap();
    assert_eq!(StatementPeriod::parse(&p.label()).unwrap(), p);
}

// ── Selection ─────────────────────────────────────────────────

#[test]
fn test_reference_date_is_latest_record() {
    let store = Store::sample().unwrap();
    let recs = store.account_records(&checking());
    assert_eq!(reference_date(&recs), date("2024-07-28"));
}

#[test]
fn test_in_period_custom_range() {
    let store = Store::sample().unwrap();
    let recs = store.account_records(&checking());
    let period = StatementPeriod::parse("2024-07-25..2024-07-26").unwrap();
    let rows = in_period(&recs, period, date("2024-07-28"));
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["txn_003", "txn_006"]);
}

#[test]
fn test_in_period_skips_unreadable_dates() {
    let store = Store::sample().unwrap();
    let mut odd = store.records()[0].clone();
    odd.date = "sometime".into();
    let rows = in_period(&[&odd], StatementPeriod::Last90, date("2024-07-28"));
    assert!(rows.is_empty());
}

// ── Output ────────────────────────────────────────────────────

#[test]
fn test_write_statement_format() {
    let store = Store::sample().unwrap();
    let recs = store.account_records(&checking());
    let mut buf = Vec::new();
    let count = write_statement(&mut buf, &recs[..2]).unwrap();
    assert_eq!(count, 2);

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Date,Description,Payee/Payer,Category,Amount,Status");
    assert_eq!(
        lines[1],
        "2024-07-28,Salary Deposit,Tech Solutions Inc.,Income,5500.00,Completed"
    );
    assert_eq!(
        lines[2],
        "2024-07-27,Online Purchase - E-Shop,E-Shop.com,Shopping,-75.99,Completed"
    );
}

#[test]
fn test_export_statement_to_file() {
    let store = Store::sample().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statement.csv");

    let count = export_statement(&store, &checking(), StatementPeriod::Last30, &path).unwrap();
    assert_eq!(count, 5);

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(&rows[2][5], "Pending");
    assert_eq!(&rows[2][4], "-120.50");
}

#[test]
fn test_export_unknown_account_fails() {
    let store = Store::sample().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("none.csv");
    assert!(export_statement(&store, &AccountId::new("nope"), StatementPeriod::Last30, &path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_export_account_without_records() {
    let store = Store::sample().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inv.csv");
    let count =
        export_statement(&store, &AccountId::new("acc_inv_005"), StatementPeriod::Last90, &path).unwrap();
    assert_eq!(count, 0);
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 1);
}
