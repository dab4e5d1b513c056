#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::filter::{StatusFilter, TypeFilter};

fn record(id: &str, account: &str) -> TransactionRecord {
    TransactionRecord {
        id: id.into(),
        account_id: AccountId::new(account),
        date: "2024-07-01".into(),
        description: "Coffee".into(),
        counterparty: "Cafe".into(),
        amount: dec!(4.50),
        direction: Direction::Expense,
        category: "Food & Dining".into(),
        status: TxnStatus::Completed,
    }
}

fn checking() -> Account {
    Account::new("acc1", "Checking", AccountType::Checking, dec!(100))
}

// ── Loading ───────────────────────────────────────────────────

#[test]
fn test_sample_loads() {
    let store = Store::sample().unwrap();
    assert_eq!(store.accounts().len(), 5);
    assert_eq!(store.records().len(), 11);
    assert_eq!(store.payees.len(), 2);
    assert_eq!(store.scheduled.len(), 3);
    assert_eq!(store.billers().len(), 4);
    assert_eq!(store.cards.cards().len(), 3);
    assert_eq!(store.notifications.unread_count(), 2);
    assert_eq!(store.profile.full_name, "Aditya Sharma");
}

#[test]
fn test_unknown_account_rejected() {
    let err = Store::new(vec![checking()], vec![record("t1", "acc9")])
        .err()
        .unwrap();
    assert_eq!(
        err,
        Error::UnknownAccount {
            record: "t1".into(),
            account: "acc9".into()
        }
    );
}

#[test]
fn test_duplicate_record_id_rejected() {
    let err = Store::new(vec![checking()], vec![record("t1", "acc1"), record("t1", "acc1")])
        .err()
        .unwrap();
    assert!(matches!(err, Error::DuplicateId { kind: "Transaction", .. }));
}

#[test]
fn test_duplicate_account_id_rejected() {
    let err = Store::new(vec![checking(), checking()], Vec::new()).err().unwrap();
    assert!(matches!(err, Error::DuplicateId { kind: "Account", .. }));
}

#[test]
fn test_negative_magnitude_rejected() {
    let mut bad = record("t1", "acc1");
    bad.amount = dec!(-1);
    assert!(Store::new(vec![checking()], vec![bad]).is_err());
}

// ── Lookups ───────────────────────────────────────────────────

#[test]
fn test_find_account_by_id_or_name() {
    let store = Store::sample().unwrap();
    assert_eq!(store.find_account("acc_sav_002").unwrap().name, "High-Yield Savings");
    assert_eq!(
        store.find_account("  primary checking ").unwrap().id.as_str(),
        "acc_chk_001"
    );
    assert!(matches!(
        store.find_account("Offshore"),
        Err(Error::NotFound { kind: "Account", .. })
    ));
}

#[test]
fn test_account_records_scoped() {
    let store = Store::sample().unwrap();
    let cc = AccountId::new("acc_cc_003");
    let recs = store.account_records(&cc);
    assert_eq!(recs.len(), 3);
    assert!(recs.iter().all(|r| r.account_id == cc));
    assert!(store.account_records(&AccountId::new("acc_inv_005")).is_empty());
}

#[test]
fn test_view_combines_scope_and_filter() {
    let store = Store::sample().unwrap();
    let scope = Scope::Account(AccountId::new("acc_chk_001"));
    let filter = TransactionFilter::new("", TypeFilter::Expense, StatusFilter::Pending);
    let view = store.view(&scope, &filter);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "txn_003");
}

#[test]
fn test_currency_of_falls_back_to_usd() {
    let store = Store::sample().unwrap();
    assert_eq!(store.currency_of(&AccountId::new("acc_chk_001")), "USD");
    assert_eq!(store.currency_of(&AccountId::new("nope")), "USD");
}
