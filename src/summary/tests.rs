#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::filter::{Scope, TransactionFilter};
use crate::store::Store;

#[test]
fn test_net_worth() {
    let store = Store::sample().unwrap();
    assert_eq!(net_worth(store.accounts()), dec!(104835.25));
    assert_eq!(net_worth(&[]), Decimal::ZERO);
}

#[test]
fn test_totals_over_all_records() {
    let store = Store::sample().unwrap();
    let t = totals(store.records());
    assert_eq!(t.income, dec!(7035.12));
    assert_eq!(t.expenses, dec!(806.48));
    assert_eq!(t.income_count, 4);
    assert_eq!(t.expense_count, 7);
    assert_eq!(t.net(), dec!(6228.64));
}

#[test]
fn test_totals_skip_failed() {
    let store = Store::sample().unwrap();
    let mut failed = store.records()[1].clone();
    failed.status = TxnStatus::Failed;
    let t = totals([&failed]);
    assert_eq!(t, Totals::default());
}

#[test]
fn test_totals_over_filtered_view() {
    let store = Store::sample().unwrap();
    let view = store.view(&Scope::All, &TransactionFilter::new("restaurant", Default::default(), Default::default()));
    let t = totals(view);
    assert_eq!(t.expenses, dec!(150));
    assert_eq!(t.income, Decimal::ZERO);
}

#[test]
fn test_spending_by_category_order() {
    let store = Store::sample().unwrap();
    let spending = spending_by_category(store.records());
    let names: Vec<&str> = spending.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Loan Repayment",
            "Food & Dining",
            "Utilities",
            "Cash",
            "Shopping",
            "Entertainment"
        ]
    );
    assert_eq!(spending[1].1, dec!(150));
}

#[test]
fn test_spending_ties_sorted_by_name() {
    let store = Store::sample().unwrap();
    let mut a = store.records()[1].clone();
    a.category = "Zoo".into();
    a.amount = dec!(10);
    let mut b = a.clone();
    b.id = "other".into();
    b.category = "Art".into();
    let spending = spending_by_category([&a, &b]);
    assert_eq!(spending[0].0, "Art");
    assert_eq!(spending[1].0, "Zoo");
}

#[test]
fn test_recent_is_newest_first_and_stable() {
    let store = Store::sample().unwrap();
    let all: Vec<&TransactionRecord> = store.records().iter().collect();
    let ids: Vec<&str> = recent(&all, 3).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["txn_001", "txn_005", "txn_002"]);
    assert_eq!(recent(&all, 50).len(), 11);
    assert!(recent(&all, 0).is_empty());
}
