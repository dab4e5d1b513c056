#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::error::Error;

// ── TransactionRecord ─────────────────────────────────────────

fn make_txn(amount: Decimal, direction: Direction) -> TransactionRecord {
    TransactionRecord {
        id: "txn_test".into(),
        account_id: AccountId::new("acc_test"),
        date: "2024-07-15".into(),
        description: "Test".into(),
        counterparty: "Someone".into(),
        amount,
        direction,
        category: "Misc".into(),
        status: TxnStatus::Completed,
    }
}

#[test]
fn test_income() {
    let txn = make_txn(dec!(100.00), Direction::Income);
    assert!(txn.is_income());
    assert!(!txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(100.00));
}

#[test]
fn test_expense_is_signed_by_direction() {
    let txn = make_txn(dec!(50.00), Direction::Expense);
    assert!(txn.is_expense());
    assert_eq!(txn.amount, dec!(50.00));
    assert_eq!(txn.signed_amount(), dec!(-50.00));
}

#[test]
fn test_direction_sign() {
    assert_eq!(Direction::Income.sign(), "+");
    assert_eq!(Direction::Expense.sign(), "-");
}

#[test]
fn test_direction_parse() {
    assert_eq!(Direction::parse("income"), Some(Direction::Income));
    assert_eq!(Direction::parse("EXPENSE"), Some(Direction::Expense));
    assert_eq!(Direction::parse("refund"), None);
}

#[test]
fn test_status_parse_and_label() {
    assert_eq!(TxnStatus::parse("Pending"), Some(TxnStatus::Pending));
    assert_eq!(TxnStatus::parse("failed"), Some(TxnStatus::Failed));
    assert_eq!(TxnStatus::parse("settled"), None);
    assert_eq!(TxnStatus::Completed.label(), "Completed");
    assert_eq!(format!("{}", TxnStatus::Pending), "Pending");
}

// ── AccountType ───────────────────────────────────────────────

#[test]
fn test_account_type_parse() {
    assert_eq!(AccountType::parse("checking"), Some(AccountType::Checking));
    assert_eq!(AccountType::parse("SAVINGS"), Some(AccountType::Savings));
    assert_eq!(AccountType::parse("credit card"), Some(AccountType::CreditCard));
    assert_eq!(AccountType::parse("credit-card"), Some(AccountType::CreditCard));
    assert_eq!(AccountType::parse("investment"), Some(AccountType::Investment));
    assert_eq!(AccountType::parse("loan"), Some(AccountType::Loan));
    assert_eq!(AccountType::parse("cash"), None);
}

#[test]
fn test_account_type_roundtrip() {
    for t in AccountType::all() {
        let s = t.as_str();
        assert_eq!(AccountType::parse(s), Some(*t), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_account_type_is_credit() {
    assert!(AccountType::CreditCard.is_credit());
    assert!(AccountType::Loan.is_credit());
    assert!(!AccountType::Checking.is_credit());
    assert!(!AccountType::Investment.is_credit());
}

#[test]
fn test_account_new_defaults() {
    let account = Account::new("acc_1", "Test", AccountType::Checking, dec!(10));
    assert_eq!(account.id.as_str(), "acc_1");
    assert_eq!(account.currency, "USD");
    assert_eq!(account.trend, Trend::Neutral);
    assert!(account.account_number.is_empty());
}

#[test]
fn test_account_detail_line_includes_last_updated() {
    let mut account = Account::new("acc_1", "Test", AccountType::Checking, dec!(10));
    account.account_number = "**** **** **** 1234".into();
    assert_eq!(account.detail_line(), "**** **** **** 1234");
    account.last_updated = "Today 2:30 PM".into();
    assert_eq!(account.detail_line(), "**** **** **** 1234  (Today 2:30 PM)");
}

#[test]
fn test_account_find_by_name_is_case_insensitive() {
    let accounts = vec![
        Account::new("a", "Primary Checking", AccountType::Checking, dec!(1)),
        Account::new("b", "Auto Loan", AccountType::Loan, dec!(-1)),
    ];
    let found = Account::find_by_name(&accounts, "auto loan").unwrap();
    assert_eq!(found.id.as_str(), "b");
    assert!(Account::find_by_name(&accounts, "Savings").is_none());
    assert!(Account::find_by_id(&accounts, &AccountId::new("a")).is_some());
}

// ── Drafts ────────────────────────────────────────────────────

#[test]
fn test_payee_draft_requires_every_field() {
    assert!(PayeeDraft::new("Jane", "123", "Bank").validate().is_ok());
    assert_eq!(
        PayeeDraft::new("  ", "123", "Bank").validate(),
        Err(Error::MissingField { field: "Payee name" })
    );
    assert_eq!(
        PayeeDraft::new("Jane", "", "Bank").validate(),
        Err(Error::MissingField {
            field: "Account number"
        })
    );
    assert_eq!(
        PayeeDraft::new("Jane", "123", "").validate(),
        Err(Error::MissingField { field: "Bank name" })
    );
}

fn scheduled_draft() -> ScheduledDraft {
    ScheduledDraft {
        date: "2024-08-01".into(),
        kind: ScheduledKind::BillPayment,
        payee_name: "ConnectNet ISP".into(),
        amount: dec!(59.99),
        currency: "USD".into(),
        frequency: Frequency::Monthly,
        status: ScheduledStatus::Scheduled,
    }
}

#[test]
fn test_scheduled_draft_valid() {
    assert!(scheduled_draft().validate().is_ok());
}

#[test]
fn test_scheduled_draft_rejects_zero_amount() {
    let draft = ScheduledDraft {
        amount: Decimal::ZERO,
        ..scheduled_draft()
    };
    assert!(matches!(
        draft.validate(),
        Err(Error::InvalidField { field: "amount", .. })
    ));
}

#[test]
fn test_scheduled_draft_rejects_bad_currency() {
    let draft = ScheduledDraft {
        currency: "DOLLARS".into(),
        ..scheduled_draft()
    };
    assert!(matches!(
        draft.validate(),
        Err(Error::InvalidField {
            field: "currency",
            ..
        })
    ));
}

#[test]
fn test_frequency_and_kind_parse() {
    assert_eq!(Frequency::parse("monthly"), Some(Frequency::Monthly));
    assert_eq!(Frequency::parse("one-time"), Some(Frequency::Once));
    assert_eq!(Frequency::parse("daily"), None);
    assert_eq!(ScheduledKind::parse("bill"), Some(ScheduledKind::BillPayment));
    assert_eq!(ScheduledKind::parse("Transfer"), Some(ScheduledKind::Transfer));
}
