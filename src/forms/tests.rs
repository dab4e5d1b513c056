#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn store() -> Store {
    Store::sample().unwrap()
}

fn transfer(from: &str, to: &str, amount: &str, transfer_type: TransferType) -> TransferForm {
    TransferForm {
        from_account: from.into(),
        to_account: to.into(),
        amount: amount.into(),
        transfer_type,
        description: String::new(),
    }
}

// ── Amounts ───────────────────────────────────────────────────

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("Amount", "250").unwrap(), dec!(250));
    assert_eq!(parse_amount("Amount", " $1,234.50 ").unwrap(), dec!(1234.50));
    assert_eq!(parse_amount("Amount", "10.500").unwrap(), dec!(10.5));
}

#[test]
fn test_parse_amount_rejects() {
    assert_eq!(
        parse_amount("Amount", "  ").unwrap_err(),
        Error::MissingField { field: "Amount" }
    );
    assert!(parse_amount("Amount", "abc").is_err());
    assert!(parse_amount("Amount", "0").is_err());
    assert!(parse_amount("Amount", "-5").is_err());
    assert!(parse_amount("Amount", "1.005").is_err());
}

// ── Transfers ─────────────────────────────────────────────────

#[test]
fn test_own_transfer() {
    let store = store();
    let req = transfer("Primary Checking", "acc_sav_002", "500", TransferType::Own)
        .submit(&store)
        .unwrap();
    assert_eq!(req.from, AccountId::new("acc_chk_001"));
    assert_eq!(req.to, "acc_sav_002");
    assert_eq!(req.amount, dec!(500));
    assert!(req.description.is_none());
}

#[test]
fn test_own_transfer_same_account_rejected() {
    let store = store();
    let err = transfer("acc_chk_001", "primary checking", "5", TransferType::Own)
        .submit(&store)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidField { field: "To account", .. }));
}

#[test]
fn test_domestic_transfer_keeps_external_account() {
    let store = store();
    let mut form = transfer("acc_chk_001", " 9876543210 ", "100.25", TransferType::Domestic);
    form.description = "  rent  ".into();
    let req = form.submit(&store).unwrap();
    assert_eq!(req.to, "9876543210");
    assert_eq!(req.description.as_deref(), Some("rent"));
}

#[test]
fn test_transfer_over_balance_rejected() {
    let store = store();
    let err = transfer("acc_chk_001", "123", "12530.76", TransferType::Domestic)
        .submit(&store)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidField { field: "Amount", .. }));
    // Exactly the balance is fine.
    assert!(transfer("acc_chk_001", "123", "12530.75", TransferType::Domestic)
        .submit(&store)
        .is_ok());
}

#[test]
fn test_credit_account_not_limited_by_balance() {
    let store = store();
    assert!(transfer("acc_cc_003", "123", "300", TransferType::Domestic)
        .submit(&store)
        .is_ok());
}

#[test]
fn test_transfer_missing_fields() {
    let store = store();
    assert_eq!(
        transfer("", "x", "1", TransferType::Domestic).submit(&store).unwrap_err(),
        Error::MissingField { field: "From account" }
    );
    assert_eq!(
        transfer("acc_chk_001", " ", "1", TransferType::Domestic).submit(&store).unwrap_err(),
        Error::MissingField { field: "To account" }
    );
    assert!(matches!(
        transfer("Nowhere", "x", "1", TransferType::Domestic).submit(&store),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn test_transfer_type_parse() {
    assert_eq!(TransferType::parse("OWN"), Some(TransferType::Own));
    assert_eq!(TransferType::parse("intl"), Some(TransferType::International));
    assert_eq!(TransferType::parse("wire"), None);
    assert_eq!(TransferType::default().as_str(), "domestic");
}

// ── Bill pay ──────────────────────────────────────────────────

#[test]
fn test_bill_pay() {
    let store = store();
    let form = BillPayForm {
        biller_id: "biller3".into(),
        bill_account_number: "ISP-0042".into(),
        amount: "59.99".into(),
        payment_account: "acc_chk_001".into(),
    };
    let payment = form.submit(&store).unwrap();
    assert_eq!(payment.biller.name, "ConnectNet ISP");
    assert_eq!(payment.amount, dec!(59.99));
    assert_eq!(payment.from.as_str(), "acc_chk_001");
}

#[test]
fn test_bill_pay_unknown_biller() {
    let store = store();
    let form = BillPayForm {
        biller_id: "biller9".into(),
        bill_account_number: "1".into(),
        amount: "10".into(),
        payment_account: "acc_chk_001".into(),
    };
    assert!(matches!(form.submit(&store), Err(Error::NotFound { kind: "Biller", .. })));
}

#[test]
fn test_bill_pay_requires_account_number() {
    let store = store();
    let form = BillPayForm {
        biller_id: "biller1".into(),
        amount: "10".into(),
        payment_account: "acc_chk_001".into(),
        ..BillPayForm::default()
    };
    assert_eq!(
        form.submit(&store).unwrap_err(),
        Error::MissingField { field: "Bill account number" }
    );
}

// ── Settings ──────────────────────────────────────────────────

#[test]
fn test_email_validation() {
    assert!(is_valid_email("aditya.sharma@example.com"));
    assert!(is_valid_email("a+b@mail.co.uk"));
    assert!(!is_valid_email("no-at-sign.com"));
    assert!(!is_valid_email("user@host"));
    assert!(!is_valid_email("user@@example.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_validate_profile() {
    let store = store();
    assert!(validate_profile(&store.profile).is_ok());

    let short = UserProfile {
        full_name: " A ".into(),
        ..store.profile.clone()
    };
    assert!(matches!(
        validate_profile(&short),
        Err(Error::InvalidField { field: "Full name", .. })
    ));

    let bad_email = UserProfile {
        email: "nope".into(),
        ..store.profile.clone()
    };
    assert!(matches!(
        validate_profile(&bad_email),
        Err(Error::InvalidField { field: "Email", .. })
    ));
}

#[test]
fn test_password_change() {
    let ok = PasswordChange {
        current: "old".into(),
        new: "s3cure-pass".into(),
        confirm: "s3cure-pass".into(),
    };
    assert!(ok.validate().is_ok());

    let missing = PasswordChange {
        current: String::new(),
        ..ok.clone()
    };
    assert_eq!(
        missing.validate().unwrap_err(),
        Error::MissingField { field: "Current password" }
    );

    let short = PasswordChange {
        new: "short".into(),
        confirm: "short".into(),
        ..ok.clone()
    };
    assert!(matches!(
        short.validate(),
        Err(Error::InvalidField { field: "New password", .. })
    ));

    let mismatch = PasswordChange {
        confirm: "different".into(),
        ..ok
    };
    assert!(matches!(
        mismatch.validate(),
        Err(Error::InvalidField { field: "Confirm password", .. })
    ));
}
