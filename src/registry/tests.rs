#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::{Frequency, ScheduledKind, ScheduledStatus};

fn payees() -> Registry<Payee> {
    Registry::with_items(vec![
        Payee {
            id: "payee1".into(),
            name: "John Doe (Contractor)".into(),
            account_number: "1234567890".into(),
            bank_name: "Global National Bank".into(),
        },
        Payee {
            id: "payee2".into(),
            name: "Landlord Property Mgmt".into(),
            account_number: "0987654321".into(),
            bank_name: "Community First CU".into(),
        },
    ])
    .unwrap()
}

fn names(reg: &Registry<Payee>) -> Vec<&str> {
    reg.items().iter().map(|p| p.name.as_str()).collect()
}

// ── add ───────────────────────────────────────────────────────

#[test]
fn test_add_valid_payee() {
    let mut reg = payees();
    let before = reg.len();
    let id = reg
        .add(PayeeDraft::new("Jane Smith", "5555", "Credit Union"))
        .unwrap()
        .id
        .clone();
    assert_eq!(reg.len(), before + 1);
    assert_eq!(id, "payee3");
    let fetched = reg.get(&id).unwrap();
    assert_eq!(fetched.name, "Jane Smith");
    assert_eq!(reg.items().last().unwrap().id, id);
}

#[test]
fn test_add_blank_name_rejected() {
    let mut reg = payees();
    let err = reg.add(PayeeDraft::new("   ", "5555", "Bank")).unwrap_err();
    assert_eq!(err, Error::MissingField { field: "Payee name" });
    assert_eq!(reg.len(), 2);
}

#[test]
fn test_add_missing_bank_rejected() {
    let mut reg = payees();
    assert!(reg.add(PayeeDraft::new("Jane", "5555", "")).is_err());
    assert_eq!(reg.len(), 2);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let mut reg = payees();
    let third = reg.add(PayeeDraft::new("A", "1", "B")).unwrap().id.clone();
    reg.delete(&third, |_| true).unwrap();
    let fourth = reg.add(PayeeDraft::new("C", "2", "D")).unwrap().id.clone();
    assert_ne!(third, fourth);

    // Deleting an early entry must not make the next id collide either.
    reg.delete("payee1", |_| true).unwrap();
    let next = reg.add(PayeeDraft::new("E", "3", "F")).unwrap().id.clone();
    assert!(reg.items().iter().filter(|p| p.id == next).count() == 1);
}

#[test]
fn test_seeded_ids_are_skipped() {
    let mut reg = Registry::with_items(vec![Payee {
        id: "payee2".into(),
        name: "Seed".into(),
        account_number: "1".into(),
        bank_name: "B".into(),
    }])
    .unwrap();
    // len + 1 == 2 is taken, so the counter moves past it.
    let id = reg.add(PayeeDraft::new("New", "9", "B")).unwrap().id.clone();
    assert_eq!(id, "payee3");
}

#[test]
fn test_with_items_rejects_duplicates() {
    let dup = Payee {
        id: "payee1".into(),
        name: "X".into(),
        account_number: "1".into(),
        bank_name: "B".into(),
    };
    let err = Registry::with_items(vec![dup.clone(), dup]).unwrap_err();
    assert!(matches!(err, Error::DuplicateId { .. }));
}

// ── edit ──────────────────────────────────────────────────────

#[test]
fn test_edit_replaces_fields_in_place() {
    let mut reg = payees();
    reg.edit("payee1", PayeeDraft::new("John Doe", "111", "New Bank"))
        .unwrap();
    let p = reg.get("payee1").unwrap();
    assert_eq!(p.name, "John Doe");
    assert_eq!(p.bank_name, "New Bank");
    assert_eq!(names(&reg), vec!["John Doe", "Landlord Property Mgmt"]);
}

#[test]
fn test_edit_missing_id_is_not_found() {
    let mut reg = payees();
    let err = reg
        .edit("payee99", PayeeDraft::new("X", "1", "B"))
        .unwrap_err();
    assert_eq!(
        err,
        Error::NotFound {
            kind: "Payee",
            id: "payee99".into()
        }
    );
}

#[test]
fn test_edit_invalid_draft_leaves_entity_untouched() {
    let mut reg = payees();
    assert!(reg.edit("payee1", PayeeDraft::new("", "1", "B")).is_err());
    assert_eq!(reg.get("payee1").unwrap().name, "John Doe (Contractor)");
}

// ── delete ────────────────────────────────────────────────────

#[test]
fn test_delete_declined_leaves_registry_unchanged() {
    let mut reg = payees();
    let removed = reg.delete("payee1", |_| false).unwrap();
    assert!(removed.is_none());
    assert_eq!(reg.len(), 2);
    assert_eq!(names(&reg), vec!["John Doe (Contractor)", "Landlord Property Mgmt"]);
}

#[test]
fn test_delete_confirmed_removes_only_target() {
    let mut reg = payees();
    reg.add(PayeeDraft::new("Third", "3", "B")).unwrap();
    let removed = reg.delete("payee2", |_| true).unwrap().unwrap();
    assert_eq!(removed.name, "Landlord Property Mgmt");
    assert!(reg.get("payee2").is_none());
    assert_eq!(names(&reg), vec!["John Doe (Contractor)", "Third"]);
}

#[test]
fn test_delete_confirm_sees_target() {
    let mut reg = payees();
    let mut seen = String::new();
    reg.delete("payee2", |p| {
        seen = p.name.clone();
        false
    })
    .unwrap();
    assert_eq!(seen, "Landlord Property Mgmt");
}

#[test]
fn test_delete_missing_id_is_not_found() {
    let mut reg = payees();
    let mut asked = false;
    let err = reg
        .delete("nope", |_| {
            asked = true;
            true
        })
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(!asked);
}

// ── scheduled transactions ────────────────────────────────────

#[test]
fn test_scheduled_registry_roundtrip() {
    let mut reg: Registry<ScheduledTransaction> = Registry::default();
    assert!(reg.is_empty());
    let draft = ScheduledDraft {
        date: "Next 5th of month".into(),
        kind: ScheduledKind::Transfer,
        payee_name: "High-Yield Savings".into(),
        amount: dec!(500),
        currency: "usd".into(),
        frequency: Frequency::Monthly,
        status: ScheduledStatus::Scheduled,
    };
    let st = reg.add(draft.clone()).unwrap();
    assert_eq!(st.id, "st1");
    assert_eq!(st.currency, "USD");

    let edited = ScheduledDraft {
        amount: dec!(750),
        ..draft
    };
    reg.edit("st1", edited).unwrap();
    assert_eq!(reg.get("st1").unwrap().amount, dec!(750));

    reg.delete("st1", |_| true).unwrap();
    assert!(reg.is_empty());
}
