//! Bundled sample data the dashboard runs against.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::*;

fn cents(c: i64) -> Decimal {
    Decimal::new(c, 2)
}

fn account(
    id: &str,
    name: &str,
    account_type: AccountType,
    last4: &str,
    balance: Decimal,
    trend: Trend,
    last_updated: &str,
) -> Account {
    Account {
        account_number: format!("**** **** **** {last4}"),
        trend,
        last_updated: last_updated.to_string(),
        ..Account::new(id, name, account_type, balance)
    }
}

pub(super) fn accounts() -> Vec<Account> {
    vec![
        account("acc_chk_001", "Primary Checking", AccountType::Checking, "1234", cents(1_253_075), Trend::Up, "Today 2:30 PM"),
        account("acc_sav_002", "High-Yield Savings", AccountType::Savings, "5678", cents(8_500_000), Trend::Neutral, "Today 1:00 PM"),
        account("acc_cc_003", "Platinum Rewards Card", AccountType::CreditCard, "9012", cents(-124_550), Trend::Down, "Yesterday 8:00 AM"),
        account("acc_loan_004", "Auto Loan", AccountType::Loan, "3456", cents(-1_520_000), Trend::Neutral, "Today 9:00 AM"),
        account("acc_inv_005", "Growth Portfolio", AccountType::Investment, "7890", cents(2_375_000), Trend::Up, "Today 3:00 PM"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn txn(
    id: &str,
    account: &str,
    date: &str,
    description: &str,
    counterparty: &str,
    amount: Decimal,
    direction: Direction,
    category: &str,
    status: TxnStatus,
) -> TransactionRecord {
    TransactionRecord {
        id: id.to_string(),
        account_id: AccountId::new(account),
        date: date.to_string(),
        description: description.to_string(),
        counterparty: counterparty.to_string(),
        amount,
        direction,
        category: category.to_string(),
        status,
    }
}

pub(super) fn records() -> Vec<TransactionRecord> {
    use Direction::{Expense, Income};
    use TxnStatus::{Completed, Pending};

    vec![
        txn("txn_001", "acc_chk_001", "2024-07-28", "Salary Deposit", "Tech Solutions Inc.", cents(550_000), Income, "Income", Completed),
        txn("txn_002", "acc_chk_001", "2024-07-27", "Online Purchase - E-Shop", "E-Shop.com", cents(7_599), Expense, "Shopping", Completed),
        txn("txn_003", "acc_chk_001", "2024-07-26", "Utility Bill - City Power", "City Power Co.", cents(12_050), Expense, "Utilities", Pending),
        txn("txn_006", "acc_chk_001", "2024-07-25", "Restaurant - Dinner", "The Food Place", cents(6_500), Expense, "Food & Dining", Completed),
        txn("txn_007", "acc_chk_001", "2024-07-24", "ATM Withdrawal", "Downtown ATM", cents(10_000), Expense, "Cash", Completed),
        txn("txn_004", "acc_sav_002", "2024-07-25", "Interest Earned", "FinDash Bank", cents(3_512), Income, "Interest", Completed),
        txn("txn_008", "acc_sav_002", "2024-07-20", "Transfer from Checking", "Primary Checking", cents(100_000), Income, "Transfers", Completed),
        txn("txn_005", "acc_cc_003", "2024-07-28", "Restaurant - The Grand Diner", "The Grand Diner", cents(8_500), Expense, "Food & Dining", Completed),
        txn("txn_009", "acc_cc_003", "2024-07-27", "Subscription - Music Stream", "TuneFlow", cents(999), Expense, "Entertainment", Completed),
        txn("txn_010", "acc_cc_003", "2024-07-26", "Payment Received - Thank You", "Online Payment", cents(50_000), Income, "Payments", Completed),
        txn("txn_011", "acc_loan_004", "2024-07-15", "Monthly Loan Payment", "Auto Loan Servicing", cents(35_000), Expense, "Loan Repayment", Completed),
    ]
}

pub(super) fn billers() -> Vec<Biller> {
    vec![
        Biller::new("biller1", "City Electric & Gas"),
        Biller::new("biller2", "AquaFlow Water Services"),
        Biller::new("biller3", "ConnectNet ISP"),
        Biller::new("biller4", "County Property Tax"),
    ]
}

pub(super) fn payees() -> Vec<Payee> {
    vec![
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
    ]
}

pub(super) fn scheduled() -> Vec<ScheduledTransaction> {
    let st = |id: &str, date: &str, kind, payee: &str, amount, status| ScheduledTransaction {
        id: id.to_string(),
        date: date.to_string(),
        kind,
        payee_name: payee.to_string(),
        amount,
        currency: "USD".to_string(),
        frequency: Frequency::Monthly,
        status,
    };
    vec![
        st("st1", "Next 1st of month", ScheduledKind::BillPayment, "City Electric & Gas", cents(7_550), ScheduledStatus::Scheduled),
        st("st2", "Next 5th of month", ScheduledKind::Transfer, "High-Yield Savings (*** 5678)", cents(50_000), ScheduledStatus::Scheduled),
        st("st3", "2024-07-15", ScheduledKind::BillPayment, "ConnectNet ISP", cents(5_999), ScheduledStatus::Completed),
    ]
}

pub(super) fn cards() -> Vec<Card> {
    let card = |id: &str, name: &str, number: &str, expiry: &str, kind, status| Card {
        id: id.to_string(),
        name: name.to_string(),
        last4: number[number.len().saturating_sub(4)..].to_string(),
        expiry: expiry.to_string(),
        kind,
        status,
        full_number: number.to_string(),
        controls: CardControls::default(),
    };
    vec![
        card("card1", "Primary Debit Card", "4111222233331234", "12/25", CardKind::VisaDebit, CardStatus::Active),
        card("card2", "Platinum Rewards", "5222333344445678", "11/26", CardKind::MastercardCredit, CardStatus::Active),
        card("card3", "Business Amex", "3777888899999012", "08/24", CardKind::AmexCredit, CardStatus::Locked),
    ]
}

pub(super) fn card_transactions() -> HashMap<String, Vec<CardTransaction>> {
    let tx = |id: &str, date: &str, description: &str, amount: Decimal| CardTransaction {
        id: id.to_string(),
        date: date.to_string(),
        description: description.to_string(),
        amount,
        currency: "USD".to_string(),
    };
    HashMap::from([
        (
            "card1".to_string(),
            vec![
                tx("tx1", "2024-07-30", "Spotify Subscription", cents(-999)),
                tx("tx2", "2024-07-29", "Grocery Store", cents(-7_520)),
                tx("tx3", "2024-07-28", "ATM Withdrawal", cents(-10_000)),
            ],
        ),
        (
            "card2".to_string(),
            vec![
                tx("tx4", "2024-07-28", "Restaurant Le Gourmet", cents(-15_050)),
                tx("tx5", "2024-07-27", "Flight Tickets", cents(-45_000)),
            ],
        ),
        ("card3".to_string(), Vec::new()),
    ])
}

pub(super) fn notifications() -> Vec<Notification> {
    let n = |id: &str, kind, title: &str, description: &str, timestamp: &str, is_read| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        timestamp: timestamp.to_string(),
        is_read,
    };
    vec![
        n("n1", NotificationKind::Transaction, "Salary received", "Tech Solutions Inc. deposited $5,500.00", "5m ago", false),
        n("n2", NotificationKind::Warning, "Bill pending", "City Power Co. payment is still pending", "1h ago", false),
        n("n3", NotificationKind::Security, "New sign-in", "New sign-in from a Linux device", "July 26, 2024", true),
    ]
}

pub(super) fn profile() -> UserProfile {
    UserProfile {
        full_name: "Aditya Sharma".into(),
        email: "aditya.sharma@example.com".into(),
        phone: "555-123-4567".into(),
        street_address: "123 Finance St".into(),
        city: "Metropolis".into(),
        postal_code: "12345".into(),
        country: "USA".into(),
    }
}
