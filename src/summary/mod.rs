//! Dashboard figures derived from accounts and record views.
//! Failed records are left out of every total.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Account, TransactionRecord, TxnStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Totals {
    pub(crate) income: Decimal,
    /// Magnitude of outgoing money, never negative.
    pub(crate) expenses: Decimal,
    pub(crate) income_count: usize,
    pub(crate) expense_count: usize,
}

impl Totals {
    pub(crate) fn net(&self) -> Decimal {
        self.income - self.expenses
    }
}

fn counts(record: &TransactionRecord) -> bool {
    record.status != TxnStatus::Failed
}

/// Sum of all balances; liabilities carry negative balances.
pub(crate) fn net_worth(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}

pub(crate) fn totals<'a, I>(records: I) -> Totals
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut t = Totals::default();
    for r in records.into_iter().filter(|r| counts(r)) {
        if r.is_income() {
            t.income += r.amount;
            t.income_count += 1;
        } else {
            t.expenses += r.amount;
            t.expense_count += 1;
        }
    }
    t
}

/// Expense totals per category, largest first, ties by name.
pub(crate) fn spending_by_category<'a, I>(records: I) -> Vec<(String, Decimal)>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut by_cat: HashMap<&str, Decimal> = HashMap::new();
    for r in records.into_iter().filter(|r| r.is_expense() && counts(r)) {
        *by_cat.entry(r.category.as_str()).or_default() += r.amount;
    }
    let mut out: Vec<(String, Decimal)> = by_cat
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// The `n` most recent records by date. Records sharing a date keep their
/// stored order.
pub(crate) fn recent<'a>(records: &[&'a TransactionRecord], n: usize) -> Vec<&'a TransactionRecord> {
    let mut sorted = records.to_vec();
    // ISO dates sort lexically.
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests;
