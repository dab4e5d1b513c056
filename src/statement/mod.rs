//! Account statements as CSV.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use rust_decimal::RoundingStrategy;
use tracing::info;

use crate::error::Error;
use crate::models::{AccountId, TransactionRecord};
use crate::store::Store;

const HEADER: [&str; 6] = ["Date", "Description", "Payee/Payer", "Category", "Amount", "Status"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatementPeriod {
    Last30,
    Last90,
    Custom { from: NaiveDate, to: NaiveDate },
}

impl StatementPeriod {
    /// `last30`, `last90`, or an inclusive `YYYY-MM-DD..YYYY-MM-DD` range.
    pub(crate) fn parse(s: &str) -> crate::error::Result<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "last30" | "30" => return Ok(Self::Last30),
            "last90" | "90" => return Ok(Self::Last90),
            _ => {}
        }
        let (from, to) = s
            .split_once("..")
            .ok_or_else(|| Error::invalid("period", format!("'{s}' (use last30, last90 or FROM..TO)")))?;
        let parse = |d: &str| {
            NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                .map_err(|_| Error::invalid("period", format!("'{}' is not a YYYY-MM-DD date", d.trim())))
        };
        let (from, to) = (parse(from)?, parse(to)?);
        if from > to {
            return Err(Error::invalid("period", "start date is after end date"));
        }
        Ok(Self::Custom { from, to })
    }

    pub(crate) fn label(&self) -> String {
        match self {
            Self::Last30 => "last30".into(),
            Self::Last90 => "last90".into(),
            Self::Custom { from, to } => format!("{from}..{to}"),
        }
    }

    /// Inclusive date bounds, relative periods counted back from `reference`.
    pub(crate) fn bounds(&self, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
        match *self {
            Self::Last30 => (reference - Duration::days(30), reference),
            Self::Last90 => (reference - Duration::days(90), reference),
            Self::Custom { from, to } => (from, to),
        }
    }
}

fn record_date(record: &TransactionRecord) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").ok()
}

/// The latest record date, or today when no record carries a usable date.
pub(crate) fn reference_date(records: &[&TransactionRecord]) -> NaiveDate {
    records
        .iter()
        .filter_map(|r| record_date(r))
        .max()
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Records dated inside the period, in their stored order. Records whose
/// date cannot be read are left out.
pub(crate) fn in_period<'a>(
    records: &[&'a TransactionRecord],
    period: StatementPeriod,
    reference: NaiveDate,
) -> Vec<&'a TransactionRecord> {
    let (from, to) = period.bounds(reference);
    records
        .iter()
        .copied()
        .filter(|r| record_date(r).is_some_and(|d| d >= from && d <= to))
        .collect()
}

/// Write the rows as CSV and return how many were written.
pub(crate) fn write_statement<W: Write>(writer: W, records: &[&TransactionRecord]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER).context("Failed to write CSV header")?;
    for r in records {
        let amount = r
            .signed_amount()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let amount = format!("{amount:.2}");
        wtr.write_record([
            r.date.as_str(),
            r.description.as_str(),
            r.counterparty.as_str(),
            r.category.as_str(),
            amount.as_str(),
            r.status.label(),
        ])
        .with_context(|| format!("Failed to write transaction {}", r.id))?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(records.len())
}

/// Export one account's statement for `period` to `path`.
pub(crate) fn export_statement(
    store: &Store,
    account: &AccountId,
    period: StatementPeriod,
    path: &Path,
) -> Result<usize> {
    store.account(account)?;
    let records = store.account_records(account);
    let reference = reference_date(&records);
    let rows = in_period(&records, period, reference);

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let count = write_statement(file, &rows)?;
    info!(
        account = account.as_str(),
        period = %period.label(),
        rows = count,
        path = %path.display(),
        "statement exported"
    );
    Ok(count)
}

/// `~/findash-statement-<account>-<period>.csv`
pub(crate) fn default_path(account: &AccountId, period: StatementPeriod) -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    let period = period.label().replace("..", "_");
    format!("{home}/findash-statement-{account}-{period}.csv")
}

#[cfg(test)]
mod tests;
