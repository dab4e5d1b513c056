mod fixtures;

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::info;

use crate::cards::CardDeck;
use crate::error::{Error, Result};
use crate::filter::{self, Scope, TransactionFilter};
use crate::models::*;
use crate::notifications::NotificationCenter;
use crate::registry::Registry;

/// Everything the dashboard shows, held in memory for the life of the process.
pub(crate) struct Store {
    accounts: Vec<Account>,
    records: Vec<TransactionRecord>,
    billers: Vec<Biller>,
    pub(crate) payees: Registry<Payee>,
    pub(crate) scheduled: Registry<ScheduledTransaction>,
    pub(crate) cards: CardDeck,
    pub(crate) notifications: NotificationCenter,
    pub(crate) profile: UserProfile,
    pub(crate) prefs: NotificationPrefs,
}

impl Store {
    /// Build a store over the given accounts and records. Account and record
    /// ids must be unique and every record must point at a known account.
    pub(crate) fn new(accounts: Vec<Account>, records: Vec<TransactionRecord>) -> Result<Self> {
        check_integrity(&accounts, &records)?;
        Ok(Self {
            accounts,
            records,
            billers: Vec::new(),
            payees: Registry::default(),
            scheduled: Registry::default(),
            cards: CardDeck::new(Vec::new(), Default::default()),
            notifications: NotificationCenter::default(),
            profile: UserProfile::default(),
            prefs: NotificationPrefs::default(),
        })
    }

    /// The bundled sample data set.
    pub(crate) fn sample() -> Result<Self> {
        let mut store = Self::new(fixtures::accounts(), fixtures::records())?;
        store.billers = fixtures::billers();
        store.payees = Registry::with_items(fixtures::payees())?;
        store.scheduled = Registry::with_items(fixtures::scheduled())?;
        store.cards = CardDeck::new(fixtures::cards(), fixtures::card_transactions());
        store.notifications = NotificationCenter::new(fixtures::notifications());
        store.profile = fixtures::profile();
        info!(
            accounts = store.accounts.len(),
            records = store.records.len(),
            "sample data loaded"
        );
        Ok(store)
    }

    pub(crate) fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub(crate) fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub(crate) fn billers(&self) -> &[Biller] {
        &self.billers
    }

    pub(crate) fn account(&self, id: &AccountId) -> Result<&Account> {
        Account::find_by_id(&self.accounts, id).ok_or_else(|| Error::not_found("Account", id.as_str()))
    }

    /// Resolve an account from user input: an exact id first, then a
    /// case-insensitive name.
    pub(crate) fn find_account(&self, key: &str) -> Result<&Account> {
        let key = key.trim();
        Account::find_by_id(&self.accounts, &AccountId::new(key))
            .or_else(|| Account::find_by_name(&self.accounts, key))
            .ok_or_else(|| Error::not_found("Account", key))
    }

    pub(crate) fn biller(&self, id: &str) -> Option<&Biller> {
        self.billers.iter().find(|b| b.id == id)
    }

    /// Records of one account, as stored.
    pub(crate) fn account_records(&self, id: &AccountId) -> Vec<&TransactionRecord> {
        filter::scope(&self.records, &Scope::Account(id.clone()))
    }

    pub(crate) fn view(&self, scope: &Scope, filter: &TransactionFilter) -> Vec<&TransactionRecord> {
        filter::transaction_view(&self.records, scope, filter)
    }

    /// Currency of the account a record belongs to, USD when unknown.
    pub(crate) fn currency_of(&self, id: &AccountId) -> &str {
        Account::find_by_id(&self.accounts, id).map_or("USD", |a| a.currency.as_str())
    }
}

fn check_integrity(accounts: &[Account], records: &[TransactionRecord]) -> Result<()> {
    let mut account_ids = HashSet::new();
    for account in accounts {
        if !account_ids.insert(&account.id) {
            return Err(Error::DuplicateId {
                kind: "Account",
                id: account.id.to_string(),
            });
        }
    }

    let mut record_ids = HashSet::new();
    for record in records {
        if !record_ids.insert(record.id.as_str()) {
            return Err(Error::DuplicateId {
                kind: "Transaction",
                id: record.id.clone(),
            });
        }
        if !account_ids.contains(&record.account_id) {
            return Err(Error::UnknownAccount {
                record: record.id.clone(),
                account: record.account_id.to_string(),
            });
        }
        if record.amount < Decimal::ZERO {
            return Err(Error::invalid(
                "amount",
                format!("transaction '{}' has a negative magnitude", record.id),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
