//! In-memory, insertion-ordered CRUD collections for user-managed entities
//! (payees, scheduled transactions). Nothing here outlives the process.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Payee, PayeeDraft, ScheduledDraft, ScheduledTransaction};

/// An entity the registry can hold. Field values travel as a `Draft`,
/// which is validated before any mutation happens.
pub(crate) trait Entity {
    type Draft;

    /// Human name of the entity kind, used in errors and acknowledgements.
    const KIND: &'static str;
    /// Generated ids are `<prefix><n>`.
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
    fn label(&self) -> &str;
    fn validate(draft: &Self::Draft) -> Result<()>;
    fn from_draft(id: String, draft: Self::Draft) -> Self;
    fn apply(&mut self, draft: Self::Draft);
}

impl Entity for Payee {
    type Draft = PayeeDraft;

    const KIND: &'static str = "Payee";
    const ID_PREFIX: &'static str = "payee";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn validate(draft: &PayeeDraft) -> Result<()> {
        draft.validate()
    }

    fn from_draft(id: String, draft: PayeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            account_number: draft.account_number,
            bank_name: draft.bank_name,
        }
    }

    fn apply(&mut self, draft: PayeeDraft) {
        self.name = draft.name;
        self.account_number = draft.account_number;
        self.bank_name = draft.bank_name;
    }
}

impl Entity for ScheduledTransaction {
    type Draft = ScheduledDraft;

    const KIND: &'static str = "Scheduled transaction";
    const ID_PREFIX: &'static str = "st";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.payee_name
    }

    fn validate(draft: &ScheduledDraft) -> Result<()> {
        draft.validate()
    }

    fn from_draft(id: String, draft: ScheduledDraft) -> Self {
        Self {
            id,
            date: draft.date,
            kind: draft.kind,
            payee_name: draft.payee_name,
            amount: draft.amount,
            currency: draft.currency.to_ascii_uppercase(),
            frequency: draft.frequency,
            status: draft.status,
        }
    }

    fn apply(&mut self, draft: ScheduledDraft) {
        self.date = draft.date;
        self.kind = draft.kind;
        self.payee_name = draft.payee_name;
        self.amount = draft.amount;
        self.currency = draft.currency.to_ascii_uppercase();
        self.frequency = draft.frequency;
        self.status = draft.status;
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Registry<T> {
    items: Vec<T>,
    next_seq: u64,
}

impl<T: Entity> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_seq: 1,
        }
    }
}

impl<T: Entity> Registry<T> {
    /// Seed the registry with existing entities. Ids must be unique.
    pub(crate) fn with_items(items: Vec<T>) -> Result<Self> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.id() == item.id()) {
                return Err(Error::DuplicateId {
                    kind: T::KIND,
                    id: item.id().to_string(),
                });
            }
        }
        let next_seq = items.len() as u64 + 1;
        Ok(Self { items, next_seq })
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))
    }

    /// Next unused `<prefix><n>` id. The counter only moves forward, so ids of
    /// deleted entities are never handed out again.
    fn next_id(&mut self) -> String {
        loop {
            let candidate = format!("{}{}", T::ID_PREFIX, self.next_seq);
            self.next_seq += 1;
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }

    /// Validate and append a new entity; returns it with its assigned id.
    pub(crate) fn add(&mut self, draft: T::Draft) -> Result<&T> {
        T::validate(&draft)?;
        let id = self.next_id();
        let entity = T::from_draft(id, draft);
        info!(kind = T::KIND, id = entity.id(), "added {}", entity.label());
        let idx = self.items.len();
        self.items.push(entity);
        Ok(&self.items[idx])
    }

    /// Validate and replace the fields of the entity with the given id.
    pub(crate) fn edit(&mut self, id: &str, draft: T::Draft) -> Result<&T> {
        let idx = self.position(id)?;
        T::validate(&draft)?;
        let entity = &mut self.items[idx];
        entity.apply(draft);
        info!(kind = T::KIND, id, "updated {}", entity.label());
        Ok(&self.items[idx])
    }

    /// Remove the entity with the given id once `confirm` approves it.
    /// Returns `Ok(None)` when the confirmation is declined.
    pub(crate) fn delete<F>(&mut self, id: &str, confirm: F) -> Result<Option<T>>
    where
        F: FnOnce(&T) -> bool,
    {
        let idx = self.position(id)?;
        if !confirm(&self.items[idx]) {
            debug!(kind = T::KIND, id, "delete declined");
            return Ok(None);
        }
        let removed = self.items.remove(idx);
        info!(kind = T::KIND, id, "deleted {}", removed.label());
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests;
