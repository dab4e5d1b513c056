mod account;
mod card;
mod notification;
mod payee;
mod profile;
mod scheduled;
mod transaction;

pub(crate) use account::{Account, AccountId, AccountType, Trend};
pub(crate) use card::{Card, CardControls, CardKind, CardStatus, CardTransaction};
pub(crate) use notification::{Notification, NotificationKind};
pub(crate) use payee::{Biller, Payee, PayeeDraft};
pub(crate) use profile::{NotificationPrefs, UserProfile};
pub(crate) use scheduled::{
    Frequency, ScheduledDraft, ScheduledKind, ScheduledStatus, ScheduledTransaction,
};
pub(crate) use transaction::{Direction, TransactionRecord, TxnStatus};

#[cfg(test)]
mod tests;
