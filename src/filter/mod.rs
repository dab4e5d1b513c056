//! Transaction view pipeline: scope a record set to an account, then keep
//! the records matching every active predicate.
//!
//! The filter state is a plain value owned by the caller (the TUI `App` or
//! the CLI argument parser); both stages are pure and order preserving.

use crate::models::{AccountId, Direction, TransactionRecord, TxnStatus};

/// Which records a view starts from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Scope {
    /// No account selected: nothing to show.
    #[default]
    None,
    Account(AccountId),
    /// Unscoped views such as the dashboard and the CLI listing.
    All,
}

/// Narrow `records` to the given scope.
pub(crate) fn scope<'a>(records: &'a [TransactionRecord], scope: &Scope) -> Vec<&'a TransactionRecord> {
    match scope {
        Scope::None => Vec::new(),
        Scope::Account(id) => records.iter().filter(|r| &r.account_id == id).collect(),
        Scope::All => records.iter().collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Some(Self::All),
            other => Direction::parse(other).map(Self::from),
        }
    }

    pub(crate) fn admits(&self, direction: Direction) -> bool {
        match self {
            Self::All => true,
            Self::Income => direction == Direction::Income,
            Self::Expense => direction == Direction::Expense,
        }
    }

    /// Next selector value, wrapping; drives the TUI toggle key.
    pub(crate) fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Income,
            Self::Income => Self::Expense,
            Self::Expense => Self::All,
        }
    }
}

impl From<Direction> for TypeFilter {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Income => Self::Income,
            Direction::Expense => Self::Expense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
    Failed,
}

impl StatusFilter {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Some(Self::All),
            other => TxnStatus::parse(other).map(Self::from),
        }
    }

    pub(crate) fn admits(&self, status: TxnStatus) -> bool {
        match self {
            Self::All => true,
            Self::Completed => status == TxnStatus::Completed,
            Self::Pending => status == TxnStatus::Pending,
            Self::Failed => status == TxnStatus::Failed,
        }
    }

    pub(crate) fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Completed => Self::Pending,
            Self::Pending => Self::Failed,
            Self::Failed => Self::All,
        }
    }
}

impl From<TxnStatus> for StatusFilter {
    fn from(s: TxnStatus) -> Self {
        match s {
            TxnStatus::Completed => Self::Completed,
            TxnStatus::Pending => Self::Pending,
            TxnStatus::Failed => Self::Failed,
        }
    }
}

/// The three independent criteria of a transaction view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TransactionFilter {
    pub(crate) query: String,
    pub(crate) kind: TypeFilter,
    pub(crate) status: StatusFilter,
}

impl TransactionFilter {
    pub(crate) fn new(query: &str, kind: TypeFilter, status: StatusFilter) -> Self {
        Self {
            query: query.to_string(),
            kind,
            status,
        }
    }

    /// Case-insensitive substring match on description or counterparty.
    pub(crate) fn matches_text(&self, record: &TransactionRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record.description.to_lowercase().contains(&needle)
            || record.counterparty.to_lowercase().contains(&needle)
    }

    pub(crate) fn matches(&self, record: &TransactionRecord) -> bool {
        self.matches_text(record)
            && self.kind.admits(record.direction)
            && self.status.admits(record.status)
    }

    /// Keep the records that satisfy all three criteria, in input order.
    pub(crate) fn apply<'a, I>(&self, records: I) -> Vec<&'a TransactionRecord>
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }

    pub(crate) fn is_active(&self) -> bool {
        !self.query.is_empty() || self.kind != TypeFilter::All || self.status != StatusFilter::All
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Short human summary, e.g. `search: 'rent' | type: expense`.
    pub(crate) fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.query.is_empty() {
            parts.push(format!("search: '{}'", self.query));
        }
        if self.kind != TypeFilter::All {
            parts.push(format!("type: {}", self.kind.as_str()));
        }
        if self.status != StatusFilter::All {
            parts.push(format!("status: {}", self.status.as_str()));
        }
        parts.join(" | ")
    }
}

/// Full pipeline: scope, then filter.
pub(crate) fn transaction_view<'a>(
    records: &'a [TransactionRecord],
    view_scope: &Scope,
    filter: &TransactionFilter,
) -> Vec<&'a TransactionRecord> {
    filter.apply(scope(records, view_scope))
}
