use rust_decimal::Decimal;

use super::AccountId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Income,
    Expense,
}

impl Direction {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "credit" => Some(Self::Income),
            "expense" | "out" | "debit" => Some(Self::Expense),
            _ => None,
        }
    }

    pub(crate) fn sign(&self) -> &'static str {
        match self {
            Self::Income => "+",
            Self::Expense => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TxnStatus {
    Completed,
    Pending,
    Failed,
}

impl TxnStatus {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "completed" | "complete" => Some(Self::Completed),
            "pending" => Some(Self::Pending),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Capitalized label for badges: "Completed", "Pending", "Failed".
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for TxnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TransactionRecord {
    pub(crate) id: String,
    pub(crate) account_id: AccountId,
    /// Format: "YYYY-MM-DD"
    pub(crate) date: String,
    pub(crate) description: String,
    pub(crate) counterparty: String,
    /// Always non-negative; the sign lives in `direction`.
    pub(crate) amount: Decimal,
    pub(crate) direction: Direction,
    pub(crate) category: String,
    pub(crate) status: TxnStatus,
}

impl TransactionRecord {
    pub(crate) fn is_income(&self) -> bool {
        self.direction == Direction::Income
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.direction == Direction::Expense
    }

    /// Amount with the direction applied: positive for income, negative for expenses.
    pub(crate) fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Income => self.amount,
            Direction::Expense => -self.amount,
        }
    }
}
