use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AccountType {
    Checking,
    Savings,
    CreditCard,
    Investment,
    Loan,
}

impl AccountType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "Checking",
            Self::Savings => "Savings",
            Self::CreditCard => "Credit Card",
            Self::Investment => "Investment",
            Self::Loan => "Loan",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "credit card" | "creditcard" | "credit-card" | "credit" => Some(Self::CreditCard),
            "investment" => Some(Self::Investment),
            "loan" => Some(Self::Loan),
            _ => None,
        }
    }

    pub(crate) fn all() -> &'static [AccountType] {
        &[
            Self::Checking,
            Self::Savings,
            Self::CreditCard,
            Self::Investment,
            Self::Loan,
        ]
    }

    /// Liability accounts: a negative balance is money owed.
    pub(crate) fn is_credit(&self) -> bool {
        matches!(self, Self::CreditCard | Self::Loan)
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub(crate) fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Neutral => "•",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct AccountId(pub(crate) String);

impl AccountId {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Account {
    pub(crate) id: AccountId,
    pub(crate) name: String,
    pub(crate) account_type: AccountType,
    /// Masked for display, e.g. `**** **** **** 1234`.
    pub(crate) account_number: String,
    pub(crate) balance: Decimal,
    pub(crate) currency: String,
    pub(crate) trend: Trend,
    pub(crate) last_updated: String,
}

impl Account {
    pub(crate) fn new(
        id: &str,
        name: &str,
        account_type: AccountType,
        balance: Decimal,
    ) -> Self {
        Self {
            id: AccountId::new(id),
            name: name.to_string(),
            account_type,
            account_number: String::new(),
            balance,
            currency: "USD".to_string(),
            trend: Trend::Neutral,
            last_updated: String::new(),
        }
    }

    /// Masked number followed by when the balance was last refreshed.
    pub(crate) fn detail_line(&self) -> String {
        if self.last_updated.is_empty() {
            self.account_number.clone()
        } else {
            format!("{}  ({})", self.account_number, self.last_updated)
        }
    }

    /// Find an account by name (case-insensitive) in a slice.
    pub(crate) fn find_by_name<'a>(accounts: &'a [Account], name: &str) -> Option<&'a Account> {
        let lower = name.trim().to_lowercase();
        accounts.iter().find(|a| a.name.to_lowercase() == lower)
    }

    pub(crate) fn find_by_id<'a>(accounts: &'a [Account], id: &AccountId) -> Option<&'a Account> {
        accounts.iter().find(|a| &a.id == id)
    }
}
