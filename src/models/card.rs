use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardKind {
    VisaDebit,
    MastercardCredit,
    AmexCredit,
    Other,
}

impl CardKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::VisaDebit => "Visa Debit",
            Self::MastercardCredit => "Mastercard Credit",
            Self::AmexCredit => "Amex Credit",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardStatus {
    Active,
    Locked,
    Expired,
    LostStolen,
}

impl CardStatus {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Locked => "Locked",
            Self::Expired => "Expired",
            Self::LostStolen => "Lost/Stolen",
        }
    }
}

impl std::fmt::Display for CardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CardControls {
    pub(crate) daily_limit: Decimal,
    pub(crate) online: bool,
    pub(crate) international: bool,
    pub(crate) contactless: bool,
    /// Destination(s) of upcoming travel, free text.
    pub(crate) travel_notice: String,
}

impl Default for CardControls {
    fn default() -> Self {
        Self {
            daily_limit: Decimal::from(5000),
            online: true,
            international: false,
            contactless: true,
            travel_notice: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Card {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) last4: String,
    /// Format: "MM/YY"
    pub(crate) expiry: String,
    pub(crate) kind: CardKind,
    pub(crate) status: CardStatus,
    pub(crate) full_number: String,
    pub(crate) controls: CardControls,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CardTransaction {
    pub(crate) id: String,
    pub(crate) date: String,
    pub(crate) description: String,
    /// Signed: card spend is negative.
    pub(crate) amount: Decimal,
    pub(crate) currency: String,
}
