use rust_decimal::Decimal;

use crate::error::{require, Error, Result};
use crate::format::is_currency_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScheduledKind {
    Transfer,
    BillPayment,
}

impl ScheduledKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Transfer => "Transfer",
            Self::BillPayment => "Bill Payment",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "transfer" => Some(Self::Transfer),
            "bill payment" | "bill-payment" | "bill" | "billpay" => Some(Self::BillPayment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Frequency {
    Once,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Once => "One-time",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "once" | "one-time" | "onetime" => Some(Self::Once),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "yearly" | "annually" => Some(Self::Yearly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScheduledStatus {
    Scheduled,
    Processing,
    Completed,
    Failed,
}

impl ScheduledStatus {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScheduledTransaction {
    pub(crate) id: String,
    /// Free text; either an ISO date or a phrase like "Next 1st of month".
    pub(crate) date: String,
    pub(crate) kind: ScheduledKind,
    pub(crate) payee_name: String,
    pub(crate) amount: Decimal,
    pub(crate) currency: String,
    pub(crate) frequency: Frequency,
    pub(crate) status: ScheduledStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScheduledDraft {
    pub(crate) date: String,
    pub(crate) kind: ScheduledKind,
    pub(crate) payee_name: String,
    pub(crate) amount: Decimal,
    pub(crate) currency: String,
    pub(crate) frequency: Frequency,
    pub(crate) status: ScheduledStatus,
}

impl ScheduledDraft {
    pub(crate) fn validate(&self) -> Result<()> {
        require("Date", &self.date)?;
        require("Payee name", &self.payee_name)?;
        if self.amount <= Decimal::ZERO {
            return Err(Error::invalid("amount", "must be greater than zero"));
        }
        if !is_currency_code(&self.currency) {
            return Err(Error::invalid(
                "currency",
                format!("'{}' is not a three-letter code", self.currency),
            ));
        }
        Ok(())
    }
}

impl From<&ScheduledTransaction> for ScheduledDraft {
    fn from(st: &ScheduledTransaction) -> Self {
        Self {
            date: st.date.clone(),
            kind: st.kind,
            payee_name: st.payee_name.clone(),
            amount: st.amount,
            currency: st.currency.clone(),
            frequency: st.frequency,
            status: st.status,
        }
    }
}
