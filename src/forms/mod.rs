//! Transfer, bill-pay and settings forms. Submitting a form only validates it
//! and yields a typed request; no money moves and nothing is stored.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{require, Error, Result};
use crate::models::{AccountId, Biller, UserProfile};
use crate::store::Store;

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").ok()
});

pub(crate) const MIN_NAME_LEN: usize = 2;
pub(crate) const MIN_PASSWORD_LEN: usize = 8;

/// Parse a user-entered money amount: positive, at most two decimals.
/// A leading `$` and thousands separators are accepted.
pub(crate) fn parse_amount(field: &'static str, input: &str) -> Result<Decimal> {
    let cleaned = input.trim().trim_start_matches('$').replace(',', "");
    if cleaned.is_empty() {
        return Err(Error::MissingField { field });
    }
    let amount = Decimal::from_str(&cleaned)
        .map_err(|_| Error::invalid(field, format!("'{}' is not a number", input.trim())))?;
    if amount <= Decimal::ZERO {
        return Err(Error::invalid(field, "must be greater than zero"));
    }
    if amount.normalize().scale() > 2 {
        return Err(Error::invalid(field, "at most two decimal places"));
    }
    Ok(amount)
}

// ── Transfers ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TransferType {
    /// Between two of the user's own accounts.
    Own,
    #[default]
    Domestic,
    International,
}

impl TransferType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Domestic => "domestic",
            Self::International => "international",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "own" => Some(Self::Own),
            "domestic" => Some(Self::Domestic),
            "international" | "intl" => Some(Self::International),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TransferForm {
    /// Account id or name.
    pub(crate) from_account: String,
    /// Account id or name for own transfers, otherwise an external account number.
    pub(crate) to_account: String,
    pub(crate) amount: String,
    pub(crate) transfer_type: TransferType,
    pub(crate) description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransferRequest {
    pub(crate) from: AccountId,
    pub(crate) to: String,
    pub(crate) amount: Decimal,
    pub(crate) transfer_type: TransferType,
    pub(crate) description: Option<String>,
}

impl TransferForm {
    pub(crate) fn submit(&self, store: &Store) -> Result<TransferRequest> {
        require("From account", &self.from_account)?;
        require("To account", &self.to_account)?;
        let from = store.find_account(&self.from_account)?;
        let amount = parse_amount("Amount", &self.amount)?;

        let to = match self.transfer_type {
            TransferType::Own => {
                let to = store.find_account(&self.to_account)?;
                if to.id == from.id {
                    return Err(Error::invalid("To account", "cannot transfer to the same account"));
                }
                to.id.to_string()
            }
            TransferType::Domestic | TransferType::International => self.to_account.trim().to_string(),
        };

        if !from.account_type.is_credit() && amount > from.balance {
            return Err(Error::invalid("Amount", "exceeds the available balance"));
        }

        let description = self.description.trim();
        Ok(TransferRequest {
            from: from.id.clone(),
            to,
            amount,
            transfer_type: self.transfer_type,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

// ── Bill pay ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub(crate) struct BillPayForm {
    pub(crate) biller_id: String,
    pub(crate) bill_account_number: String,
    pub(crate) amount: String,
    pub(crate) payment_account: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BillPayment {
    pub(crate) biller: Biller,
    pub(crate) bill_account_number: String,
    pub(crate) amount: Decimal,
    pub(crate) from: AccountId,
}

impl BillPayForm {
    pub(crate) fn submit(&self, store: &Store) -> Result<BillPayment> {
        require("Biller", &self.biller_id)?;
        let biller = store
            .biller(self.biller_id.trim())
            .ok_or_else(|| Error::not_found("Biller", self.biller_id.trim()))?;
        require("Bill account number", &self.bill_account_number)?;
        let amount = parse_amount("Amount", &self.amount)?;
        require("Payment account", &self.payment_account)?;
        let from = store.find_account(&self.payment_account)?;
        Ok(BillPayment {
            biller: biller.clone(),
            bill_account_number: self.bill_account_number.trim().to_string(),
            amount,
            from: from.id.clone(),
        })
    }
}

// ── Settings ──────────────────────────────────────────────────

pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email.trim()))
}

/// Full name of at least two characters and a well-formed email. The
/// remaining contact fields are optional.
pub(crate) fn validate_profile(profile: &UserProfile) -> Result<()> {
    if profile.full_name.trim().chars().count() < MIN_NAME_LEN {
        return Err(Error::invalid(
            "Full name",
            format!("must be at least {MIN_NAME_LEN} characters"),
        ));
    }
    if !is_valid_email(&profile.email) {
        return Err(Error::invalid("Email", "please enter a valid email address"));
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PasswordChange {
    pub(crate) current: String,
    pub(crate) new: String,
    pub(crate) confirm: String,
}

impl PasswordChange {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.current.is_empty() {
            return Err(Error::MissingField {
                field: "Current password",
            });
        }
        if self.new.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::invalid(
                "New password",
                format!("must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        }
        if self.new != self.confirm {
            return Err(Error::invalid("Confirm password", "new passwords don't match"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
