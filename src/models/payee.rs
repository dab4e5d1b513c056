use crate::error::{require, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Payee {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) account_number: String,
    pub(crate) bank_name: String,
}

/// Field values for creating or editing a payee; carries no id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PayeeDraft {
    pub(crate) name: String,
    pub(crate) account_number: String,
    pub(crate) bank_name: String,
}

impl PayeeDraft {
    pub(crate) fn new(name: &str, account_number: &str, bank_name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            account_number: account_number.trim().to_string(),
            bank_name: bank_name.trim().to_string(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require("Payee name", &self.name)?;
        require("Account number", &self.account_number)?;
        require("Bank name", &self.bank_name)?;
        Ok(())
    }
}

impl From<&Payee> for PayeeDraft {
    fn from(p: &Payee) -> Self {
        Self {
            name: p.name.clone(),
            account_number: p.account_number.clone(),
            bank_name: p.bank_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Biller {
    pub(crate) id: String,
    pub(crate) name: String,
}

impl Biller {
    pub(crate) fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}
