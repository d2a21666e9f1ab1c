//! Account DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_ledger::Account;

use super::{transactions::TransactionResponse, MoneyResponse};

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    /// ISO 4217 code; the ledger's default currency when omitted
    #[serde(default)]
    pub currency: Option<String>,
}

/// Listing entry: id, name, and balance
#[derive(Debug, Serialize)]
pub struct AccountSummaryResponse {
    pub id: Uuid,
    pub name: String,
    pub balance: MoneyResponse,
}

impl From<&Account> for AccountSummaryResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: (*account.id().as_uuid()),
            name: account.name().to_string(),
            balance: account.balance().into(),
        }
    }
}

/// Detail view: the aggregate with its transactions
#[derive(Debug, Serialize)]
pub struct AccountDetailsResponse {
    pub id: Uuid,
    pub name: String,
    pub currency: String,
    pub balance: MoneyResponse,
    pub is_active: bool,
    pub transactions: Vec<TransactionResponse>,
}

impl From<&Account> for AccountDetailsResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: (*account.id().as_uuid()),
            name: account.name().to_string(),
            currency: account.currency().code().to_string(),
            balance: account.balance().into(),
            is_active: account.is_active(),
            transactions: account
                .transactions()
                .iter()
                .map(TransactionResponse::from)
                .collect(),
        }
    }
}
