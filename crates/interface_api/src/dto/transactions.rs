//! Transaction DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_ledger::{Transaction, TransactionKind};

use super::MoneyResponse;

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub description: String,
    pub amount: Decimal,
    /// ISO 4217 code; must match the account currency
    pub currency: String,
    pub category_id: Uuid,
    /// "income" or "expense"
    #[serde(rename = "type")]
    pub kind: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub description: String,
    pub category_id: Uuid,
    pub amount: MoneyResponse,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: DateTime<Utc>,
}

impl From<&Transaction> for TransactionResponse {
    fn from(transaction: &Transaction) -> Self {
        let kind = match transaction.kind() {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        Self {
            id: (*transaction.id().as_uuid()),
            description: transaction.description().to_string(),
            category_id: (*transaction.category_id().as_uuid()),
            amount: transaction.amount().into(),
            kind: kind.to_string(),
            date: transaction.date(),
        }
    }
}
