//! Request/response data transfer objects

pub mod accounts;
pub mod categories;
pub mod transactions;
pub mod users;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use core_kernel::Money;

/// Success response body: the envelope with `success = true`
#[derive(Debug, Serialize)]
pub struct SuccessBody<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessBody<T> {
    /// Wraps response data in the envelope
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response for creations: the fresh identifier
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

/// A monetary amount as exposed on the wire
#[derive(Debug, Serialize)]
pub struct MoneyResponse {
    pub amount: Decimal,
    pub currency: String,
}

impl From<Money> for MoneyResponse {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency().code().to_string(),
        }
    }
}
