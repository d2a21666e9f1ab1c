//! Ledger error factories
//!
//! Each factory produces a stable `(code, message)` pair. The codes are a
//! wire contract with API consumers and must never change.

use core_kernel::{AccountId, CategoryId, Error};

/// The requested account does not exist
pub fn account_not_found(id: AccountId) -> Error {
    Error::new(
        "ACCOUNT_NOT_FOUND",
        format!("Account with ID '{id}' was not found."),
    )
}

/// The referenced category does not exist
pub fn category_not_found(id: CategoryId) -> Error {
    Error::new(
        "CATEGORY_NOT_FOUND",
        format!("Category with ID '{id}' was not found."),
    )
}

/// The requested transaction currency differs from the account currency
pub fn transaction_currency_mismatch() -> Error {
    Error::new(
        "TRANSACTION_CURRENCY_MISMATCH",
        "The transaction currency must match the account currency.",
    )
}
