//! Transaction handlers
//!
//! This is where the deliberate split between recoverable rejection and the
//! total aggregate mutation lives: every check - validation, account and
//! category existence, the currency comparison - happens before
//! `add_transaction`, so the aggregate itself never fails.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use core_kernel::{AccountId, CategoryId, Error, Money};
use domain_ledger::{error as ledger_error, Transaction, TransactionKind};

use crate::dto::transactions::CreateTransactionRequest;
use crate::dto::{CreatedResponse, SuccessBody};
use crate::error::ApiFailure;
use crate::AppState;

use super::parse_currency;

/// Records a transaction against an account
pub async fn create_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<SuccessBody<CreatedResponse>>), ApiFailure> {
    if let Some(error) = validate(&request) {
        return Err(ApiFailure::bad_request(error));
    }
    let currency = parse_currency(&request.currency).map_err(ApiFailure::bad_request)?;
    let kind = parse_kind(&request.kind).map_err(ApiFailure::bad_request)?;

    let account_id = AccountId::from_uuid(id);
    let mut account = state
        .accounts
        .fetch(account_id)
        .await?
        .ok_or_else(|| ApiFailure::not_found(ledger_error::account_not_found(account_id)))?;

    let category_id = CategoryId::from_uuid(request.category_id);
    if state.categories.fetch(category_id).await?.is_none() {
        return Err(ApiFailure::not_found(ledger_error::category_not_found(
            category_id,
        )));
    }

    // The one recoverable currency check: reject before the aggregate is
    // touched, leaving balance and history unchanged.
    if account.currency() != currency {
        return Err(ApiFailure::bad_request(
            ledger_error::transaction_currency_mismatch(),
        ));
    }

    let transaction = Transaction::create(
        category_id,
        request.description,
        Money::new(request.amount, currency),
        kind,
        request.date,
    );
    let transaction_id = transaction.id();

    account.add_transaction(transaction);
    state.accounts.update(account).await?;

    tracing::info!(
        account_id = %account_id,
        transaction_id = %transaction_id,
        "transaction recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(SuccessBody::new(CreatedResponse {
            id: *transaction_id.as_uuid(),
        })),
    ))
}

fn validate(request: &CreateTransactionRequest) -> Option<Error> {
    if request.description.trim().is_empty() {
        return Some(Error::validation("The field Description must be informed."));
    }
    if request.description.chars().count() > 200 {
        return Some(Error::validation(
            "The field Description must be a string with a maximum length of '200'.",
        ));
    }
    if request.amount <= Decimal::ZERO {
        return Some(Error::validation(
            "The field Amount must be greater than zero.",
        ));
    }
    None
}

fn parse_kind(kind: &str) -> Result<TransactionKind, Error> {
    match kind.to_ascii_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        _ => Err(Error::validation(
            "The field Type must be a valid transaction type.",
        )),
    }
}
