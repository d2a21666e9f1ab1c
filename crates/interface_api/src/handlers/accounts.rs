//! Account handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use core_kernel::{AccountId, Error};
use domain_ledger::{error as ledger_error, Account};

use crate::dto::accounts::{AccountDetailsResponse, AccountSummaryResponse, CreateAccountRequest};
use crate::dto::{CreatedResponse, SuccessBody};
use crate::error::ApiFailure;
use crate::AppState;

use super::{parse_currency, DEFAULT_CURRENCY};

/// Creates a new account with a zero balance
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<SuccessBody<CreatedResponse>>), ApiFailure> {
    if let Some(error) = validate(&request) {
        return Err(ApiFailure::bad_request(error));
    }

    let currency = match &request.currency {
        Some(code) => parse_currency(code).map_err(ApiFailure::bad_request)?,
        None => DEFAULT_CURRENCY,
    };

    let account = Account::create(request.name, currency);
    let id = account.id();
    state.accounts.insert(account).await?;

    tracing::info!(account_id = %id, %currency, "account created");

    Ok((
        StatusCode::CREATED,
        Json(SuccessBody::new(CreatedResponse { id: *id.as_uuid() })),
    ))
}

/// Lists active accounts
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<SuccessBody<Vec<AccountSummaryResponse>>>, ApiFailure> {
    let accounts = state.accounts.list_active().await?;

    let items = accounts.iter().map(AccountSummaryResponse::from).collect();
    Ok(Json(SuccessBody::new(items)))
}

/// Gets an account by id, with its transactions, regardless of the active flag
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessBody<AccountDetailsResponse>>, ApiFailure> {
    let account_id = AccountId::from_uuid(id);

    let account = state
        .accounts
        .fetch(account_id)
        .await?
        .ok_or_else(|| ApiFailure::not_found(ledger_error::account_not_found(account_id)))?;

    Ok(Json(SuccessBody::new(AccountDetailsResponse::from(
        &account,
    ))))
}

/// Soft-deletes an account; its history stays retrievable by id
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiFailure> {
    let account_id = AccountId::from_uuid(id);

    let mut account = state
        .accounts
        .fetch(account_id)
        .await?
        .ok_or_else(|| ApiFailure::not_found(ledger_error::account_not_found(account_id)))?;

    account.delete();
    state.accounts.update(account).await?;

    tracing::info!(account_id = %account_id, "account deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn validate(request: &CreateAccountRequest) -> Option<Error> {
    if request.name.trim().is_empty() {
        return Some(Error::validation("The field Name must be informed."));
    }
    if request.name.chars().count() > 200 {
        return Some(Error::validation(
            "The field Name must be a string with a maximum length of '200'.",
        ));
    }
    None
}
