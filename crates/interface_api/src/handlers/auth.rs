//! Auth handlers
//!
//! Login is a thin pass-through: verify the password hash, hand back an
//! opaque token. No token registry or session state exists behind it.

use axum::{extract::State, Json};
use uuid::Uuid;

use domain_user::{error as user_error, Email};

use crate::dto::users::{LoginRequest, TokenResponse};
use crate::dto::SuccessBody;
use crate::error::ApiFailure;
use crate::password;
use crate::AppState;

/// Exchanges credentials for a session token
///
/// Every failure path - unparseable email, unknown email, wrong password -
/// answers with the same `INVALID_CREDENTIALS` error so callers cannot
/// probe which one it was.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SuccessBody<TokenResponse>>, ApiFailure> {
    let invalid = || ApiFailure::bad_request(user_error::invalid_credentials());

    let email = Email::parse(&request.email).map_err(|_| invalid())?;

    let user = state
        .users
        .fetch_by_email(&email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = password::verify_password(&request.password, user.password_hash())
        .map_err(|e| ApiFailure::internal(e.to_string()))?;
    if !password_valid {
        return Err(invalid());
    }

    tracing::info!(user_id = %user.id(), "user logged in");

    let token = Uuid::new_v4().to_string();
    Ok(Json(SuccessBody::new(TokenResponse { token })))
}
