//! User handlers

use axum::{extract::State, http::StatusCode, Json};

use core_kernel::Error;
use domain_user::{error as user_error, Email, User};

use crate::dto::users::CreateUserRequest;
use crate::dto::{CreatedResponse, SuccessBody};
use crate::error::ApiFailure;
use crate::password;
use crate::AppState;

/// Registers a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<SuccessBody<CreatedResponse>>), ApiFailure> {
    if let Some(error) = validate(&request) {
        return Err(ApiFailure::bad_request(error));
    }

    let email = Email::parse(&request.email).map_err(ApiFailure::bad_request)?;

    if state.users.email_taken(&email).await? {
        return Err(ApiFailure::bad_request(user_error::email_already_exists()));
    }

    let password_hash = password::hash_password(&request.password)
        .map_err(|e| ApiFailure::internal(e.to_string()))?;

    let user = User::create(email, password_hash);
    let id = user.id();
    state.users.insert(user).await?;

    tracing::info!(user_id = %id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(SuccessBody::new(CreatedResponse { id: *id.as_uuid() })),
    ))
}

fn validate(request: &CreateUserRequest) -> Option<Error> {
    if request.email.trim().is_empty() {
        return Some(Error::validation("The field Email must be informed."));
    }
    if request.password.trim().is_empty() {
        return Some(Error::validation("The field Password must be informed."));
    }
    if !password_is_strong(&request.password) {
        return Some(Error::validation(
            "Password must be strong (8 to 64 chars, upper, lower, number, special).",
        ));
    }
    None
}

fn password_is_strong(password: &str) -> bool {
    let len = password.chars().count();
    if !(8..=64).contains(&len) {
        return false;
    }
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password
            .chars()
            .any(|c| c.is_ascii_graphic() && !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength_rules() {
        assert!(password_is_strong("Str0ng-pass"));
        assert!(!password_is_strong("short1!"));
        assert!(!password_is_strong("no-digits-Here!"));
        assert!(!password_is_strong("no_upper_1!"));
        assert!(!password_is_strong("NO_LOWER_1!"));
        assert!(!password_is_strong("NoSpecials123"));
    }
}
