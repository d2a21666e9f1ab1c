//! API error handling
//!
//! Recoverable domain failures become HTTP responses carrying the stable
//! `(code, message)` pair in the response envelope. Store failures are
//! internal errors; contract violations in the domain stay panics and are
//! never mapped here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use core_kernel::Error;
use domain_ledger::StoreError;
use domain_user::UserStoreError;

/// Failure response body: the envelope with `success = false`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: Error,
}

/// A failed request: a domain error plus the HTTP status it maps to
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    error: Error,
}

impl ApiFailure {
    /// A 400 carrying a validation or domain-rule error
    pub fn bad_request(error: Error) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// A 404 carrying a not-found error
    pub fn not_found(error: Error) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error,
        }
    }

    /// A 500 for infrastructure trouble; the message is not a stable code
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: Error::new("INTERNAL_ERROR", message),
        }
    }

    /// Returns the domain error
    pub fn error(&self) -> &Error {
        &self.error
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                code = self.error.code(),
                detail = self.error.message(),
                "request failed"
            );
        } else {
            tracing::debug!(code = self.error.code(), "request rejected");
        }

        let body = ErrorBody {
            success: false,
            error: self.error,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiFailure {
    fn from(err: StoreError) -> Self {
        ApiFailure::internal(err.to_string())
    }
}

impl From<UserStoreError> for ApiFailure {
    fn from(err: UserStoreError) -> Self {
        ApiFailure::internal(err.to_string())
    }
}
