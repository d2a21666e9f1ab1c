//! User and auth DTOs

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Opaque session token handed out on login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
