//! User repository port

use async_trait::async_trait;
use thiserror::Error;

use crate::email::Email;
use crate::user::User;

/// Infrastructure failure inside the user store
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Persistence port for users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user
    async fn insert(&self, user: User) -> Result<(), UserStoreError>;

    /// Fetches a user by normalized email
    async fn fetch_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;

    /// Returns true if a user with this email already exists
    async fn email_taken(&self, email: &Email) -> Result<bool, UserStoreError>;
}
