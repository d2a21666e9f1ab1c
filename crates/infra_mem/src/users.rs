//! In-memory user store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::UserId;
use domain_user::{Email, User, UserStore, UserStoreError};

/// User store backed by a hash map
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: User) -> Result<(), UserStoreError> {
        self.users.write().await.insert(user.id(), user);
        Ok(())
    }

    async fn fetch_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn email_taken(&self, email: &Email) -> Result<bool, UserStoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|user| user.email() == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_by_email_finds_the_user() {
        let store = MemoryUserStore::new();
        let email = Email::parse("user@example.com").unwrap();
        store
            .insert(User::create(email.clone(), "hash"))
            .await
            .unwrap();

        assert!(store.fetch_by_email(&email).await.unwrap().is_some());
        assert!(store.email_taken(&email).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_email_is_absent() {
        let store = MemoryUserStore::new();
        let email = Email::parse("nobody@example.com").unwrap();

        assert!(store.fetch_by_email(&email).await.unwrap().is_none());
        assert!(!store.email_taken(&email).await.unwrap());
    }
}
