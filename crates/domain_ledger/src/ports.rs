//! Ledger repository ports
//!
//! The ledger domain reaches its data sources through these traits so
//! implementations stay swappable (database, in-memory for tests). Soft
//! deletion means every read path chooses explicitly whether it sees
//! inactive rows: `fetch` ignores the active filter, `list_active` applies
//! it.

use async_trait::async_trait;
use thiserror::Error;

use core_kernel::{AccountId, CategoryId};

use crate::account::Account;
use crate::category::Category;

/// Infrastructure failure inside a store
///
/// Distinct from domain errors: a broken backend is not a domain outcome.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Persistence port for the account aggregate
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persists a new account
    async fn insert(&self, account: Account) -> Result<(), StoreError>;

    /// Fetches an account with its transactions, regardless of the active flag
    async fn fetch(&self, id: AccountId) -> Result<Option<Account>, StoreError>;

    /// Lists active accounts only
    async fn list_active(&self) -> Result<Vec<Account>, StoreError>;

    /// Replaces the stored aggregate with the given state
    async fn update(&self, account: Account) -> Result<(), StoreError>;
}

/// Persistence port for categories
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Persists a new category
    async fn insert(&self, category: Category) -> Result<(), StoreError>;

    /// Fetches a category regardless of the active flag
    async fn fetch(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;
}
