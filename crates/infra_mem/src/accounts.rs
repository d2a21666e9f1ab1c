//! In-memory account store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::AccountId;
use domain_ledger::{Account, AccountStore, StoreError};

/// Account store backed by a hash map
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl MemoryAccountStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        self.accounts.write().await.insert(account.id(), account);
        Ok(())
    }

    async fn fetch(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Account>, StoreError> {
        let mut accounts: Vec<Account> = self
            .accounts
            .read()
            .await
            .values()
            .filter(|account| account.is_active())
            .cloned()
            .collect();
        // Deterministic listing order for callers and tests.
        accounts.sort_by_key(|account| account.lifecycle().created_at());
        Ok(accounts)
    }

    async fn update(&self, account: Account) -> Result<(), StoreError> {
        self.accounts.write().await.insert(account.id(), account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    #[tokio::test]
    async fn fetch_ignores_the_active_filter() {
        let store = MemoryAccountStore::new();
        let mut account = Account::create("Old", Currency::BRL);
        let id = account.id();
        account.delete();
        store.insert(account).await.unwrap();

        let fetched = store.fetch(id).await.unwrap().unwrap();

        assert!(!fetched.is_active());
    }

    #[tokio::test]
    async fn list_active_excludes_deleted_accounts() {
        let store = MemoryAccountStore::new();
        let keep = Account::create("Keep", Currency::BRL);
        let mut drop = Account::create("Drop", Currency::BRL);
        drop.delete();
        store.insert(keep.clone()).await.unwrap();
        store.insert(drop).await.unwrap();

        let active = store.list_active().await.unwrap();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), keep.id());
    }

    #[tokio::test]
    async fn update_replaces_the_stored_aggregate() {
        let store = MemoryAccountStore::new();
        let account = Account::create("Checking", Currency::BRL);
        let id = account.id();
        store.insert(account).await.unwrap();

        let mut loaded = store.fetch(id).await.unwrap().unwrap();
        loaded.delete();
        store.update(loaded).await.unwrap();

        assert!(!store.fetch(id).await.unwrap().unwrap().is_active());
    }
}
