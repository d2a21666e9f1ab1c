//! In-memory category store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::CategoryId;
use domain_ledger::{Category, CategoryStore, StoreError};

/// Category store backed by a hash map
#[derive(Debug, Default)]
pub struct MemoryCategoryStore {
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl MemoryCategoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn insert(&self, category: Category) -> Result<(), StoreError> {
        self.categories
            .write()
            .await
            .insert(category.id(), category);
        Ok(())
    }

    async fn fetch(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.categories.read().await.get(&id).cloned())
    }
}
