//! Category entity

use serde::{Deserialize, Serialize};

use core_kernel::{CategoryId, Lifecycle};

/// A named tag referenced by transactions
///
/// Referential integrity (the category must exist) is enforced by the
/// orchestration layer before a transaction is created, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    lifecycle: Lifecycle,
}

impl Category {
    /// Creates a category with a fresh id
    ///
    /// Name validation (non-empty, at most 200 characters) is the caller's
    /// responsibility.
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            lifecycle: Lifecycle::start(),
        }
    }

    /// Returns the category identifier
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lifecycle state
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Soft-deletes the category
    pub fn delete(&mut self) {
        self.lifecycle.delete();
    }
}
