//! Transaction entity
//!
//! A transaction is a plain record of a single monetary movement. It is
//! immutable after creation apart from the inherited soft-delete fields;
//! all validation happens before construction, at the orchestration
//! boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, CategoryId, Lifecycle, Money, TransactionId};

/// The direction of a monetary movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Adds to the account balance
    Income,
    /// Subtracts from the account balance
    Expense,
}

/// A single monetary movement recorded against an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    account_id: Option<AccountId>,
    category_id: CategoryId,
    description: String,
    amount: Money,
    kind: TransactionKind,
    date: DateTime<Utc>,
    lifecycle: Lifecycle,
}

impl Transaction {
    /// Creates a transaction with a fresh id
    ///
    /// The caller is responsible for validation: non-empty description of at
    /// most 200 characters, a strictly positive amount, and a category id
    /// known to exist. The date may be past or future.
    pub fn create(
        category_id: CategoryId,
        description: impl Into<String>,
        amount: Money,
        kind: TransactionKind,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            account_id: None,
            category_id,
            description: description.into(),
            amount,
            kind,
            date,
            lifecycle: Lifecycle::start(),
        }
    }

    /// Returns the transaction identifier
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Returns the owning account, set when an account attaches this
    /// transaction. A back-reference only, not ownership.
    pub fn account_id(&self) -> Option<AccountId> {
        self.account_id
    }

    /// Returns the category this transaction is tagged with
    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Returns the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the amount (always strictly positive)
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the movement direction
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Returns the caller-supplied transaction date
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Returns the lifecycle state
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// The signed effect this transaction has on an account balance
    pub fn signed_effect(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => self.amount.negate(),
        }
    }

    /// Soft-deletes the transaction
    pub fn delete(&mut self) {
        self.lifecycle.delete();
    }

    pub(crate) fn attach_to(&mut self, account_id: AccountId) {
        self.account_id = Some(account_id);
    }
}
