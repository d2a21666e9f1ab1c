//! Account aggregate
//!
//! The account is the aggregate root of the ledger: it owns its transactions
//! and is the only component allowed to mutate the balance. The balance
//! invariant is `balance == zero(currency) + sum(signed effects)` over the
//! transaction list in insertion order.

use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, Currency, Lifecycle, Money};

use crate::transaction::Transaction;

/// A named account holding a running balance in a single currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    name: String,
    currency: Currency,
    balance: Money,
    transactions: Vec<Transaction>,
    lifecycle: Lifecycle,
}

impl Account {
    /// Creates an active account with a fresh id and a zero balance
    ///
    /// Name validation (non-empty, at most 200 characters) is the caller's
    /// responsibility. The currency is fixed for the account's lifetime.
    pub fn create(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            currency,
            balance: Money::zero(currency),
            transactions: Vec::new(),
            lifecycle: Lifecycle::start(),
        }
    }

    /// Returns the account identifier
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the account name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the account currency, fixed at creation
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the cached balance, always in the account currency
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Returns the owned transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the lifecycle state
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Returns true while the account has not been soft-deleted
    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Attaches a transaction and applies its signed effect to the balance
    ///
    /// This is the only way the balance changes. The mutation is total: the
    /// orchestration layer must have rejected a currency mismatch between
    /// the transaction and the account before calling this, so a mismatch
    /// here is a caller bug and panics inside the money arithmetic.
    pub fn add_transaction(&mut self, mut transaction: Transaction) {
        transaction.attach_to(self.id);
        self.balance = self.balance + transaction.signed_effect();
        self.transactions.push(transaction);
    }

    /// Soft-deletes the account
    ///
    /// Does not cascade to owned transactions and does not zero the balance;
    /// the history stays queryable by reads that ignore the active filter.
    pub fn delete(&mut self) {
        self.lifecycle.delete();
    }
}
