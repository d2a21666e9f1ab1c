//! Test data builders

use chrono::{DateTime, Utc};

use core_kernel::{CategoryId, Currency, Money};
use domain_ledger::{Account, Transaction, TransactionKind};

use crate::fixtures::MoneyFixtures;

/// Builder for test transactions
pub struct TestTransactionBuilder {
    category_id: CategoryId,
    description: String,
    amount: Money,
    kind: TransactionKind,
    date: DateTime<Utc>,
}

impl Default for TestTransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTransactionBuilder {
    /// Creates a builder with default values: a BRL income dated now
    pub fn new() -> Self {
        Self {
            category_id: CategoryId::new(),
            description: "Test transaction".to_string(),
            amount: MoneyFixtures::brl_salary(),
            kind: TransactionKind::Income,
            date: Utc::now(),
        }
    }

    /// Sets the category
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = category_id;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the movement direction
    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the transaction date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds the transaction
    pub fn build(self) -> Transaction {
        Transaction::create(
            self.category_id,
            self.description,
            self.amount,
            self.kind,
            self.date,
        )
    }
}

/// Builder for test accounts, optionally pre-filled with transactions
pub struct TestAccountBuilder {
    name: String,
    currency: Currency,
    transactions: Vec<Transaction>,
}

impl Default for TestAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAccountBuilder {
    /// Creates a builder for a BRL account named "Test Account"
    pub fn new() -> Self {
        Self {
            name: "Test Account".to_string(),
            currency: Currency::BRL,
            transactions: Vec::new(),
        }
    }

    /// Sets the account name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the account currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Queues a transaction to attach after creation
    pub fn with_transaction(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    /// Builds the account and attaches the queued transactions in order
    pub fn build(self) -> Account {
        let mut account = Account::create(self.name, self.currency);
        for transaction in self.transactions {
            account.add_transaction(transaction);
        }
        account
    }
}
