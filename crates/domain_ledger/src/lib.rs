//! Ledger Domain - Accounts, Transactions, and Categories
//!
//! This crate implements the ledger core: the [`Account`] aggregate owns its
//! [`Transaction`]s and is the sole authority for balance correctness. The
//! balance is always the zero-balance replay of the transaction list -
//! income adds, expense subtracts.
//!
//! Recoverable failures (not found, currency mismatch between an account
//! and a request) are produced by the factories in [`error`] and travel as
//! `Outcome` values; they never panic. Currency mismatch *inside* `Money`
//! arithmetic stays a fatal contract violation, which is why the aggregate
//! relies on the orchestration layer to reject mismatched requests before
//! `add_transaction` is reached.

pub mod account;
pub mod category;
pub mod error;
pub mod ports;
pub mod transaction;

pub use account::Account;
pub use category::Category;
pub use ports::{AccountStore, CategoryStore, StoreError};
pub use transaction::{Transaction, TransactionKind};
