//! Core Kernel - Foundational types for the cash ledger
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise decimal arithmetic and currency safety
//! - Strongly-typed entity identifiers
//! - Shared entity lifecycle state (creation, update, soft delete)
//! - Outcome/Error primitives for expected domain failures

pub mod identifiers;
pub mod lifecycle;
pub mod money;
pub mod outcome;

pub use identifiers::{AccountId, CategoryId, TransactionId, UserId};
pub use lifecycle::Lifecycle;
pub use money::{Currency, Money};
pub use outcome::{Error, Outcome};
