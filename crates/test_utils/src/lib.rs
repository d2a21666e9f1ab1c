//! Test Utilities
//!
//! Builders and fixtures for constructing domain test data with sensible
//! defaults, so tests specify only the fields they care about.

pub mod builders;
pub mod fixtures;

pub use builders::{TestAccountBuilder, TestTransactionBuilder};
pub use fixtures::MoneyFixtures;
