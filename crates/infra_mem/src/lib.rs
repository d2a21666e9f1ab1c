//! In-Memory Infrastructure - adapters for the repository ports
//!
//! Hash maps behind async read-write locks. These adapters back the API in
//! development and in tests; a database-backed implementation would plug
//! into the same ports.

pub mod accounts;
pub mod categories;
pub mod users;

pub use accounts::MemoryAccountStore;
pub use categories::MemoryCategoryStore;
pub use users::MemoryUserStore;
