//! User Domain - Users and credentials
//!
//! Users own the ledger's accounts at the product level, but the domain
//! keeps them decoupled: a [`User`] is an email plus a password hash. The
//! domain never hashes or verifies passwords - that is boundary work; it
//! only stores the opaque hash the boundary hands it.

pub mod email;
pub mod error;
pub mod ports;
pub mod user;

pub use email::Email;
pub use ports::{UserStore, UserStoreError};
pub use user::User;
