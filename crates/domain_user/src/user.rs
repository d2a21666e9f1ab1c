//! User entity

use serde::{Deserialize, Serialize};

use core_kernel::{Lifecycle, UserId};

use crate::email::Email;

/// A registered user
///
/// The password hash is an opaque string produced at the boundary; the
/// domain never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: Email,
    password_hash: String,
    lifecycle: Lifecycle,
}

impl User {
    /// Creates a user with a fresh id
    pub fn create(email: Email, password_hash: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email,
            password_hash: password_hash.into(),
            lifecycle: Lifecycle::start(),
        }
    }

    /// Returns the user identifier
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user's email address
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the stored password hash
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the lifecycle state
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Soft-deletes the user
    pub fn delete(&mut self) {
        self.lifecycle.delete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_fresh_id() {
        let email = Email::parse("user@example.com").unwrap();
        let user = User::create(email.clone(), "$argon2id$stub");

        assert_eq!(user.email(), &email);
        assert_eq!(user.password_hash(), "$argon2id$stub");
        assert!(user.lifecycle().is_active());
    }
}
