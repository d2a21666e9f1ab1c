//! Email address value object

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

use core_kernel::Error;

/// A normalized, validated email address
///
/// Parsing trims whitespace and lowercases; two emails differing only in
/// case compare equal after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parses and normalizes an address
    ///
    /// Rejections are recoverable validation failures, surfaced with the
    /// `VALIDATION_ERROR` code.
    pub fn parse(address: impl AsRef<str>) -> Result<Self, Error> {
        let address = address.as_ref().trim().to_lowercase();

        if address.is_empty() {
            return Err(Error::validation("The field Email must be informed."));
        }
        if address.len() > 254 {
            return Err(Error::validation(
                "Email length exceeds the maximum allowed length of 254 characters.",
            ));
        }
        if !address.validate_email() {
            return Err(Error::validation("Invalid email format."));
        }

        Ok(Self(address))
    }

    /// Returns the normalized address
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let email = Email::parse("  Someone@Example.COM ").unwrap();

        assert_eq!(email.as_str(), "someone@example.com");
    }

    #[test]
    fn test_empty_address_is_rejected() {
        let error = Email::parse("   ").unwrap_err();

        assert_eq!(error.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_overlong_address_is_rejected() {
        let local = "a".repeat(250);
        let error = Email::parse(format!("{local}@example.com")).unwrap_err();

        assert_eq!(error.code(), "VALIDATION_ERROR");
        assert!(error.message().contains("254"));
    }

    #[test]
    fn test_malformed_address_is_rejected() {
        assert!(Email::parse("not-an-email").is_err());
        assert!(Email::parse("missing@tld@twice").is_err());
    }

    #[test]
    fn test_equality_after_normalization() {
        assert_eq!(
            Email::parse("USER@example.com").unwrap(),
            Email::parse("user@EXAMPLE.com").unwrap()
        );
    }
}
