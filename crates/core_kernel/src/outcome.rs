//! Outcome/Error primitives for expected domain failures
//!
//! Recoverable domain failures (not found, validation, conflicts) travel as
//! [`Outcome`] values instead of panics or transport-level errors. The
//! `(code, message)` pairs carried by [`Error`] are a stable contract with
//! callers; codes must never change once published.
//!
//! Accessing the value of a failed outcome is a caller bug and panics. This
//! is the contract-violation path, not a recoverable one: check
//! [`Outcome::is_success`] first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A domain failure with a stable machine-readable code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    code: String,
    message: String,
}

impl Error {
    /// Creates an error with an explicit code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a validation failure with the fixed `VALIDATION_ERROR` code
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Returns the stable error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

/// The outcome of a domain operation: a value or a domain [`Error`]
///
/// A sum type makes the inconsistent states of a success-with-error or
/// failure-without-error unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation succeeded with a value
    Success(T),
    /// The operation failed with a domain error
    Failure(Error),
}

impl<T> Outcome<T> {
    /// Wraps a value in a successful outcome
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wraps a domain error in a failed outcome
    pub fn failure(error: Error) -> Self {
        Outcome::Failure(error)
    }

    /// Returns true if the outcome holds a value
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns true if the outcome holds an error
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the error of a failed outcome, if any
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Returns a reference to the value
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    pub fn value(&self) -> &T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("cannot access value of a failed outcome: {error}")
            }
        }
    }

    /// Consumes the outcome, returning the value
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("cannot access value of a failed outcome: {error}")
            }
        }
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_exposes_value() {
        let outcome = Outcome::success(42);

        assert!(outcome.is_success());
        assert!(outcome.error().is_none());
        assert_eq!(*outcome.value(), 42);
        assert_eq!(outcome.into_value(), 42);
    }

    #[test]
    fn test_failure_exposes_error() {
        let outcome: Outcome<i32> = Outcome::failure(Error::validation("bad input"));

        assert!(!outcome.is_success());
        assert!(outcome.is_failure());
        assert_eq!(outcome.error().unwrap().code(), "VALIDATION_ERROR");
        assert_eq!(outcome.error().unwrap().message(), "bad input");
    }

    #[test]
    #[should_panic(expected = "cannot access value of a failed outcome")]
    fn test_value_on_failure_panics() {
        let outcome: Outcome<i32> = Outcome::failure(Error::new("SOME_CODE", "boom"));

        let _ = outcome.value();
    }

    #[test]
    fn test_error_display() {
        let error = Error::new("ACCOUNT_NOT_FOUND", "Account was not found.");

        assert_eq!(error.to_string(), "ACCOUNT_NOT_FOUND: Account was not found.");
    }
}
