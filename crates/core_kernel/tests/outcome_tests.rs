//! Outcome/Error contract tests

use core_kernel::{Error, Outcome};
use std::panic::catch_unwind;

#[test]
fn success_roundtrips_its_value() {
    let outcome = Outcome::success("hello".to_string());

    assert!(outcome.is_success());
    assert_eq!(outcome.value(), "hello");
    assert_eq!(outcome.into_value(), "hello");
}

#[test]
fn failure_carries_the_error() {
    let outcome: Outcome<()> = Outcome::failure(Error::new("ACCOUNT_NOT_FOUND", "missing"));

    assert!(outcome.is_failure());
    let error = outcome.error().unwrap();
    assert_eq!(error.code(), "ACCOUNT_NOT_FOUND");
    assert_eq!(error.message(), "missing");
}

#[test]
fn accessing_value_of_failure_is_fatal() {
    let outcome: Outcome<u32> = Outcome::failure(Error::validation("nope"));

    assert!(catch_unwind(move || outcome.into_value()).is_err());
}

#[test]
fn validation_factory_uses_the_stable_code() {
    let error = Error::validation("The field Name must be informed.");

    assert_eq!(error.code(), "VALIDATION_ERROR");
    assert_eq!(error.message(), "The field Name must be informed.");
}

#[test]
fn outcome_from_result() {
    let ok: Outcome<u32> = Ok(7).into();
    let err: Outcome<u32> = Err(Error::validation("bad")).into();

    assert!(ok.is_success());
    assert!(err.is_failure());
}

#[test]
fn error_serializes_code_and_message() {
    let error = Error::new("TRANSACTION_CURRENCY_MISMATCH", "mismatch");

    let json = serde_json::to_value(&error).unwrap();

    assert_eq!(json["code"], "TRANSACTION_CURRENCY_MISMATCH");
    assert_eq!(json["message"], "mismatch");
}
