//! Entity lifecycle tests

use core_kernel::Lifecycle;

#[test]
fn new_lifecycle_is_active_with_no_update() {
    let lifecycle = Lifecycle::start();

    assert!(lifecycle.is_active());
    assert!(lifecycle.last_update().is_none());
    assert!(lifecycle.created_at() <= chrono::Utc::now());
}

#[test]
fn delete_is_terminal() {
    let mut lifecycle = Lifecycle::start();

    lifecycle.delete();

    assert!(!lifecycle.is_active());
    // Invariant: inactive implies a last_update stamp.
    assert!(lifecycle.last_update().is_some());
}

#[test]
fn repeated_delete_never_regresses_the_stamp() {
    let mut lifecycle = Lifecycle::start();

    lifecycle.delete();
    let first = lifecycle.last_update().unwrap();

    lifecycle.delete();
    let second = lifecycle.last_update().unwrap();

    assert!(!lifecycle.is_active());
    assert!(second >= first);
    assert!(second >= lifecycle.created_at());
}
