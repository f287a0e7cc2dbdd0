//! Snapshot tests for the canonical rendering of harness errors.
//!
//! The exact wording is part of the debugging contract (a type mismatch must
//! name both the requested and the stored type), so it is pinned here.
//! Review changes: `cargo insta review`

use testrig::errors::HarnessError;
use testrig::log::ReleaseError;
use testrig::results::ResultStore;

#[test]
fn blank_key_message() {
    let message = HarnessError::BlankKey.to_string();
    insta::assert_snapshot!("blank_key", message);
}

#[test]
fn not_found_message() {
    let message = HarnessError::ResultNotFound {
        key: "greeting".to_owned(),
    }
    .to_string();
    insta::assert_snapshot!("not_found", message);
}

#[test]
fn type_mismatch_message_names_both_types() {
    let mut store = ResultStore::new();
    store
        .set("greeting", String::from("Hello, Alice!"))
        .expect("set failed");
    let message = store
        .get::<i64>("greeting")
        .expect_err("expected a type mismatch")
        .to_string();
    insta::assert_snapshot!("type_mismatch", message);
}

#[test]
fn context_disposed_message() {
    let message = HarnessError::ContextDisposed.to_string();
    insta::assert_snapshot!("context_disposed", message);
}

#[test]
fn release_failure_message() {
    let message = HarnessError::Release(ReleaseError::new("socket already closed")).to_string();
    insta::assert_snapshot!("release_failure", message);
}
