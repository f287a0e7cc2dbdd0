#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Demo services exercised by the testrig acceptance scenarios.
//!
//! These are collaborators of the harness, not part of it: small services
//! constructed from the logging dependency a driver takes off the shared
//! test context.

mod greeting;
mod user;

pub use greeting::GreetingService;
pub use user::UserService;

use thiserror::Error;

/// Errors produced by the demo services.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// `greet` was called with an empty or all-whitespace name.
    #[error("name cannot be empty")]
    EmptyName,
}
