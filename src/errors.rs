//! Define the harness error taxonomy.
//!
//! Every failure the harness core can produce is one of these variants; none
//! of them is recoverable locally. The harness never retries or swallows an
//! error, it hands the `Result` straight back to the surrounding test runner,
//! which reports the case as errored rather than as a failed assertion.

use thiserror::Error;

use crate::log::ReleaseError;

/// Errors produced by the test context, result store, and harness lifecycle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    /// A result key was empty or all whitespace.
    #[error("result key cannot be empty or blank")]
    BlankKey,

    /// A result was read under a key that was never written. This signals a
    /// wiring bug: the driver never recorded the outcome the verifier expects.
    #[error("no result stored for key '{key}'")]
    ResultNotFound { key: String },

    /// A stored result exists but is not of the type the reader requested.
    #[error("result '{key}' is not of type {expected}; actual: {actual}")]
    ResultTypeMismatch {
        key: String,
        /// Type name requested by the reader.
        expected: &'static str,
        /// Type name recorded when the value was stored.
        actual: &'static str,
    },

    /// An operation was invoked on a context after `dispose`.
    #[error("test context already disposed")]
    ContextDisposed,

    /// The logging dependency failed while releasing its resources.
    #[error("log service release failed: {0}")]
    Release(#[from] ReleaseError),
}
