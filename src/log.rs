//! Define the disposable logging dependency owned by a test context.
//!
//! The harness only needs "acquire once, release once" from its logging
//! collaborator; the concrete identity behind [`LogService`] is irrelevant to
//! the core. The default implementation forwards records to `tracing`, so
//! running tests with a subscriber installed (see [`init_tracing`]) surfaces
//! everything the services under test logged.

use std::sync::Once;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error raised when a log service fails to release its underlying resources.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct ReleaseError {
    reason: String,
}

impl ReleaseError {
    /// Construct a release error from a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A disposable logging dependency.
///
/// Acquired when the test context is built and released exactly once when the
/// context is disposed. Implementations must tolerate `release` being their
/// final call; the harness guarantees it is never called twice.
pub trait LogService {
    /// Record one log message.
    fn record(&mut self, message: &str);

    /// Release underlying resources. Called exactly once, at context disposal.
    fn release(&mut self) -> Result<(), ReleaseError>;
}

/// Default log service substituted by the context builder when no dependency
/// is supplied explicitly. Forwards records to `tracing` at debug level.
#[derive(Debug, Default)]
pub struct DefaultLogService {
    records: usize,
}

impl LogService for DefaultLogService {
    fn record(&mut self, message: &str) {
        self.records += 1;
        tracing::debug!(target: "testrig", "{message}");
    }

    fn release(&mut self) -> Result<(), ReleaseError> {
        tracing::debug!(target: "testrig", records = self.records, "log service released");
        Ok(())
    }
}

static INIT_TRACING: Once = Once::new();

/// Install a process-wide `tracing` subscriber for test runs.
///
/// Honors `RUST_LOG`-style filtering via the environment, defaulting to
/// `info`. Installation happens at most once per process; later calls are
/// no-ops, so every test may call this unconditionally.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_service_releases_cleanly() {
        let mut log = DefaultLogService::default();
        log.record("hello");
        log.record("world");
        assert_eq!(log.release(), Ok(()));
    }

    #[test]
    fn release_error_displays_its_reason() {
        let err = ReleaseError::new("socket already closed");
        assert_eq!(err.to_string(), "socket already closed");
    }
}
