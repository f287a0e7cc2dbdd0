//! Define the per-test context and its builder.
//!
//! A [`TestContext`] owns everything scoped to one test case: the disposable
//! logging dependency and the [`ResultStore`] through which the driver hands
//! outcomes to the verifier. Exactly one context exists per test execution;
//! it is built in setup, shared (single-threaded) between one driver and one
//! verifier, and disposed exactly once in teardown.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::HarnessError;
use crate::log::{DefaultLogService, LogService};
use crate::results::ResultStore;

/// The single-threaded sharing shape for one context referenced by one driver
/// and one verifier. No locking: setup, test body, and teardown run
/// sequentially on one logical thread.
pub type SharedContext = Rc<RefCell<TestContext>>;

/// Per-test-case container owning the logging dependency and the result
/// store. Once disposed, every other operation fails fast with
/// [`HarnessError::ContextDisposed`].
pub struct TestContext {
    /// `None` once disposed; the log is the context's only owned resource.
    log: Option<Rc<RefCell<dyn LogService>>>,
    results: ResultStore,
}

impl TestContext {
    /// Construct a context owning `log`. A missing dependency is
    /// unrepresentable here; the builder substitutes a default instead.
    pub fn new(log: impl LogService + 'static) -> Self {
        Self::with_shared_log(Rc::new(RefCell::new(log)))
    }

    /// Construct a context from an already-shared logging dependency.
    pub fn with_shared_log(log: Rc<RefCell<dyn LogService>>) -> Self {
        Self {
            log: Some(log),
            results: ResultStore::new(),
        }
    }

    /// Hand out the shared logging dependency, e.g. so a driver can construct
    /// the service under test from it.
    pub fn log(&self) -> Result<Rc<RefCell<dyn LogService>>, HarnessError> {
        self.log
            .as_ref()
            .map(Rc::clone)
            .ok_or(HarnessError::ContextDisposed)
    }

    /// Store `value` as the outcome of the most recent action under `key`.
    pub fn set_result<T: Any>(&mut self, key: &str, value: T) -> Result<(), HarnessError> {
        self.guard()?;
        self.results.set(key, value)
    }

    /// Read back the outcome stored under `key` as a `T`.
    pub fn get_result<T: Any + Clone>(&self, key: &str) -> Result<T, HarnessError> {
        self.guard()?;
        self.results.get::<T>(key).map(Clone::clone)
    }

    /// Borrow the result store directly.
    pub fn results(&self) -> Result<&ResultStore, HarnessError> {
        self.guard()?;
        Ok(&self.results)
    }

    /// Mutably borrow the result store directly.
    pub fn results_mut(&mut self) -> Result<&mut ResultStore, HarnessError> {
        self.guard()?;
        Ok(&mut self.results)
    }

    /// Return true if the context has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.log.is_none()
    }

    /// Release the logging dependency.
    ///
    /// The first call releases exactly once; later calls are no-ops, so
    /// disposal is always safe, including for a context that was never used.
    /// A [`crate::log::ReleaseError`] propagates, but the context still
    /// transitions to disposed so a retry cannot release twice.
    pub fn dispose(&mut self) -> Result<(), HarnessError> {
        let Some(log) = self.log.take() else {
            return Ok(());
        };
        log.borrow_mut().release()?;
        Ok(())
    }

    /// Wrap the context for sharing between a driver and a verifier.
    pub fn shared(self) -> SharedContext {
        Rc::new(RefCell::new(self))
    }

    fn guard(&self) -> Result<(), HarnessError> {
        if self.is_disposed() {
            Err(HarnessError::ContextDisposed)
        } else {
            Ok(())
        }
    }
}

/// Fluent builder for [`TestContext`].
///
/// Accumulates optional dependencies and substitutes a default for anything
/// not supplied. `build` consumes the builder, so a builder cannot be reused
/// across tests.
#[derive(Default)]
pub struct ContextBuilder {
    log: Option<Rc<RefCell<dyn LogService>>>,
}

impl ContextBuilder {
    /// Construct a builder with no dependencies configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the logging dependency explicitly.
    pub fn with_log_service(mut self, log: impl LogService + 'static) -> Self {
        self.log = Some(Rc::new(RefCell::new(log)));
        self
    }

    /// Produce a fresh context, substituting [`DefaultLogService`] when no
    /// logging dependency was supplied.
    pub fn build(self) -> TestContext {
        let log = self
            .log
            .unwrap_or_else(|| Rc::new(RefCell::new(DefaultLogService::default())));
        TestContext::with_shared_log(log)
    }
}
