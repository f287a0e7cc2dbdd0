//! Define the generic per-test orchestrator.
//!
//! A [`Harness`] drives the setup half of one test case: build a context,
//! construct one driver and one verifier against it, then expose both for the
//! duration of the test body. Teardown disposes the context unconditionally,
//! on every exit path including unwinding from a failed assertion, via
//! `Drop`.
//!
//! The per-test protocol is a three-state machine: *Idle* (no harness yet) →
//! *Ready* (constructor returned) → *Torn-down* (`teardown` or `Drop`).

use std::rc::Rc;

use crate::context::{ContextBuilder, SharedContext, TestContext};
use crate::errors::HarnessError;
use crate::lifecycle::ContextAware;

/// Bind one [`TestContext`] to one driver and one verifier for one test case.
///
/// Harnesses are constructed anew per test and never reused; dropping the
/// harness tears the context down.
pub struct Harness<D, V> {
    ctx: SharedContext,
    driver: D,
    verifier: V,
}

impl<D: ContextAware, V: ContextAware> Harness<D, V> {
    /// Build a default context and wire a fresh driver/verifier pair to it.
    pub fn new() -> Result<Self, HarnessError> {
        Self::with_context(ContextBuilder::new().build())
    }

    /// Like [`Harness::new`], but with a caller-supplied context, e.g. one
    /// carrying a custom logging dependency.
    pub fn with_context(ctx: TestContext) -> Result<Self, HarnessError> {
        Self::with_factories(ctx, D::init, V::init)
    }
}

impl<D, V> Harness<D, V> {
    /// Construct the harness with explicit driver/verifier factories instead
    /// of the [`ContextAware`] constructors.
    ///
    /// If either factory fails, the error propagates as a setup failure and
    /// the already-built context is disposed before returning.
    pub fn with_factories(
        ctx: TestContext,
        make_driver: impl FnOnce(SharedContext) -> Result<D, HarnessError>,
        make_verifier: impl FnOnce(SharedContext) -> Result<V, HarnessError>,
    ) -> Result<Self, HarnessError> {
        let ctx = ctx.shared();
        let driver = match make_driver(Rc::clone(&ctx)) {
            Ok(driver) => driver,
            Err(err) => {
                dispose_or_log(&ctx);
                return Err(err);
            }
        };
        let verifier = match make_verifier(Rc::clone(&ctx)) {
            Ok(verifier) => verifier,
            Err(err) => {
                dispose_or_log(&ctx);
                return Err(err);
            }
        };
        Ok(Self {
            ctx,
            driver,
            verifier,
        })
    }

    /// Borrow the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutably borrow the driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Borrow the verifier.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Mutably borrow the verifier.
    pub fn verifier_mut(&mut self) -> &mut V {
        &mut self.verifier
    }

    /// Borrow the shared context both halves are wired to.
    pub fn context(&self) -> &SharedContext {
        &self.ctx
    }

    /// Dispose the context explicitly, surfacing any release failure.
    ///
    /// Idempotent: later calls, and the eventual `Drop`, are no-ops.
    pub fn teardown(&mut self) -> Result<(), HarnessError> {
        self.ctx.borrow_mut().dispose()
    }
}

impl<D, V> Drop for Harness<D, V> {
    fn drop(&mut self) {
        // Unconditional teardown; errors cannot propagate from Drop.
        dispose_or_log(&self.ctx);
    }
}

fn dispose_or_log(ctx: &SharedContext) {
    if let Err(err) = ctx.borrow_mut().dispose() {
        tracing::error!(target: "testrig", error = %err, "context teardown failed");
    }
}
