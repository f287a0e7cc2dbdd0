//! Define the lifecycle contract wiring drivers and verifiers to a context.
//!
//! The contract is deliberately constructor-shaped: `init` both receives the
//! context and produces the instance, so initialization happens exactly once
//! per instance, a missing context is unrepresentable, and no instance can be
//! used before it holds its context. Derived setup, such as constructing the
//! service under test from a dependency on the context, belongs inside
//! `init`.

use crate::context::SharedContext;
use crate::errors::HarnessError;

/// Contract for any object that participates in a test case through the
/// shared per-test context, i.e. drivers and verifiers.
///
/// ## Examples
/// ```rust
/// use testrig::prelude::*;
///
/// struct Recorder {
///     ctx: SharedContext,
/// }
///
/// impl ContextAware for Recorder {
///     fn init(ctx: SharedContext) -> Result<Self, HarnessError> {
///         Ok(Self { ctx })
///     }
/// }
/// ```
pub trait ContextAware: Sized {
    /// Construct an instance bound to `ctx`.
    ///
    /// Called exactly once per instance by the harness, before the test body
    /// runs. A failure here is a setup failure; it propagates to the test
    /// runner and the harness still disposes the context.
    fn init(ctx: SharedContext) -> Result<Self, HarnessError>;
}
