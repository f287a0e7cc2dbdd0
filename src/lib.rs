#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Acceptance-test harness built around a driver/verifier pair sharing one
//! per-test context.
//!
//! A test case is expressed as a **driver** (exercises the system under test)
//! and a **verifier** (asserts on the outcome). Both are wired by a
//! [`Harness`] to a single [`TestContext`] that owns test-scoped resources
//! (a disposable [`log::LogService`]) and records the result of the most
//! recent action in a type-checked [`ResultStore`].
//!
//! ## Examples
//! ```rust
//! use testrig::prelude::*;
//!
//! struct Driver {
//!     ctx: SharedContext,
//! }
//!
//! impl ContextAware for Driver {
//!     fn init(ctx: SharedContext) -> Result<Self, HarnessError> {
//!         Ok(Self { ctx })
//!     }
//! }
//!
//! impl Driver {
//!     fn act(&self) {
//!         self.ctx
//!             .borrow_mut()
//!             .set_result("outcome", String::from("done"))
//!             .expect("record outcome");
//!     }
//! }
//!
//! struct Verifier {
//!     ctx: SharedContext,
//! }
//!
//! impl ContextAware for Verifier {
//!     fn init(ctx: SharedContext) -> Result<Self, HarnessError> {
//!         Ok(Self { ctx })
//!     }
//! }
//!
//! impl Verifier {
//!     fn check(&self) {
//!         let outcome: String = self
//!             .ctx
//!             .borrow()
//!             .get_result("outcome")
//!             .expect("read outcome");
//!         assert_eq!(outcome, "done");
//!     }
//! }
//!
//! let harness: Harness<Driver, Verifier> = Harness::new().expect("setup");
//! harness.driver().act();
//! harness.verifier().check();
//! // Dropping the harness disposes the context.
//! ```
//!
//! This is not a dependency-injection container: the only triad it wires is
//! driver, verifier, and context. Test discovery and assertions stay with the
//! Rust test runner.

pub mod context;
pub mod errors;
pub mod harness;
pub mod lifecycle;
pub mod log;
pub mod prelude;
pub mod results;

pub use context::{ContextBuilder, SharedContext, TestContext};
pub use errors::HarnessError;
pub use harness::Harness;
pub use lifecycle::ContextAware;
pub use log::{DefaultLogService, LogService, ReleaseError};
pub use results::ResultStore;
