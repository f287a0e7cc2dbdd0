//! Convenience re-exports for test files.
//!
//! Pulling in everything a driver/verifier definition needs:
//! `use testrig::prelude::*;`

pub use crate::context::{ContextBuilder, SharedContext, TestContext};
pub use crate::errors::HarnessError;
pub use crate::harness::Harness;
pub use crate::lifecycle::ContextAware;
pub use crate::log::{DefaultLogService, LogService, ReleaseError};
pub use crate::results::ResultStore;
