//! Shared test infrastructure.

/// Program-level test harness.
pub mod harness;

pub use harness::TestContext;
