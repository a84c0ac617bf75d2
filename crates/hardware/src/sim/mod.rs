//! Simulation driver and program loading.
//!
//! Provides the cycle-loop driver that runs a loaded program to completion, and the
//! utility that reads program images from disk.

/// Program image loading from disk.
pub mod loader;

/// Cycle-loop driver and run summary.
pub mod simulator;

pub use simulator::{RunSummary, Simulator};
