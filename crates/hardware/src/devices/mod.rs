//! Host-side devices attached to the machine.
//!
//! The SIA machine has no memory-mapped I/O; its only output path is the diagnostic
//! interrupt, which writes to the console defined here.

/// Diagnostic output sink for interrupt dumps.
pub mod console;

pub use console::Console;
