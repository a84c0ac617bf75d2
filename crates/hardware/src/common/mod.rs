//! Common utilities and types used throughout the SIA emulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the emulator. It includes:
//! 1. **Constants:** Memory size, register layout, instruction sizes and pipeline depths.
//! 2. **Error Handling:** The fatal `SimError` conditions and per-line `AsmError` diagnostics.
//! 3. **Register Management:** The 16-entry signed register file.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types for fatal emulator conditions and assembler diagnostics.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, REG_SP};
pub use error::{AsmError, SimError, SimResult};
pub use reg::RegisterFile;
