//! SIA architectural state.
//!
//! This module contains the pieces of machine state a program can observe outside the
//! pipeline. The register file lives in `common::reg`; this module adds:
//! 1. **Memory:** The flat 1000-byte array shared by code, data and the stack.

/// Main memory with range-checked byte and word access.
pub mod memory;

pub use memory::Memory;
