//! Core processor implementation.
//!
//! This module contains the pipelined SIA core: architectural memory, the execution units,
//! the four-stage pipeline, and the `Cpu` that ties them together.

/// Architectural state beyond the register file (main memory).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, forwarding).
pub mod pipeline;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Cpu;
