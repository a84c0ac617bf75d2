//! # Unit Components
//!
//! Tests grouped by the component they exercise: the instruction set and assembler, the
//! pipeline core, and the simulation driver.

/// Unit tests for the SIA instruction set: codec, disassembler and assembler.
pub mod isa;

/// Unit tests for the CPU core: execution units, forwarding, control flow, the stack,
/// diagnostic interrupts and fatal conditions.
pub mod core;

/// Unit tests for the loader, configuration, driver and statistics.
pub mod sim;
