//! SIA pipelined emulator library.
//!
//! This crate implements a cycle-level emulator for the SIA instruction set (16 signed
//! 32-bit registers, 1000 bytes of memory, 2- and 4-byte instructions) with the following:
//! 1. **Core:** A four-stage pipeline (fetch, decode, execute, store) with operand
//!    forwarding and branch-triggered flushing.
//! 2. **ISA:** Decoding, encoding and disassembly of every instruction family.
//! 3. **Assembler:** The line-oriented translator from SIA assembly to a binary image.
//! 4. **Simulation:** Loader, driver, configuration, diagnostic console and statistics.
//!
//! # Example
//!
//! ```
//! use siasim_core::{Config, Simulator, asm};
//!
//! let program = asm::assemble("move 5 r1\nadd r1 r1 r2\nhalt\n");
//! let mut sim = Simulator::new(&Config::default());
//! sim.load_program(&program.bytes).unwrap();
//! let summary = sim.run().unwrap();
//! assert_eq!(sim.cpu.regs.read(2), 10);
//! assert_eq!(summary.pc, 4);
//! ```

/// Line-oriented assembler.
pub mod asm;
/// Common types and constants (register file, errors, machine sizes).
pub mod common;
/// Emulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (pipeline, memory, execution units).
pub mod core;
/// Host-side devices (diagnostic console).
pub mod devices;
/// Instruction set (opcodes, instruction type, decode, encode, disassembly).
pub mod isa;
/// Binary loader and execution driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, pipeline latches, and stats.
pub use crate::core::Cpu;
/// Execution driver; owns the CPU and runs the cycle loop.
pub use crate::sim::{RunSummary, Simulator};
