//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the emulator. It includes:
//! 1. **Memory Constants:** Size of the flat byte-addressable memory and word width.
//! 2. **Register Constants:** Register count and the stack pointer index.
//! 3. **Instruction Constants:** Fetch window and instruction sizes.
//! 4. **Pipeline Constants:** Depth of the forwarding history.

/// Size of main memory in bytes.
///
/// Code, data and the stack share this single address space.
pub const MEMORY_SIZE: usize = 1000;

/// Width of a memory word (registers are stored big-endian in four bytes).
pub const WORD_SIZE: usize = 4;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 16;

/// Index of the register used as the stack pointer.
pub const REG_SP: usize = 15;

/// Initial value of the stack pointer: the top of memory.
///
/// The stack grows downward from here.
pub const INITIAL_SP: i32 = MEMORY_SIZE as i32;

/// Number of bytes the fetch stage reads at the program counter.
///
/// Two-byte instructions ignore the trailing pair.
pub const FETCH_WINDOW: usize = 4;

/// Size of a short (non-branch) instruction in bytes.
pub const INSTRUCTION_SIZE_16: u32 = 2;

/// Size of a branch-family instruction in bytes.
pub const INSTRUCTION_SIZE_32: u32 = 4;

/// Number of recent register writes kept by the forwarding unit.
pub const HISTORY_DEPTH: usize = 4;

/// Number of bytes printed per line of a memory dump.
pub const MEMORY_DUMP_ROW: usize = 20;
