//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the four stages of the
//! instruction pipeline. It includes:
//! 1. **Fetch:** Reads a 4-byte window at the fetch address, latching a fault in its place
//!    when the window would reach the stack or leave memory.
//! 2. **Decode:** Decodes the window and reads register operands.
//! 3. **Execute:** Forwards operands, runs the ALU/BRU, reads memory, raises interrupts.
//! 4. **Store:** Commits results, moves the program counter, and flushes on redirects.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Result store stage implementation.
pub mod store;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Store stage entry point (ST stage).
pub use store::store_stage;
