//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the SIA opcode tables, the tagged instruction type, and the codec that maps
//! raw bytes to instructions and back.
//!
//! # Encoding families
//!
//! * 3-register ALU (opcodes 1-6), 2 bytes.
//! * Branch family (opcode 7): six relative conditions, call, jump; 4 bytes.
//! * Load/store (opcodes 8, 9), stack (10), move (11), interrupt (12), halt (0); 2 bytes.

/// Instruction decoding from a fetched byte window.
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Instruction encoding into bytes.
pub mod encode;

/// Instruction type and bit extraction utilities.
pub mod instruction;

/// Opcode and sub-opcode constants.
pub mod opcodes;

pub use decode::decode;
pub use disasm::{disassemble, disassemble_image};
pub use encode::encode;
pub use instruction::{AluOp, BranchCond, Instruction, InstructionWindow};
