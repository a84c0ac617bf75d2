//! Fatal Emulator Conditions.
//!
//! This module defines the error type returned by every fallible emulator operation. It provides:
//! 1. **Pipeline Faults:** Instruction/stack collisions and out-of-range memory accesses.
//! 2. **Arithmetic Faults:** Integer division by zero in the ALU.
//! 3. **Host Faults:** Unreadable program images and malformed configuration.
//! 4. **Assembler Diagnostics:** Per-line conditions reported by the translator.
//!
//! None of the `SimError` conditions are retried; the driver stops at the first one and the
//! caller reports it and terminates. `AsmError` is the one recoverable case: the offending
//! source line is skipped and assembly continues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions raised while loading or running a program.
#[derive(Debug, Error)]
pub enum SimError {
    /// An instruction on the committed path was fetched within one window of the stack
    /// pointer.
    ///
    /// The growing stack has overrun the code region, so fetching would read stack data
    /// as instructions.
    #[error("instructions and stack may have collided (pc: {pc}, stack pointer: {sp})")]
    InstructionStackCollision {
        /// Address of the instruction that could not be fetched.
        pc: u32,
        /// Stack pointer when the fetch was attempted.
        sp: i32,
    },

    /// A load, store, stack access or fetch touched bytes outside main memory.
    #[error("memory access out of range: {len} byte(s) at offset {addr}")]
    MemoryOutOfBounds {
        /// First byte offset of the access (may be negative for computed addresses).
        addr: i64,
        /// Number of bytes accessed.
        len: usize,
    },

    /// The program image does not fit in main memory.
    #[error("program of {len} bytes does not fit in {capacity} bytes of memory")]
    ProgramTooLarge {
        /// Size of the image in bytes.
        len: usize,
        /// Size of main memory in bytes.
        capacity: usize,
    },

    /// An ALU `divide` instruction had a zero divisor.
    #[error("division by zero at pc {pc}")]
    DivisionByZero {
        /// Address of the faulting instruction.
        pc: u32,
    },

    /// The configured cycle watchdog expired before the program halted.
    #[error("program did not halt within {limit} cycles")]
    CycleLimitExceeded {
        /// Configured cycle limit.
        limit: u64,
    },

    /// A program image or configuration file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SimError {
    /// Builds an out-of-range error for an access of `len` bytes at `addr`.
    #[inline]
    pub fn out_of_bounds(addr: i64, len: usize) -> Self {
        Self::MemoryOutOfBounds { addr, len }
    }
}

/// A malformed assembler source line.
///
/// Every variant carries the 1-based line number it was found on.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AsmError {
    /// The first word of the line is not a known mnemonic.
    #[error("line {line}: unknown mnemonic '{mnemonic}'")]
    UnknownMnemonic {
        /// Source line.
        line: usize,
        /// The unrecognised word, lowercased.
        mnemonic: String,
    },

    /// The line has fewer operands than its mnemonic needs.
    #[error("line {line}: '{mnemonic}' expects {expected} operand(s)")]
    MissingOperand {
        /// Source line.
        line: usize,
        /// Mnemonic being assembled.
        mnemonic: String,
        /// Number of operands the mnemonic takes.
        expected: usize,
    },

    /// A register operand is not `r0`-`r15`.
    #[error("line {line}: invalid register '{operand}'")]
    InvalidRegister {
        /// Source line.
        line: usize,
        /// Operand text.
        operand: String,
    },

    /// A numeric operand does not parse or does not fit its field.
    #[error("line {line}: immediate '{operand}' is not a number in {min}..={max}")]
    InvalidImmediate {
        /// Source line.
        line: usize,
        /// Operand text.
        operand: String,
        /// Smallest encodable value.
        min: i64,
        /// Largest encodable value.
        max: i64,
    },

    /// A branch offset or call/jump target is odd and cannot be stored in half-words.
    #[error("line {line}: offset {value} is not a multiple of 2")]
    OddOffset {
        /// Source line.
        line: usize,
        /// Offending value in bytes.
        value: i64,
    },

    /// The line does not match the assembly grammar.
    #[error("line {line}: syntax error: {message}")]
    Syntax {
        /// Source line.
        line: usize,
        /// Parser message.
        message: String,
    },
}

impl AsmError {
    /// Source line the diagnostic refers to.
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownMnemonic { line, .. }
            | Self::MissingOperand { line, .. }
            | Self::InvalidRegister { line, .. }
            | Self::InvalidImmediate { line, .. }
            | Self::OddOffset { line, .. }
            | Self::Syntax { line, .. } => *line,
        }
    }
}

/// Convenience alias used throughout the emulator.
pub type SimResult<T> = Result<T, SimError>;
